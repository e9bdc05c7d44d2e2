/// Output formatting and exit status.
///
/// Selected paths go to the primary stream, one absolute path per line and
/// nothing else. Everything meant for a human (skipped arguments, counts,
/// per-file notes) goes to the diagnostic stream, prefixed with the program
/// name, and is dropped entirely in quiet mode.
use latest_core::model::time::format_timestamp;
use latest_core::model::FileCandidate;
use latest_core::scanner::SkippedEntry;
use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;

/// How a run ended, and therefore which exit status to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This many paths were printed.
    Selected(usize),
    /// Nothing was printed; `allowed` reflects `--allow-empty-result`.
    Empty { allowed: bool },
}

impl Outcome {
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Empty { allowed: false })
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Why a selection came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Enumeration produced no files at all.
    NoFiles,
    /// Files existed but none passed the kind filter.
    NoKindMatch,
}

impl EmptyReason {
    fn message(self) -> &'static str {
        match self {
            Self::NoFiles => "No files found matching the given path or wildcard pattern(s).",
            Self::NoKindMatch => "No files matched the specified kind filter.",
        }
    }
}

pub struct Presenter<O: Write, E: Write> {
    out: O,
    err: E,
    program: String,
    quiet: bool,
}

impl<O: Write, E: Write> Presenter<O, E> {
    pub fn new(out: O, err: E, program: impl Into<String>, quiet: bool) -> Self {
        Self {
            out,
            err,
            program: program.into(),
            quiet,
        }
    }

    /// Write one `program: message` line to the diagnostic stream.
    pub fn diagnostic(&mut self, message: impl Display) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.err, "{}: {message}", self.program)
    }

    pub fn skipped(&mut self, entries: &[SkippedEntry]) -> io::Result<()> {
        for entry in entries {
            self.diagnostic(entry)?;
        }
        Ok(())
    }

    /// Print the selection in order and report success.
    pub fn selected(&mut self, selection: &[FileCandidate]) -> io::Result<Outcome> {
        for candidate in selection {
            let path = candidate.path().display();
            self.diagnostic(format_args!(
                "Selected {path} (modified {})",
                format_timestamp(candidate.modified())
            ))?;
            writeln!(self.out, "{path}")?;
        }
        self.out.flush()?;
        Ok(Outcome::Selected(selection.len()))
    }

    /// Report an empty selection.
    ///
    /// With `allow_empty` the run ends quietly and successfully; otherwise
    /// the reason is printed and the outcome is a failure.
    pub fn empty(&mut self, reason: EmptyReason, allow_empty: bool) -> io::Result<Outcome> {
        if !allow_empty {
            self.diagnostic(reason.message())?;
        }
        self.err.flush()?;
        Ok(Outcome::Empty {
            allowed: allow_empty,
        })
    }

    /// Consume the presenter and hand back both streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
