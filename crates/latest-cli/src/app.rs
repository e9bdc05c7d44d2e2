/// Run orchestration: enumerate -> select -> present.
use crate::args::Args;
use crate::presenter::{EmptyReason, Outcome, Presenter};
use anyhow::Result;
use latest_core::analysis::select;
use latest_core::model::SelectionRequest;
use latest_core::probe::{ContentSniffer, MimeProbe};
use latest_core::scanner::{enumerate, Enumeration};
use std::io::{self, Write};
use tracing::info;

/// Run one selection against `patterns`, writing through `presenter`.
///
/// Only output-stream failures are errors. Per-file problems are reported as
/// diagnostics and an empty selection is an [`Outcome`], not an `Err`.
pub fn run<O: Write, E: Write>(
    request: &SelectionRequest,
    patterns: &[String],
    probe: &dyn MimeProbe,
    presenter: &mut Presenter<O, E>,
) -> Result<Outcome> {
    let Enumeration {
        candidates,
        skipped,
    } = enumerate(patterns);

    if candidates.is_empty() {
        // An allowed empty result ends silently, without per-argument notes.
        if !request.allow_empty() {
            presenter.skipped(&skipped)?;
        }
        return Ok(presenter.empty(EmptyReason::NoFiles, request.allow_empty())?);
    }
    presenter.skipped(&skipped)?;
    info!(candidates = candidates.len(), "enumerated");

    let selection = select(candidates, request, probe);
    if selection.is_empty() {
        // Without a kind filter any non-empty candidate set yields at least one file.
        return Ok(presenter.empty(EmptyReason::NoKindMatch, request.allow_empty())?);
    }

    if selection.len() < request.count() && !request.allow_empty() {
        presenter.diagnostic(format_args!(
            "Fewer files were found than requested: {}",
            selection.len()
        ))?;
    }

    Ok(presenter.selected(&selection)?)
}

/// Parse-to-exit entry point used by the binary.
///
/// Writes to the process's stdout and stderr and probes MIME types from file
/// content. Invalid flag combinations surface as a
/// [`RequestError`](latest_core::model::RequestError) inside the `anyhow` error.
pub fn execute(args: Args, program: &str) -> Result<Outcome> {
    let (request, patterns) = args.into_request()?;
    let mut presenter = Presenter::new(io::stdout(), io::stderr(), program, request.quiet());
    run(&request, &patterns, &ContentSniffer::new(), &mut presenter)
}
