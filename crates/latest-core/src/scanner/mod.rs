/// Scanner module: turns command-line arguments into file candidates.
///
/// Each argument is either a glob pattern (contains `*`, `?` or `[`) or a
/// literal path. Globs are expanded with the [`glob`] crate, literals are
/// taken as-is. An argument that fails to compile as a pattern is still used
/// as a literal when it names an existing path. Every resulting path is stat'ed once; only existing regular
/// files survive, keyed by their absolute path so the same file named twice
/// appears once.
///
/// Problems with individual arguments are collected as [`SkippedEntry`]
/// values instead of errors, so one bad argument never aborts the run.
pub mod pattern;
pub mod skipped;

pub use skipped::SkippedEntry;

use crate::model::FileCandidate;
use pattern::{absolutize, is_glob, MATCH_OPTIONS};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of enumerating a set of arguments.
#[derive(Debug, Default)]
pub struct Enumeration {
    /// Existing regular files, deduplicated by absolute path.
    pub candidates: Vec<FileCandidate>,
    /// Arguments or paths that contributed nothing, in discovery order.
    pub skipped: Vec<SkippedEntry>,
}

/// Whether a path came from a literal argument or from glob expansion.
///
/// Only literal arguments produce "missing" / "not a file" reports; a glob
/// that also matches directories is not worth a diagnostic per directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Literal,
    Glob,
}

/// Expand and stat every argument in order.
pub fn enumerate<S: AsRef<str>>(args: &[S]) -> Enumeration {
    let mut scan = Scan::default();
    for arg in args {
        let arg = arg.as_ref();
        if is_glob(arg) {
            scan.expand(arg);
        } else {
            scan.add(Path::new(arg), Origin::Literal);
        }
    }
    debug!(
        candidates = scan.out.candidates.len(),
        skipped = scan.out.skipped.len(),
        "enumeration finished"
    );
    scan.out
}

#[derive(Default)]
struct Scan {
    out: Enumeration,
    seen: HashSet<PathBuf>,
}

impl Scan {
    fn expand(&mut self, pattern: &str) {
        let paths = match glob::glob_with(pattern, MATCH_OPTIONS) {
            Ok(paths) => paths,
            Err(err) if fs::symlink_metadata(pattern).is_ok() => {
                // Not a valid pattern, but an existing path such as `foo[`.
                debug!(pattern, "invalid pattern ({}), using it as a path", err.msg);
                self.add(Path::new(pattern), Origin::Literal);
                return;
            }
            Err(err) => {
                self.out.skipped.push(SkippedEntry::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: err.msg.to_string(),
                });
                return;
            }
        };

        let mut matched = false;
        for entry in paths {
            match entry {
                Ok(path) => {
                    matched = true;
                    self.add(&path, Origin::Glob);
                }
                Err(err) => {
                    // Unreadable directory somewhere under the pattern.
                    warn!(path = %err.path().display(), "glob error: {}", err.error());
                    self.out.skipped.push(SkippedEntry::Unreadable {
                        path: err.path().to_path_buf(),
                        message: err.error().to_string(),
                    });
                }
            }
        }

        if !matched {
            self.out
                .skipped
                .push(SkippedEntry::NoMatch(pattern.to_string()));
        }
    }

    fn add(&mut self, path: &Path, origin: Origin) {
        // Follows symlinks: a link to a regular file counts as that file.
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                // Covers files that vanished between glob and stat.
                if origin == Origin::Literal {
                    self.out
                        .skipped
                        .push(SkippedEntry::Missing(path.to_path_buf()));
                } else {
                    debug!(path = %path.display(), "vanished before stat");
                }
                return;
            }
            Err(err) => {
                warn!(path = %path.display(), "stat failed: {err}");
                self.out.skipped.push(SkippedEntry::Unreadable {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                return;
            }
        };

        if !meta.is_file() {
            match origin {
                Origin::Literal => self
                    .out
                    .skipped
                    .push(SkippedEntry::NotAFile(path.to_path_buf())),
                Origin::Glob => debug!(path = %path.display(), "skipping non-file match"),
            }
            return;
        }

        let modified = match meta.modified() {
            Ok(t) => t,
            Err(err) => {
                self.out.skipped.push(SkippedEntry::Unreadable {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                return;
            }
        };

        let absolute = match absolutize(path) {
            Ok(p) => p,
            Err(err) => {
                self.out.skipped.push(SkippedEntry::Unreadable {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                return;
            }
        };

        if self.seen.insert(absolute.clone()) {
            self.out
                .candidates
                .push(FileCandidate::new(absolute, modified));
        } else {
            debug!(path = %absolute.display(), "duplicate path");
        }
    }
}
