/// MIME probing: maps a file to a MIME type string.
///
/// The selector only depends on the [`MimeProbe`] trait so tests can swap in
/// a table-driven fake. [`ContentSniffer`] is the production implementation.
pub mod sniff;

pub use sniff::ContentSniffer;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a file could not be classified.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not determine a MIME type for {}", .0.display())]
    Unknown(PathBuf),
}

/// A deterministic MIME type oracle.
pub trait MimeProbe {
    /// Return the MIME type of the file at `path`, e.g. `image/png`.
    fn probe(&self, path: &Path) -> Result<String, ProbeError>;
}
