/// A single file that survived enumeration.
///
/// Candidates are built once by the scanner and never mutated afterwards.
/// The MIME type is only filled in by the selector when a kind filter is
/// active, producing a new value via [`FileCandidate::with_mime`].
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// An existing regular file with its path and modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// Absolute, lexically normalised path.
    path: PathBuf,
    /// Last-modified timestamp as reported by `stat`.
    modified: SystemTime,
    /// Detected MIME type, present only after a kind-filtered selection.
    mime: Option<String>,
}

impl FileCandidate {
    /// Create a candidate without a resolved MIME type.
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        Self {
            path,
            modified,
            mime: None,
        }
    }

    /// Return a copy of this candidate carrying the given MIME type.
    pub fn with_mime(self, mime: impl Into<String>) -> Self {
        Self {
            mime: Some(mime.into()),
            ..self
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
