/// Skipped-entry reporting: per-argument problems found during enumeration.
///
/// None of these abort a run. The scanner collects them and the frontend
/// decides whether to show them.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkippedEntry {
    /// A literal path that does not exist.
    #[error("No such file: {}", .0.display())]
    Missing(PathBuf),

    /// A literal path that exists but is a directory or other non-file.
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// A glob pattern that matched nothing at all.
    #[error("No match for pattern: {0}")]
    NoMatch(String),

    /// A glob pattern that failed to compile.
    #[error("Invalid pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A path whose metadata or directory listing could not be read.
    #[error("Cannot read {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}
