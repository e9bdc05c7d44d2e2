/// latest core: enumeration, classification, and selection.
///
/// This crate contains all selection logic with zero CLI dependencies.
/// It is designed to be reusable from any frontend that wants "the newest
/// (or oldest) N files matching these patterns".
///
/// # Modules
///
/// - [`model`]: File candidates, selection requests, timestamp formatting.
/// - [`scanner`]: Glob expansion and stat of the candidate set.
/// - [`analysis`]: Kind classification and top-N selection by mtime.
/// - [`probe`]: MIME type detection behind the [`probe::MimeProbe`] trait.
pub mod analysis;
pub mod model;
pub mod probe;
pub mod scanner;
