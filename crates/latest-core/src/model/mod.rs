/// Data model for file selection.
///
/// Re-exports the candidate and request types shared by the scanner,
/// the analysis passes, and the CLI frontend.
pub mod candidate;
pub mod request;
pub mod time;

pub use candidate::FileCandidate;
pub use request::{Direction, RequestError, SelectionRequest};
