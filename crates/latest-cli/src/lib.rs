/// latest CLI: argument parsing, run orchestration, and output.
///
/// This crate contains all terminal-facing code. Selection logic lives in
/// `latest-core`.
pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

pub use app::{execute, run};
pub use args::Args;
pub use presenter::{EmptyReason, Outcome, Presenter};

pub use latest_core::model::RequestError;
