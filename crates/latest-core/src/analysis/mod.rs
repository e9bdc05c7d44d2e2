/// Analysis modules: kind classification and mtime-based selection.

pub mod kind;
pub mod select;

pub use kind::{rule_for, Kind, KindRule, MimeMatch, KIND_RULES};
pub use select::select;
