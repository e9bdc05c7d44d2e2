/// Selection request: what the user asked for, validated once.
use crate::analysis::kind::Kind;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Count used when neither direction is given explicitly.
pub const DEFAULT_COUNT: usize = 1;

/// Which end of the modification-time ordering to take files from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Most recently modified first.
    Newest,
    /// Least recently modified first.
    Oldest,
}

/// Invalid combinations of selection flags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("count must be a positive integer, got {0}")]
    NonPositiveCount(u64),

    #[error("newest and oldest selection cannot be requested together")]
    ConflictingDirections,
}

/// A validated, read-only selection request.
#[derive(Debug, Clone)]
pub struct SelectionRequest {
    direction: Direction,
    count: NonZeroUsize,
    kind: Option<Kind>,
    allow_empty: bool,
    quiet: bool,
}

impl SelectionRequest {
    /// Build a request for an explicit direction and count.
    ///
    /// Fails with [`RequestError::NonPositiveCount`] when `count == 0`.
    pub fn new(
        direction: Direction,
        count: usize,
        kind: Option<Kind>,
        allow_empty: bool,
        quiet: bool,
    ) -> Result<Self, RequestError> {
        let count =
            NonZeroUsize::new(count).ok_or(RequestError::NonPositiveCount(count as u64))?;
        Ok(Self {
            direction,
            count,
            kind,
            allow_empty,
            quiet,
        })
    }

    /// Build a request from the two mutually exclusive direction flags.
    ///
    /// Neither flag means "newest [`DEFAULT_COUNT`]". Both flags at once is
    /// rejected regardless of their values.
    pub fn from_flags(
        newest: Option<u64>,
        oldest: Option<u64>,
        kind: Option<&str>,
        allow_empty: bool,
        quiet: bool,
    ) -> Result<Self, RequestError> {
        let (direction, count) = match (newest, oldest) {
            (Some(_), Some(_)) => return Err(RequestError::ConflictingDirections),
            (Some(n), None) => (Direction::Newest, n),
            (None, Some(n)) => (Direction::Oldest, n),
            (None, None) => (Direction::Newest, DEFAULT_COUNT as u64),
        };
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        if count == 0 {
            return Err(RequestError::NonPositiveCount(0));
        }
        // A blank keyword means no kind filter at all.
        let kind = kind
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(Kind::parse);
        Self::new(direction, count, kind, allow_empty, quiet)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn kind(&self) -> Option<&Kind> {
        self.kind.as_ref()
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
