//! Error types for delivery planning.

use thiserror::Error;

use crate::models::Coordinate;

/// Result type alias for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Coarse classification of a [`PlanError`], for callers that branch on
/// the cause rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The map or request document has the wrong shape.
    InvalidInput,
    /// The map text is not a rectangular grid.
    MalformedMap,
    /// Two cells that must be connected are not.
    NoPath,
}

/// Errors that can occur while building a delivery schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Map argument is not text, or the request document is not an object
    /// of the expected shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Grid rows of inconsistent length, or an empty map.
    #[error("malformed map: {0}")]
    MalformedMap(String),

    /// Breadth-first search exhausted its frontier.
    #[error("no path from ({}, {}) to ({}, {})", .from.x, .from.y, .to.x, .to.y)]
    NoPath {
        /// Start of the requested leg.
        from: Coordinate,
        /// End of the requested leg.
        to: Coordinate,
    },
}

impl PlanError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }

    /// Create a malformed map error.
    #[must_use]
    pub fn malformed_map(details: impl Into<String>) -> Self {
        Self::MalformedMap(details.into())
    }

    /// Create a no-path error for the leg `from → to`.
    #[must_use]
    pub const fn no_path(from: Coordinate, to: Coordinate) -> Self {
        Self::NoPath { from, to }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::MalformedMap(_) => ErrorKind::MalformedMap,
            Self::NoPath { .. } => ErrorKind::NoPath,
        }
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
