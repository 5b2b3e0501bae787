//! Error types for the Worthline library.
//!
//! Only malformed inputs are errors. Degenerate but well-formed data (empty
//! snapshots, non-positive values, zero-length periods) is never reported
//! through this type; computations express it as an absent `Option`.

use thiserror::Error;

/// A specialized Result type for Worthline operations.
pub type WorthlineResult<T> = Result<T, WorthlineError>;

/// The main error type for Worthline operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorthlineError {
    /// Invalid calendar date or unparseable date/instant text.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Period whose end precedes its start.
    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod {
        /// Start instant, RFC 3339.
        start: String,
        /// End instant, RFC 3339.
        end: String,
    },
}

impl WorthlineError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            start: start.into(),
            end: end.into(),
        }
    }
}
