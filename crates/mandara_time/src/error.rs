//! Error types for time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar/time string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Datetime string did not match the expected ISO-8601 form.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "datetime parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
