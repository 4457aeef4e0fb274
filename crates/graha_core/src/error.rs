//! Error types for core capabilities.

use std::error::Error;
use std::fmt::{Display, Formatter};

use graha_time::TimeError;

/// Errors from capability providers or input validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// A required body is absent from a provider's position list.
    MissingBody(&'static str),
    /// Geographic coordinates out of range.
    InvalidLocation(&'static str),
    /// Time conversion failed.
    Time(TimeError),
    /// The provider could not produce a result.
    Provider(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBody(name) => write!(f, "body missing from position list: {name}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
        }
    }
}

impl Error for CoreError {}

impl From<TimeError> for CoreError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
