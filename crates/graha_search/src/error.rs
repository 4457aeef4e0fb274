//! Error types for day-element search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use graha_core::CoreError;

/// Errors from the panchangam solver.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from a capability provider.
    Core(CoreError),
    /// The sunrise provider produced no usable window.
    NoSunrise(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "provider error: {e}"),
            Self::NoSunrise(msg) => write!(f, "no sunrise window: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}
