//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
