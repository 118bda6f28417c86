use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`FactsError`] enum of this crate.
#[derive(Debug, Error)]
pub enum FactsError {
    /// Builder validation errors (missing or malformed base URL).
    #[error("Validation error: {message}")]
    Validation { message: Cow<'static, str> },

    /// Transport-level failures of the outbound fetch (connect, timeout, body read).
    #[error("Fact request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// The fact service answered with a non-success status code.
    #[error("Fact service returned HTTP {status} for number {number}")]
    Status { status: u16, number: i64 },
}
