//! Store error types.

use thiserror::Error;

/// Errors that can occur talking to the pantry store backend.
///
/// Callers treat every variant as "store unavailable": the operation
/// did not complete and the previous snapshot is still the truth.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("store returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),
}
