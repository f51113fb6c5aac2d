//! Error types for the desk client.

use crate::draft::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the desk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeskError {
    /// The draft was rejected; it is still intact on the caller's side.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The desk task is gone.
    #[error("Desk closed")]
    Closed,

    /// The desk dropped the response channel.
    #[error("Desk dropped response channel")]
    Dropped,
}
