//! UseCase layer error definitions.
//!
//! Only conditions the relay actually rejects are errors here. Operations
//! referencing an unknown session or room are silent no-ops by design
//! (availability over strictness); they never surface as errors.

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors from the join use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The session already joined a room; re-join requires leaving first
    #[error("session already joined room '{room_id}'")]
    AlreadyJoined { room_id: String },

    /// The display name failed validation
    #[error("invalid display name: {0}")]
    InvalidDisplayName(#[from] ValueObjectError),
}

/// Errors from the message relay use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The message text failed validation; the message is dropped
    #[error("invalid message text: {0}")]
    InvalidText(#[from] ValueObjectError),
}
