//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// SessionId validation error
    #[error("SessionId cannot be empty")]
    SessionIdEmpty,

    /// SessionId too long error
    #[error("SessionId cannot exceed {max} characters (got {actual})")]
    SessionIdTooLong { max: usize, actual: usize },

    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId too long error
    #[error("RoomId cannot exceed {max} characters (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    /// DisplayName validation error
    #[error("DisplayName cannot be empty")]
    DisplayNameEmpty,

    /// DisplayName too long error
    #[error("DisplayName cannot exceed {max} characters (got {actual})")]
    DisplayNameTooLong { max: usize, actual: usize },

    /// MessageText validation error (empty after trimming)
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },
}

/// Errors related to room membership bookkeeping
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A session attempted to join while already joined to a room.
    /// The registry state is not mutated; the caller must leave first.
    #[error("session '{session_id}' already joined room '{room_id}'")]
    AlreadyJoined {
        session_id: String,
        room_id: String,
    },

    /// An operation referenced a session id that was never registered
    #[error("unknown session '{0}'")]
    UnknownSession(String),
}
