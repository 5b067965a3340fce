//! Room registry abstraction (dependency inversion).
//!
//! The domain layer defines the trait; the infrastructure layer provides
//! the in-memory implementation. UseCase 層は trait にのみ依存します。

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::Room,
    error::RegistryError,
    value_object::{DisplayName, RoomId, SessionId, Timestamp},
};

/// Tracks live sessions and room membership.
///
/// Mutations are serialized behind the implementation's lock; read methods
/// return snapshots so broadcast fan-out never holds the lock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Register a freshly connected session and its outbound channel.
    ///
    /// The session starts with no room; `join` attaches it to one later.
    async fn register_session(
        &self,
        session_id: SessionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    );

    /// Remove a session entirely (on disconnect).
    ///
    /// Also removes it from its room's membership if joined. Returns what
    /// the session was joined to so teardown can clear the typing roster;
    /// None if the session was unknown or had not joined.
    async fn unregister_session(&self, session_id: &SessionId) -> Option<(RoomId, DisplayName)>;

    /// Join a session to a room under a display name.
    ///
    /// # Errors
    ///
    /// * [`RegistryError::AlreadyJoined`] if the session already has a room
    ///   (state is not mutated; the caller must leave first)
    /// * [`RegistryError::UnknownSession`] if the session was never registered
    async fn join(
        &self,
        session_id: &SessionId,
        room_id: RoomId,
        display_name: DisplayName,
        joined_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Detach a session from its room. No-op if the session has no room.
    async fn leave(&self, session_id: &SessionId);

    /// Current membership of a room minus one session, in unspecified order
    async fn members_except(&self, room_id: &RoomId, excluded: &SessionId) -> Vec<SessionId>;

    /// All current members of a room, for server-originated broadcasts
    async fn members(&self, room_id: &RoomId) -> Vec<SessionId>;

    /// Outbound channel of a session; None if the session is gone
    async fn get_sender(&self, session_id: &SessionId) -> Option<UnboundedSender<String>>;

    /// The room and display name a session joined with, if any
    async fn session_room(&self, session_id: &SessionId) -> Option<(RoomId, DisplayName)>;

    /// Snapshot of one room, if it exists
    async fn room_snapshot(&self, room_id: &RoomId) -> Option<Room>;

    /// Snapshot of all rooms that currently have members
    async fn list_rooms(&self) -> Vec<Room>;

    /// Number of registered sessions (joined or not)
    async fn count_sessions(&self) -> usize;
}
