//! Broadcast router: fans an event out to a room's members.
//!
//! Delivery is best-effort at-most-once. A session whose channel is already
//! closed is skipped, never retried; the sender is not told whether peers
//! received the event. Per-session ordering is preserved by the unbounded
//! mpsc channel each session owns; no ordering is guaranteed across
//! receivers.

use std::sync::Arc;

use crate::domain::{RoomId, RoomRegistry, SessionId};
use crate::infrastructure::dto::websocket::ServerEvent;

/// Fan-out component over the room registry.
pub struct Broadcaster {
    registry: Arc<dyn RoomRegistry>,
}

impl Broadcaster {
    /// Create a new Broadcaster
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Deliver `event` to every member of the room except the originator.
    pub async fn broadcast(&self, room_id: &RoomId, excluded: &SessionId, event: &ServerEvent) {
        let targets = self.registry.members_except(room_id, excluded).await;
        self.deliver(targets, event).await;
    }

    /// Deliver a server-originated `event` to every member of the room.
    ///
    /// Used for typing expiry notices, which have no originating session.
    pub async fn broadcast_all(&self, room_id: &RoomId, event: &ServerEvent) {
        let targets = self.registry.members(room_id).await;
        self.deliver(targets, event).await;
    }

    async fn deliver(&self, targets: Vec<SessionId>, event: &ServerEvent) {
        if targets.is_empty() {
            return;
        }

        // Serialize once; every target receives the same frame
        let payload = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize server event: {}", e);
                return;
            }
        };

        for target in targets {
            let Some(sender) = self.registry.get_sender(&target).await else {
                // Session disconnected between snapshot and delivery: skip
                tracing::debug!("Session '{}' gone before delivery, skipping", target);
                continue;
            };
            if sender.send(payload.clone()).is_err() {
                tracing::warn!("Failed to deliver event to session '{}'", target);
            }
        }
    }
}
