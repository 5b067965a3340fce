//! WebSocket event DTOs for the chat relay.
//!
//! Both directions use a tagged-variant encoding (`"type"` field) so each
//! connection runs a single dispatch loop instead of per-event callbacks.

use serde::{Deserialize, Serialize};

/// Events arriving from a client over its WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Enter the room under a display name (sent exactly once per session)
    #[serde(rename_all = "camelCase")]
    Join { display_name: String },

    /// A chat message to relay to the other room members.
    ///
    /// `id` is caller-assigned; receivers de-duplicate by it. `sent_at` is
    /// a unix millisecond timestamp.
    #[serde(rename_all = "camelCase")]
    Message {
        id: u64,
        sender: String,
        text: String,
        sent_at: i64,
    },

    /// The named participant started (or is still) typing
    #[serde(rename_all = "camelCase")]
    Typing { display_name: String },

    /// The named participant explicitly stopped typing
    #[serde(rename_all = "camelCase")]
    StopTyping { display_name: String },
}

/// Events fanned out to peer sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Presence notice: the named participant joined the room
    #[serde(rename_all = "camelCase")]
    ChatNotice { display_name: String },

    /// A relayed chat message (pass-through payload, text already trimmed)
    #[serde(rename_all = "camelCase")]
    Message {
        id: u64,
        sender: String,
        text: String,
        sent_at: i64,
    },

    /// The named participant started typing
    #[serde(rename_all = "camelCase")]
    Typing { display_name: String },

    /// The named participant stopped typing (explicitly or by expiry)
    #[serde(rename_all = "camelCase")]
    StopTyping { display_name: String },
}
