//! Typing indicator state, decoupled from timers.
//!
//! The roster tracks which display names are currently typing in which
//! room, each with an expiry deadline. Time is passed in as a unix
//! millisecond timestamp so the state machine is testable without sleeping;
//! the use-case layer wires it to a periodic sweeper task.

use std::collections::HashMap;

use super::value_object::{DisplayName, RoomId};

/// Idle window after which a typing entry auto-expires to "stopped".
///
/// Mirrors the 1-second idle timeout clients use when debouncing their own
/// typing/stopTyping emission.
pub const TYPING_DEBOUNCE_MS: i64 = 1000;

/// Outcome of marking a name as typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingTransition {
    /// The name was not typing before; a "typing" notice should be broadcast
    Started,
    /// The name was already typing; only the deadline was postponed
    Refreshed,
}

/// Per-room map of display name → expiry deadline (unix ms).
///
/// One entry per currently-typing display name per room. Entries never
/// outlive their deadline: [`TypingRoster::sweep`] guarantees eventual
/// removal even if no explicit stop arrives.
#[derive(Debug, Default)]
pub struct TypingRoster {
    rooms: HashMap<RoomId, HashMap<DisplayName, i64>>,
}

impl TypingRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a display name as typing in a room until `deadline`.
    ///
    /// Returns [`TypingTransition::Started`] on the absent → typing
    /// transition, [`TypingTransition::Refreshed`] when the entry already
    /// existed (the deadline is extended either way).
    pub fn mark(
        &mut self,
        room_id: &RoomId,
        display_name: &DisplayName,
        deadline: i64,
    ) -> TypingTransition {
        let entries = self.rooms.entry(room_id.clone()).or_default();
        match entries.insert(display_name.clone(), deadline) {
            None => TypingTransition::Started,
            Some(_) => TypingTransition::Refreshed,
        }
    }

    /// Remove a typing entry explicitly.
    ///
    /// Returns true if an entry was removed; an unknown room or name is a
    /// no-op returning false, never an error.
    pub fn stop(&mut self, room_id: &RoomId, display_name: &DisplayName) -> bool {
        let Some(entries) = self.rooms.get_mut(room_id) else {
            return false;
        };
        let removed = entries.remove(display_name).is_some();
        if entries.is_empty() {
            self.rooms.remove(room_id);
        }
        removed
    }

    /// Remove every entry whose deadline has passed, returning them.
    ///
    /// Each returned pair corresponds to exactly one "stopped typing"
    /// notice the caller must broadcast.
    pub fn sweep(&mut self, now: i64) -> Vec<(RoomId, DisplayName)> {
        let mut expired = Vec::new();
        for (room_id, entries) in self.rooms.iter_mut() {
            entries.retain(|name, deadline| {
                if *deadline <= now {
                    expired.push((room_id.clone(), name.clone()));
                    false
                } else {
                    true
                }
            });
        }
        self.rooms.retain(|_, entries| !entries.is_empty());
        expired
    }

    /// Whether a display name is currently marked as typing in a room
    pub fn is_typing(&self, room_id: &RoomId, display_name: &DisplayName) -> bool {
        self.rooms
            .get(room_id)
            .is_some_and(|entries| entries.contains_key(display_name))
    }
}
