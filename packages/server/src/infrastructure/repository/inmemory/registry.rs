//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! HashMap をインメモリストレージとして使用します。
//!
//! セッションとルームのメンバーシップは単一の Mutex 配下で更新されるため、
//! 同一ルームに対する join / leave / typing の並行更新が競合しません。
//! ブロードキャストの fan-out 自体はスナップショット取得後、ロック外で
//! 行われます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc::UnboundedSender, Mutex};

use crate::domain::{
    DisplayName, Member, RegistryError, Room, RoomId, RoomRegistry, SessionId, Timestamp,
};

/// Per-session bookkeeping: the outbound channel plus what the session
/// joined, if anything.
struct SessionEntry {
    sender: UnboundedSender<String>,
    #[allow(dead_code)]
    connected_at: Timestamp,
    joined: Option<(RoomId, DisplayName)>,
}

/// Sessions and rooms behind one lock so membership mutations never race.
#[derive(Default)]
struct RegistryState {
    sessions: HashMap<SessionId, SessionEntry>,
    rooms: HashMap<RoomId, Room>,
}

/// インメモリ Room Registry 実装
///
/// ドメイン層の RoomRegistry trait を実装します（依存性の逆転）。
pub struct InMemoryRoomRegistry {
    state: Mutex<RegistryState>,
}

impl InMemoryRoomRegistry {
    /// 新しい InMemoryRoomRegistry を作成
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
        }
    }
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn register_session(
        &self,
        session_id: SessionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) {
        let mut state = self.state.lock().await;
        state.sessions.insert(
            session_id,
            SessionEntry {
                sender,
                connected_at,
                joined: None,
            },
        );
    }

    async fn unregister_session(&self, session_id: &SessionId) -> Option<(RoomId, DisplayName)> {
        let mut state = self.state.lock().await;
        let entry = state.sessions.remove(session_id)?;
        let joined = entry.joined?;

        let (room_id, _) = &joined;
        if let Some(room) = state.rooms.get_mut(room_id) {
            room.remove_member(session_id);
            if room.is_empty() {
                state.rooms.remove(room_id);
            }
        }
        Some(joined)
    }

    async fn join(
        &self,
        session_id: &SessionId,
        room_id: RoomId,
        display_name: DisplayName,
        joined_at: Timestamp,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.lock().await;

        let entry = state
            .sessions
            .get(session_id)
            .ok_or_else(|| RegistryError::UnknownSession(session_id.as_str().to_string()))?;
        if let Some((current_room, _)) = &entry.joined {
            return Err(RegistryError::AlreadyJoined {
                session_id: session_id.as_str().to_string(),
                room_id: current_room.as_str().to_string(),
            });
        }

        // Rooms are created lazily on first join
        state
            .rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::new(room_id.clone(), joined_at))
            .add_member(Member::new(
                session_id.clone(),
                display_name.clone(),
                joined_at,
            ));

        if let Some(entry) = state.sessions.get_mut(session_id) {
            entry.joined = Some((room_id, display_name));
        }

        Ok(())
    }

    async fn leave(&self, session_id: &SessionId) {
        let mut state = self.state.lock().await;
        let Some(entry) = state.sessions.get_mut(session_id) else {
            return; // unknown session: no-op
        };
        let Some((room_id, _)) = entry.joined.take() else {
            return; // not joined: no-op
        };

        if let Some(room) = state.rooms.get_mut(&room_id) {
            room.remove_member(session_id);
            if room.is_empty() {
                state.rooms.remove(&room_id);
            }
        }
    }

    async fn members_except(&self, room_id: &RoomId, excluded: &SessionId) -> Vec<SessionId> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room_id)
            .map(|room| room.member_ids_except(excluded))
            .unwrap_or_default()
    }

    async fn members(&self, room_id: &RoomId) -> Vec<SessionId> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room_id)
            .map(|room| room.member_ids())
            .unwrap_or_default()
    }

    async fn get_sender(&self, session_id: &SessionId) -> Option<UnboundedSender<String>> {
        let state = self.state.lock().await;
        state
            .sessions
            .get(session_id)
            .map(|entry| entry.sender.clone())
    }

    async fn session_room(&self, session_id: &SessionId) -> Option<(RoomId, DisplayName)> {
        let state = self.state.lock().await;
        state
            .sessions
            .get(session_id)
            .and_then(|entry| entry.joined.clone())
    }

    async fn room_snapshot(&self, room_id: &RoomId) -> Option<Room> {
        let state = self.state.lock().await;
        state.rooms.get(room_id).cloned()
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let state = self.state.lock().await;
        state.rooms.values().cloned().collect()
    }

    async fn count_sessions(&self) -> usize {
        let state = self.state.lock().await;
        state.sessions.len()
    }
}
