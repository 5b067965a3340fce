//! Core domain models for the chat relay.

use serde::{Deserialize, Serialize};

use super::value_object::{DisplayName, RoomId, SessionId, Timestamp};

/// The single well-known room this deployment relays for.
///
/// Rooms are keyed by [`RoomId`] throughout, so additional rooms need no
/// structural change; only the transport layer pins this constant.
pub const DEFAULT_ROOM_ID: &str = "group";

/// Represents a chat room and its current membership.
///
/// The room holds only references (session ids) to its members; sessions
/// themselves are owned by the transport layer. No message history is kept:
/// messages are pass-through broadcast payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Sessions currently joined to the room
    pub members: Vec<Member>,
    /// Timestamp when the room was created (first join)
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new empty room with the given ID and creation timestamp
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            members: Vec::new(),
            created_at,
        }
    }

    /// Add a member to the room.
    ///
    /// The caller (registry) is responsible for the at-most-one-room
    /// invariant; the room itself only guards against duplicate session ids.
    pub fn add_member(&mut self, member: Member) {
        if !self.contains(&member.session_id) {
            self.members.push(member);
        }
    }

    /// Remove a member from the room by session id, returning it if present
    pub fn remove_member(&mut self, session_id: &SessionId) -> Option<Member> {
        let idx = self
            .members
            .iter()
            .position(|m| &m.session_id == session_id)?;
        Some(self.members.swap_remove(idx))
    }

    /// Whether the session is currently a member of this room
    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.members.iter().any(|m| &m.session_id == session_id)
    }

    /// Current membership minus one session, in unspecified order
    pub fn member_ids_except(&self, excluded: &SessionId) -> Vec<SessionId> {
        self.members
            .iter()
            .filter(|m| &m.session_id != excluded)
            .map(|m| m.session_id.clone())
            .collect()
    }

    /// All current member session ids, in unspecified order
    pub fn member_ids(&self) -> Vec<SessionId> {
        self.members.iter().map(|m| m.session_id.clone()).collect()
    }

    /// Whether the room has no members left
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Represents one joined session within a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Owning session's identifier
    pub session_id: SessionId,
    /// Display name chosen at join; immutable afterwards
    pub display_name: DisplayName,
    /// Timestamp when the session joined the room
    pub joined_at: Timestamp,
}

impl Member {
    /// Create a new member
    pub fn new(session_id: SessionId, display_name: DisplayName, joined_at: Timestamp) -> Self {
        Self {
            session_id,
            display_name,
            joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    fn member(id: &str, name: &str) -> Member {
        Member::new(
            session(id),
            DisplayName::new(name.to_string()).unwrap(),
            Timestamp::new(1000),
        )
    }

    #[test]
    fn test_room_new() {
        // テスト項目: 新しい Room が空の状態で作成される
        // given (前提条件):
        let room_id = RoomId::new("group".to_string()).unwrap();
        let created_at = Timestamp::new(1000);

        // when (操作):
        let room = Room::new(room_id.clone(), created_at);

        // then (期待する結果):
        assert_eq!(room.id, room_id);
        assert_eq!(room.members.len(), 0);
        assert_eq!(room.created_at, created_at);
        assert!(room.is_empty());
    }

    #[test]
    fn test_room_add_member() {
        // テスト項目: メンバーを追加できる
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));

        // when (操作):
        room.add_member(member("s1", "alice"));

        // then (期待する結果):
        assert_eq!(room.members.len(), 1);
        assert!(room.contains(&session("s1")));
    }

    #[test]
    fn test_room_add_member_duplicate_is_ignored() {
        // テスト項目: 同一セッション ID の二重追加は無視される
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));
        room.add_member(member("s1", "alice"));

        // when (操作):
        room.add_member(member("s1", "alice"));

        // then (期待する結果):
        assert_eq!(room.members.len(), 1);
    }

    #[test]
    fn test_room_remove_member() {
        // テスト項目: メンバーを削除できる
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));
        room.add_member(member("s1", "alice"));
        room.add_member(member("s2", "bob"));

        // when (操作):
        let removed = room.remove_member(&session("s1"));

        // then (期待する結果):
        assert!(removed.is_some());
        assert_eq!(removed.unwrap().display_name.as_str(), "alice");
        assert_eq!(room.members.len(), 1);
        assert!(!room.contains(&session("s1")));
        assert!(room.contains(&session("s2")));
    }

    #[test]
    fn test_room_remove_nonexistent_member() {
        // テスト項目: 存在しないメンバーの削除は None が返される
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));

        // when (操作):
        let removed = room.remove_member(&session("ghost"));

        // then (期待する結果):
        assert!(removed.is_none());
    }

    #[test]
    fn test_room_member_ids_except() {
        // テスト項目: 指定したセッションを除いたメンバー一覧が取得できる
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));
        room.add_member(member("s1", "alice"));
        room.add_member(member("s2", "bob"));
        room.add_member(member("s3", "charlie"));

        // when (操作):
        let ids = room.member_ids_except(&session("s2"));

        // then (期待する結果):
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&session("s1")));
        assert!(ids.contains(&session("s3")));
        assert!(!ids.contains(&session("s2")));
    }

    #[test]
    fn test_room_member_ids_except_unknown_returns_all() {
        // テスト項目: 除外対象がメンバーでない場合は全員が返される
        // given (前提条件):
        let mut room = Room::new(RoomId::new("group".to_string()).unwrap(), Timestamp::new(0));
        room.add_member(member("s1", "alice"));
        room.add_member(member("s2", "bob"));

        // when (操作):
        let ids = room.member_ids_except(&session("ghost"));

        // then (期待する結果):
        assert_eq!(ids.len(), 2);
    }
}
