//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Session identifier value object.
///
/// Represents a unique identifier for one live client connection.
/// Generated server-side via [`crate::domain::SessionIdFactory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new SessionId.
    ///
    /// # Arguments
    ///
    /// * `id` - The session identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the SessionId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::SessionIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::SessionIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
///
/// Represents a named broadcast domain. This deployment has a single
/// well-known room, but membership is keyed by RoomId everywhere so
/// multiple rooms need no redesign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::RoomIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// The name a participant joins a room with. Immutable after join.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name string
    ///
    /// # Returns
    ///
    /// A Result containing the DisplayName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::DisplayNameEmpty);
        }
        let len = name.len();
        if len > 100 {
            return Err(ValueObjectError::DisplayNameTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
///
/// Trims surrounding whitespace on construction; the trimmed text must be
/// non-empty. The relay does not store messages, it only validates them
/// before fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText from raw input.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw message text (whitespace is trimmed)
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if validation fails
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        let len = trimmed.len();
        if len > 10000 {
            return Err(ValueObjectError::MessageTextTooLong {
                max: 10000,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    ///
    /// # Returns
    ///
    /// A Timestamp instance
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_new_success() {
        // テスト項目: 有効なセッション ID を作成できる
        // given (前提条件):
        let id = "a1b2c3".to_string();

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "a1b2c3");
    }

    #[test]
    fn test_session_id_new_empty_fails() {
        // テスト項目: 空のセッション ID は作成できない
        // given (前提条件):
        let id = "".to_string();

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::SessionIdEmpty);
    }

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 有効なルーム ID を作成できる
        // given (前提条件):
        let id = "group".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "group");
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // given (前提条件):
        let id = "".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_display_name_new_success() {
        // テスト項目: 有効な表示名を作成できる
        // given (前提条件):
        let name = "alice".to_string();

        // when (操作):
        let result = DisplayName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_display_name_new_empty_fails() {
        // テスト項目: 空の表示名は作成できない
        // given (前提条件):
        let name = "".to_string();

        // when (操作):
        let result = DisplayName::new(name);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::DisplayNameEmpty);
    }

    #[test]
    fn test_display_name_new_too_long_fails() {
        // テスト項目: 101 文字以上の表示名は作成できない
        // given (前提条件):
        let name = "a".repeat(101);

        // when (操作):
        let result = DisplayName::new(name);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::DisplayNameTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_display_name_equality() {
        // テスト項目: 同じ値を持つ DisplayName は等価
        // given (前提条件):
        let name1 = DisplayName::new("alice".to_string()).unwrap();
        let name2 = DisplayName::new("alice".to_string()).unwrap();
        let name3 = DisplayName::new("bob".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    #[test]
    fn test_message_text_new_success() {
        // テスト項目: 有効なメッセージ本文を作成できる
        // given (前提条件):
        let text = "Hello, world!".to_string();

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_text_new_trims_whitespace() {
        // テスト項目: メッセージ本文の前後の空白は除去される
        // given (前提条件):
        let text = "  hi  ".to_string();

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "hi");
    }

    #[test]
    fn test_message_text_new_whitespace_only_fails() {
        // テスト項目: 空白のみのメッセージ本文は作成できない
        // given (前提条件):
        let text = "   \n\t ".to_string();

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::MessageTextEmpty);
    }

    #[test]
    fn test_message_text_new_too_long_fails() {
        // テスト項目: 10001 文字以上のメッセージ本文は作成できない
        // given (前提条件):
        let text = "a".repeat(10001);

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::MessageTextTooLong {
                max: 10000,
                actual: 10001
            }
        );
    }

    #[test]
    fn test_timestamp_new() {
        // テスト項目: タイムスタンプを作成できる
        // given (前提条件):
        let value = 1672498800000i64;

        // when (操作):
        let timestamp = Timestamp::new(value);

        // then (期待する結果):
        assert_eq!(timestamp.value(), value);
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }
}
