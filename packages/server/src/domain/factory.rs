//! Domain factories for creating domain entities and value objects.

use super::{error::ValueObjectError, SessionId};

/// Factory for generating SessionId instances.
///
/// This factory encapsulates the logic for generating new session
/// identifiers, separating the generation concern from the validation
/// logic in SessionId.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<SessionId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        SessionId::new(uuid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_factory_generate() {
        // テスト項目: SessionIdFactory::generate() で UUID v4 形式の SessionId を生成できる
        // when (操作):
        let result = SessionIdFactory::generate();

        // then (期待する結果):
        assert!(result.is_ok());
        let session_id = result.unwrap();

        // UUID v4 形式であることを確認（長さと形式）
        let id_str = session_id.as_str();
        assert_eq!(id_str.len(), 36); // UUID v4 の標準長（ハイフン含む）
    }

    #[test]
    fn test_session_id_factory_generate_uniqueness() {
        // テスト項目: SessionIdFactory::generate() は毎回異なる ID を生成する
        // when (操作):
        let session_id1 = SessionIdFactory::generate().unwrap();
        let session_id2 = SessionIdFactory::generate().unwrap();

        // then (期待する結果):
        assert_ne!(session_id1, session_id2);
    }
}
