//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - 切断時のルームメンバーシップ削除と typing 状態のクリーンアップ
//!
//! ### なぜこのテストが必要か
//! - ghost member（切断済みセッションがメンバーとして残る）の防止
//! - typing 中に突然切断したクライアントのインジケーターが
//!   固まらないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みセッションの切断
//! - エッジケース：未参加セッション・未知セッションの切断（no-op）

use std::sync::Arc;

use crate::domain::{RoomRegistry, SessionId};

use super::typing_indicator::TypingIndicatorUseCase;

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// typing 状態のクリーンアップ先
    typing: Arc<TypingIndicatorUseCase>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, typing: Arc<TypingIndicatorUseCase>) -> Self {
        Self { registry, typing }
    }

    /// セッション切断を実行
    ///
    /// registry からの削除と typing クリーンアップを同一の teardown
    /// ステップで行います。失敗しない操作のみで構成されます。
    pub async fn execute(&self, session_id: &SessionId) {
        let Some((room_id, display_name)) = self.registry.unregister_session(session_id).await
        else {
            tracing::debug!("Session '{}' disconnected without joining a room", session_id);
            return;
        };

        self.typing.clear_on_disconnect(&room_id, &display_name).await;

        tracing::info!(
            "Session '{}' ('{}') removed from room '{}'",
            session_id,
            display_name,
            room_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, RoomId, Timestamp};
    use crate::infrastructure::broadcast::Broadcaster;
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn session(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    fn name(n: &str) -> DisplayName {
        DisplayName::new(n.to_string()).unwrap()
    }

    struct Setup {
        registry: Arc<InMemoryRoomRegistry>,
        typing: Arc<TypingIndicatorUseCase>,
        usecase: DisconnectSessionUseCase,
    }

    fn setup() -> Setup {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let broadcaster = Arc::new(Broadcaster::new(registry.clone()));
        let typing = Arc::new(TypingIndicatorUseCase::new(
            registry.clone(),
            broadcaster,
        ));
        let usecase = DisconnectSessionUseCase::new(registry.clone(), typing.clone());
        Setup {
            registry,
            typing,
            usecase,
        }
    }

    async fn join(s: &Setup, id: &str, n: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        s.registry
            .register_session(session(id), tx, Timestamp::new(1000))
            .await;
        s.registry
            .join(&session(id), room("group"), name(n), Timestamp::new(1000))
            .await
            .unwrap();
        rx
    }

    #[tokio::test]
    async fn test_disconnect_removes_membership_and_typing_state() {
        // テスト項目: 切断でメンバーシップと typing 状態の両方が消える
        // given (前提条件): bob が typing 中
        let s = setup();
        let mut alice_rx = join(&s, "s1", "alice").await;
        let _bob_rx = join(&s, "s2", "bob").await;
        s.typing.mark_typing(&session("s2"), "bob".to_string()).await;
        let _ = alice_rx.try_recv(); // typing 通知を読み捨てる

        // when (操作):
        s.usecase.execute(&session("s2")).await;

        // then (期待する結果): membership が消えている
        let members = s.registry.members(&room("group")).await;
        assert_eq!(members, vec![session("s1")]);

        // typing 状態も消え、alice に stopTyping が届いている
        assert!(!s.typing.is_typing(&room("group"), &name("bob")).await);
        let frame = alice_rx.try_recv().unwrap();
        assert_eq!(frame, r#"{"type":"stopTyping","displayName":"bob"}"#);
    }

    #[tokio::test]
    async fn test_disconnect_without_typing_sends_nothing() {
        // テスト項目: typing していないセッションの切断では何も配信されない
        // given (前提条件):
        let s = setup();
        let mut alice_rx = join(&s, "s1", "alice").await;
        let _bob_rx = join(&s, "s2", "bob").await;

        // when (操作):
        s.usecase.execute(&session("s2")).await;

        // then (期待する結果): leave 通知は送られない
        assert!(alice_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disconnect_unjoined_session_is_noop() {
        // テスト項目: 未参加セッションの切断は no-op
        // given (前提条件):
        let s = setup();
        let (tx, _rx) = mpsc::unbounded_channel();
        s.registry
            .register_session(session("s1"), tx, Timestamp::new(1000))
            .await;

        // when (操作): panic せず完了する
        s.usecase.execute(&session("s1")).await;
        s.usecase.execute(&session("unknown")).await;

        // then (期待する結果):
        assert_eq!(s.registry.count_sessions().await, 0);
    }
}
