//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - メッセージの検証と送信者以外へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：送信者自身にはメッセージが返らない
//! - メッセージはパススルー（履歴を保持しない）であることを保証
//! - 無効な本文（空・空白のみ）が破棄されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム参加済みセッションからの中継
//! - 異常系：無効な本文
//! - エッジケース：未参加セッションからのメッセージ（no-op）

use std::sync::Arc;

use crate::domain::{MessageText, RoomRegistry, SessionId};
use crate::infrastructure::broadcast::Broadcaster;
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::RelayError;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// Broadcast router
    broadcaster: Arc<Broadcaster>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, broadcaster: Arc<Broadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// メッセージ中継を実行
    ///
    /// メッセージ ID は送信側が採番したものをそのまま中継します
    /// （受信側が ID で重複排除を行う前提）。
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元セッションの ID
    /// * `id` - 送信側採番のメッセージ ID
    /// * `sender` - 送信者の表示名
    /// * `text` - メッセージ本文（バリデーション前の生文字列）
    /// * `sent_at` - 送信時刻（unix ミリ秒）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 中継成功（未参加セッションは no-op として成功扱い）
    /// * `Err(RelayError)` - 本文が無効（メッセージは破棄）
    pub async fn execute(
        &self,
        session_id: &SessionId,
        id: u64,
        sender: String,
        text: String,
        sent_at: i64,
    ) -> Result<(), RelayError> {
        let Some((room_id, _)) = self.registry.session_room(session_id).await else {
            // Availability over strictness: unjoined session is a no-op
            tracing::warn!("Message from session '{}' with no room, ignoring", session_id);
            return Ok(());
        };

        let text = MessageText::new(text)?;

        let event = ServerEvent::Message {
            id,
            sender,
            text: text.into_string(),
            sent_at,
        };
        self.broadcaster.broadcast(&room_id, session_id, &event).await;

        Ok(())
    }
}
