//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルーム参加処理（二重参加の拒否、presence 通知のブロードキャスト）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：セッションは同時に一つのルームにのみ所属する
//! - presence 通知（chatNotice）が参加者本人を除く既存メンバーにのみ
//!   配信されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規セッションの参加と通知
//! - 異常系：二重参加、無効な表示名
//! - エッジケース：最初の参加者（通知対象なし）、未登録セッション

use std::sync::Arc;

use crate::domain::{DisplayName, RegistryError, RoomId, RoomRegistry, SessionId, Timestamp};
use crate::infrastructure::broadcast::Broadcaster;
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::JoinError;

use danwa_shared::time::get_jst_timestamp;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// Broadcast router
    broadcaster: Arc<Broadcaster>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, broadcaster: Arc<Broadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 参加するセッションの ID
    /// * `room_id` - 参加先ルームの ID
    /// * `display_name` - 表示名（バリデーション前の生文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 参加成功（未登録セッションは no-op として成功扱い）
    /// * `Err(JoinError)` - 二重参加または無効な表示名
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room_id: RoomId,
        display_name: String,
    ) -> Result<(), JoinError> {
        let display_name = DisplayName::new(display_name)?;
        let joined_at = Timestamp::new(get_jst_timestamp());

        match self
            .registry
            .join(session_id, room_id.clone(), display_name.clone(), joined_at)
            .await
        {
            Ok(()) => {}
            Err(RegistryError::AlreadyJoined { room_id, .. }) => {
                return Err(JoinError::AlreadyJoined { room_id });
            }
            Err(RegistryError::UnknownSession(id)) => {
                // Availability over strictness: ignore, do not broadcast
                tracing::warn!("Join from unknown session '{}', ignoring", id);
                return Ok(());
            }
        }

        tracing::info!("'{}' has joined room '{}'", display_name, room_id);

        // Presence notice to the room's other current members
        let notice = ServerEvent::ChatNotice {
            display_name: display_name.into_string(),
        };
        self.broadcaster.broadcast(&room_id, session_id, &notice).await;

        Ok(())
    }
}
