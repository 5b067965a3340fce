//! UseCase: タイピングインジケーター処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - TypingIndicatorUseCase の mark_typing / mark_stopped / sweep_once
//! - typing 通知の重複抑制と自動失効（debounce window）
//!
//! ### なぜこのテストが必要か
//! - typing 中の再通知（absent → typing の遷移時のみ broadcast）を保証
//! - 明示的な stopTyping が来なくても sweep で必ず失効することを保証
//!   （クライアントの突然切断でインジケーターが固まる問題の対策）
//!
//! ### どのような状況を想定しているか
//! - 正常系：typing 開始・明示的停止・失効
//! - エッジケース：期限内の refresh による期限延長、未参加セッション
//!
//! 時刻はタイムスタンプとして注入するため、テストは sleep なしで
//! 失効を検証できます。sweep の駆動は [`TypingIndicatorUseCase::spawn_sweeper`]
//! が行います。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::{
    DisplayName, RoomId, RoomRegistry, SessionId, TypingRoster, TypingTransition,
    TYPING_DEBOUNCE_MS,
};
use crate::infrastructure::broadcast::Broadcaster;
use crate::infrastructure::dto::websocket::ServerEvent;

use danwa_shared::time::get_jst_timestamp;

/// Interval of the background expiry sweep.
///
/// Short enough that an expiry notice lags the 1s debounce window by at
/// most a quarter second; long enough that the sweep never starves
/// session handling.
pub const TYPING_SWEEP_INTERVAL_MS: u64 = 250;

/// タイピングインジケーターのユースケース
///
/// roster の状態を持つため、他のユースケースと異なりプロセスで一つの
/// インスタンスを共有します（AppState 経由）。
pub struct TypingIndicatorUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// Broadcast router
    broadcaster: Arc<Broadcaster>,
    /// ルームごとの typing 状態（表示名 → 失効期限）
    roster: Mutex<TypingRoster>,
}

impl TypingIndicatorUseCase {
    /// 新しい TypingIndicatorUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, broadcaster: Arc<Broadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
            roster: Mutex::new(TypingRoster::new()),
        }
    }

    /// typing 信号を処理する
    ///
    /// absent → typing の遷移時のみ typing 通知をブロードキャストし、
    /// typing 中の再信号は期限の延長のみ行います（再通知しない）。
    pub async fn mark_typing(&self, session_id: &SessionId, display_name: String) {
        let Ok(display_name) = DisplayName::new(display_name) else {
            tracing::warn!("Invalid display name in typing event, ignoring");
            return;
        };
        let Some((room_id, _)) = self.registry.session_room(session_id).await else {
            // typing before join: no-op
            return;
        };

        let deadline = get_jst_timestamp() + TYPING_DEBOUNCE_MS;
        let transition = {
            let mut roster = self.roster.lock().await;
            roster.mark(&room_id, &display_name, deadline)
        };

        if transition == TypingTransition::Started {
            let event = ServerEvent::Typing {
                display_name: display_name.into_string(),
            };
            self.broadcaster.broadcast(&room_id, session_id, &event).await;
        }
    }

    /// 明示的な stopTyping 信号を処理する
    ///
    /// typing 中であれば stopTyping 通知をブロードキャストします。
    /// typing 中でなければ no-op。
    pub async fn mark_stopped(&self, session_id: &SessionId, display_name: String) {
        let Ok(display_name) = DisplayName::new(display_name) else {
            tracing::warn!("Invalid display name in stopTyping event, ignoring");
            return;
        };
        let Some((room_id, _)) = self.registry.session_room(session_id).await else {
            return;
        };

        let removed = {
            let mut roster = self.roster.lock().await;
            roster.stop(&room_id, &display_name)
        };

        if removed {
            let event = ServerEvent::StopTyping {
                display_name: display_name.into_string(),
            };
            self.broadcaster.broadcast(&room_id, session_id, &event).await;
        }
    }

    /// 切断時のクリーンアップ
    ///
    /// セッションは既に registry から削除済みのため、除外なしで
    /// ルーム全体に stopTyping を通知します。
    pub async fn clear_on_disconnect(&self, room_id: &RoomId, display_name: &DisplayName) {
        let removed = {
            let mut roster = self.roster.lock().await;
            roster.stop(room_id, display_name)
        };

        if removed {
            let event = ServerEvent::StopTyping {
                display_name: display_name.as_str().to_string(),
            };
            self.broadcaster.broadcast_all(room_id, &event).await;
        }
    }

    /// 期限切れ entry を失効させ、それぞれ一度だけ stopTyping を通知する
    ///
    /// 戻り値は失効させた entry 数。
    pub async fn sweep_once(&self, now: i64) -> usize {
        let expired = {
            let mut roster = self.roster.lock().await;
            roster.sweep(now)
        };

        let count = expired.len();
        for (room_id, display_name) in expired {
            tracing::debug!(
                "Typing entry for '{}' in room '{}' expired",
                display_name,
                room_id
            );
            let event = ServerEvent::StopTyping {
                display_name: display_name.into_string(),
            };
            // The typist may already be gone, so no exclusion
            self.broadcaster.broadcast_all(&room_id, &event).await;
        }
        count
    }

    /// バックグラウンドの失効 sweep タスクを起動する
    ///
    /// 戻り値の JoinHandle はシャットダウン時に abort してください。
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_millis(TYPING_SWEEP_INTERVAL_MS));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                this.sweep_once(get_jst_timestamp()).await;
            }
        })
    }

    /// 指定の表示名が typing 中かどうか（テスト・デバッグ用）
    pub async fn is_typing(&self, room_id: &RoomId, display_name: &DisplayName) -> bool {
        let roster = self.roster.lock().await;
        roster.is_typing(room_id, display_name)
    }
}
