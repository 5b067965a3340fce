//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod disconnect_session;
pub mod error;
pub mod join_room;
pub mod relay_message;
pub mod typing_indicator;

pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{JoinError, RelayError};
pub use join_room::JoinRoomUseCase;
pub use relay_message::RelayMessageUseCase;
pub use typing_indicator::{TypingIndicatorUseCase, TYPING_SWEEP_INTERVAL_MS};
