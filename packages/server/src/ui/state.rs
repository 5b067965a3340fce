//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::RoomRegistry;
use crate::infrastructure::broadcast::Broadcaster;
use crate::usecase::TypingIndicatorUseCase;

/// Shared application state
pub struct AppState {
    /// Registry（データアクセス層の抽象化）
    pub registry: Arc<dyn RoomRegistry>,
    /// Broadcast router over the registry
    pub broadcaster: Arc<Broadcaster>,
    /// Typing aggregator (stateful, shared process-wide)
    pub typing: Arc<TypingIndicatorUseCase>,
}

impl AppState {
    /// Wire up the state over a registry implementation
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        let broadcaster = Arc::new(Broadcaster::new(registry.clone()));
        let typing = Arc::new(TypingIndicatorUseCase::new(
            registry.clone(),
            broadcaster.clone(),
        ));
        Self {
            registry,
            broadcaster,
            typing,
        }
    }
}
