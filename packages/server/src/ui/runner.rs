//! Server runner: router construction, listener bind, graceful shutdown.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::infrastructure::repository::InMemoryRoomRegistry;
use crate::ui::handler::{get_room_detail, get_rooms, health_check, index, websocket_handler};
use crate::ui::signal::shutdown_signal;
use crate::ui::state::AppState;

/// Run the relay server until a shutdown signal arrives.
///
/// Binds to `host:port`, spawns the typing expiry sweeper, and serves the
/// HTTP + WebSocket routes.
pub async fn run_server(host: &str, port: u16) -> Result<(), std::io::Error> {
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let state = Arc::new(AppState::new(registry));

    // Typing indicators must self-heal even when clients vanish abruptly
    let sweeper = state.typing.spawn_sweeper();

    let app = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    sweeper.abort();
    tracing::info!("Server stopped");

    result
}
