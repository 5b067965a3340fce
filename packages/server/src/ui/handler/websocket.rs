//! WebSocket connection handlers.
//!
//! One transport session per connection: a server-generated session id, an
//! outbound mpsc channel (FIFO per originating session), a single dispatch
//! loop over the tagged inbound events, and a synchronous teardown that
//! removes the session from the registry and the typing roster.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{RoomId, SessionId, SessionIdFactory, Timestamp, DEFAULT_ROOM_ID},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::{
        DisconnectSessionUseCase, JoinError, JoinRoomUseCase, RelayError, RelayMessageUseCase,
    },
};

use danwa_shared::time::get_jst_timestamp;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    // Session ids are server-generated; the client carries no identity
    // until it joins with a display name
    let session_id = match SessionIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to generate session id: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    tracing::info!("Session '{}' connected", session_id);
    Ok(ws.on_upgrade(|socket| handle_socket(socket, state, session_id)))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, session_id: SessionId) {
    let (mut sender, mut receiver) = socket.split();

    // Create the outbound channel for this session and register it
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    state
        .registry
        .register_session(session_id.clone(), tx, Timestamp::new(get_jst_timestamp()))
        .await;

    let session_id_clone = session_id.clone();
    let state_clone = state.clone();

    // Receive events from this client and dispatch them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Failed to parse client event, dropping: {}", e);
                            continue;
                        }
                    };
                    dispatch(&state_clone, &session_id_clone, event).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // Forward events from other sessions to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Teardown: membership and typing state are cleared in the same step,
    // so peers never observe a ghost member or a stuck typing indicator
    let disconnect_usecase =
        DisconnectSessionUseCase::new(state.registry.clone(), state.typing.clone());
    disconnect_usecase.execute(&session_id).await;

    tracing::info!("Session '{}' disconnected", session_id);
}

/// Single dispatch loop body: route one inbound event to its use case.
async fn dispatch(state: &Arc<AppState>, session_id: &SessionId, event: ClientEvent) {
    match event {
        ClientEvent::Join { display_name } => {
            let room_id = match RoomId::new(DEFAULT_ROOM_ID.to_string()) {
                Ok(id) => id,
                Err(e) => {
                    tracing::error!("Invalid default room id: {}", e);
                    return;
                }
            };
            let usecase = JoinRoomUseCase::new(state.registry.clone(), state.broadcaster.clone());
            match usecase.execute(session_id, room_id, display_name).await {
                Ok(()) => {}
                Err(JoinError::AlreadyJoined { room_id }) => {
                    tracing::warn!(
                        "Session '{}' attempted to join twice (already in '{}'), rejecting",
                        session_id,
                        room_id
                    );
                }
                Err(JoinError::InvalidDisplayName(e)) => {
                    tracing::warn!("Session '{}' sent invalid display name: {}", session_id, e);
                }
            }
        }
        ClientEvent::Message {
            id,
            sender,
            text,
            sent_at,
        } => {
            let usecase =
                RelayMessageUseCase::new(state.registry.clone(), state.broadcaster.clone());
            match usecase.execute(session_id, id, sender, text, sent_at).await {
                Ok(()) => {}
                Err(RelayError::InvalidText(e)) => {
                    tracing::warn!(
                        "Dropping message from session '{}': {}",
                        session_id,
                        e
                    );
                }
            }
        }
        ClientEvent::Typing { display_name } => {
            state.typing.mark_typing(session_id, display_name).await;
        }
        ClientEvent::StopTyping { display_name } => {
            state.typing.mark_stopped(session_id, display_name).await;
        }
    }
}
