//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    infrastructure::dto::http::{MemberDetailDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

use danwa_shared::time::timestamp_to_jst_rfc3339;

/// Liveness endpoint at the root path
pub async fn index() -> &'static str {
    "danwa-server"
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms that currently have members
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.registry.list_rooms().await;

    let summaries = rooms
        .iter()
        .map(|room| RoomSummaryDto {
            id: room.id.as_str().to_string(),
            members: room
                .members
                .iter()
                .map(|m| m.display_name.as_str().to_string())
                .collect(),
            created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
        })
        .collect();

    Json(summaries)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = crate::domain::RoomId::new(room_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let room = state
        .registry
        .room_snapshot(&room_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    let room_detail = RoomDetailDto {
        id: room.id.as_str().to_string(),
        members: room
            .members
            .iter()
            .map(|m| MemberDetailDto {
                display_name: m.display_name.as_str().to_string(),
                joined_at: timestamp_to_jst_rfc3339(m.joined_at.value()),
            })
            .collect(),
        created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
    };

    Ok(Json(room_detail))
}
