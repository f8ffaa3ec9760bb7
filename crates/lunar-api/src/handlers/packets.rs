//! /packets handlers — create, list, clear.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lunar_core::{Packet, PacketError, PacketType};

use super::{ApiState, MessageResponse};

// ── /packets (POST) ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePacketRequest {
    #[serde(rename = "type")]
    pub packet_type: String,
    pub data: String,
}

pub async fn handle_create_packet(
    State(state): State<ApiState>,
    Json(req): Json<CreatePacketRequest>,
) -> Result<Json<Packet>, (StatusCode, String)> {
    let packet_type: PacketType = req.packet_type.parse().map_err(|e: PacketError| {
        tracing::warn!(packet_type = %req.packet_type, "rejected packet with unknown type");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let packet = state
        .store
        .create(packet_type, req.data)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(packet))
}

// ── /packets (GET) ────────────────────────────────────────────────────────────

pub async fn handle_list_packets(State(state): State<ApiState>) -> Json<Vec<Packet>> {
    Json(state.store.list_pending().await)
}

// ── /packets/clear (DELETE) ───────────────────────────────────────────────────

pub async fn handle_clear_queue(State(state): State<ApiState>) -> Json<MessageResponse> {
    let cleared = state.store.clear().await;
    tracing::info!(cleared, "queue cleared via API");
    Json(MessageResponse::new("Queue cleared"))
}
