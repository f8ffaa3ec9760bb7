//! /config handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use lunar_core::TransmissionConfig;

use super::{ApiState, MessageResponse};

pub async fn handle_get_config(State(state): State<ApiState>) -> Json<TransmissionConfig> {
    Json(state.store.config().await)
}

/// Replaces the whole config. Every field must be present.
pub async fn handle_update_config(
    State(state): State<ApiState>,
    Json(config): Json<TransmissionConfig>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    if let Err(e) = state.store.set_config(config).await {
        tracing::warn!(error = %e, "rejected config update");
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    tracing::info!(
        distance_km = config.distance_km,
        bandwidth_bps = config.bandwidth_bps,
        compression_enabled = config.compression_enabled,
        latency_scale_factor = config.latency_scale_factor,
        "configuration updated"
    );
    Ok(Json(MessageResponse::new("Configuration updated")))
}
