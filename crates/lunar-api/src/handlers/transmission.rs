//! /transmission/start handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::{transmission_status, ApiState};

#[derive(Serialize)]
pub struct StartTransmissionResponse {
    pub transmitted_packets: usize,
}

/// Runs the whole drain before responding.
pub async fn handle_start_transmission(
    State(state): State<ApiState>,
) -> Result<Json<StartTransmissionResponse>, (StatusCode, String)> {
    let transmitted_packets = state.simulator.drain().await.map_err(|e| {
        tracing::warn!(error = %e, "transmission request rejected");
        (transmission_status(&e), e.to_string())
    })?;

    Ok(Json(StartTransmissionResponse {
        transmitted_packets,
    }))
}
