//! /stats and /history handlers.

use axum::extract::State;
use axum::Json;

use lunar_core::{SystemStats, TransmissionRecord};

use super::ApiState;

pub async fn handle_stats(State(state): State<ApiState>) -> Json<SystemStats> {
    Json(state.store.stats().await)
}

pub async fn handle_history(State(state): State<ApiState>) -> Json<Vec<TransmissionRecord>> {
    Json(state.store.recent_history().await)
}
