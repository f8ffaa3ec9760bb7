//! HTTP API handlers — exposes the link simulation as JSON.

pub mod config;
pub mod packets;
pub mod stats;
pub mod transmission;

use axum::http::StatusCode;
use serde::Serialize;

use lunar_core::TransmissionConfig;
use lunar_services::{PacketStore, TransmissionError, TransmissionSimulator};

#[derive(Clone)]
pub struct ApiState {
    pub store: PacketStore,
    pub simulator: TransmissionSimulator,
}

impl ApiState {
    pub fn new(config: TransmissionConfig) -> Self {
        let store = PacketStore::new(config);
        let simulator = TransmissionSimulator::new(store.clone());
        Self { store, simulator }
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

fn transmission_status(err: &TransmissionError) -> StatusCode {
    match err {
        TransmissionError::EmptyQueue => StatusCode::BAD_REQUEST,
        TransmissionError::InProgress => StatusCode::CONFLICT,
    }
}

// Re-export handler functions for use in router setup.
pub use config::{handle_get_config, handle_update_config};
pub use packets::{handle_clear_queue, handle_create_packet, handle_list_packets};
pub use stats::{handle_history, handle_stats};
pub use transmission::handle_start_transmission;
