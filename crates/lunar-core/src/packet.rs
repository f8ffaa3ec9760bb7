//! Packet model and priority policy.
//!
//! A packet's category fixes its priority for its whole life:
//!   Emergency — 1 (sent first)
//!   Science   — 2
//!   Logs      — 3
//!
//! Pending packets are drained in ascending priority order.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::compress;

/// Packet category. Unknown categories are rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacketType {
    Emergency,
    Science,
    Logs,
}

impl PacketType {
    /// Fixed category → priority mapping. Lower value = sent sooner.
    pub fn priority(self) -> u8 {
        match self {
            PacketType::Emergency => 1,
            PacketType::Science => 2,
            PacketType::Logs => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PacketType::Emergency => "emergency",
            PacketType::Science => "science",
            PacketType::Logs => "logs",
        }
    }
}

impl FromStr for PacketType {
    type Err = PacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emergency" => Ok(PacketType::Emergency),
            "science" => Ok(PacketType::Science),
            "logs" => Ok(PacketType::Logs),
            other => Err(PacketError::UnknownType(other.to_string())),
        }
    }
}

/// Lifecycle of a packet: Queued → Transmitting → Transmitted.
///
/// `Failed` is reserved. Nothing in the simulation transitions into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacketStatus {
    #[default]
    Queued,
    Transmitting,
    Transmitted,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum PacketError {
    #[error("unknown packet type: {0}")]
    UnknownType(String),
    #[error("failed to compress payload: {0}")]
    Compression(#[from] std::io::Error),
}

/// A unit of simulated data waiting for (or done with) transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub id: String,
    #[serde(rename = "type")]
    pub packet_type: PacketType,
    pub data: String,
    pub priority: u8,
    /// Creation time, ms since UNIX epoch.
    pub timestamp: u64,
    pub size_bytes: u64,
    pub compressed_size: u64,
    pub status: PacketStatus,
}

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl Packet {
    /// Build a new Queued packet, sizing its payload with or without compression.
    pub fn new(
        packet_type: PacketType,
        data: String,
        compression_enabled: bool,
    ) -> Result<Self, PacketError> {
        let timestamp = now_ms();
        let size_bytes = data.len() as u64;
        let compressed_size = if compression_enabled {
            compress::compressed_len(&data)? as u64
        } else {
            size_bytes
        };

        Ok(Self {
            id: packet_id(timestamp, &data),
            packet_type,
            priority: packet_type.priority(),
            data,
            timestamp,
            size_bytes,
            compressed_size,
            status: PacketStatus::Queued,
        })
    }

    /// compressed_size / size_bytes, or None for an empty payload.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.size_bytes == 0 {
            return None;
        }
        Some(self.compressed_size as f64 / self.size_bytes as f64)
    }
}

/// 16-byte BLAKE3 digest of (sequence, timestamp, payload), hex-encoded.
fn packet_id(timestamp: u64, data: &str) -> String {
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    let mut h = blake3::Hasher::new();
    h.update(&seq.to_le_bytes());
    h.update(&timestamp.to_le_bytes());
    h.update(data.as_bytes());
    hex::encode(&h.finalize().as_bytes()[..16])
}
