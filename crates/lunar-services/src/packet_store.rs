//! In-memory packet store — pending queue, transmission history, live link config.
//!
//! All three live behind one lock so every reader sees a consistent snapshot.
//! The lock is only held for in-memory bookkeeping, never across a simulated wait.

use std::sync::Arc;

use tokio::sync::Mutex;

use lunar_core::{
    ConfigValidationError, Packet, PacketError, PacketStatus, PacketType, SystemStats,
    TransmissionConfig, TransmissionRecord,
};

use crate::stats;

/// How many history records `recent_history` returns.
pub const HISTORY_WINDOW: usize = 20;

#[derive(Debug, Default)]
struct StoreInner {
    /// Sorted by ascending priority, ties in insertion order.
    pending: Vec<Packet>,
    /// Unbounded, oldest first.
    history: Vec<TransmissionRecord>,
    config: TransmissionConfig,
}

#[derive(Clone, Default)]
pub struct PacketStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl PacketStore {
    /// Create a store with the given link config. The config must already be valid.
    pub fn new(config: TransmissionConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                config,
                ..Default::default()
            })),
        }
    }

    /// Build a packet for `packet_type` under the current compression setting and queue it.
    pub async fn create(
        &self,
        packet_type: PacketType,
        data: String,
    ) -> Result<Packet, PacketError> {
        let compression_enabled = self.config().await.compression_enabled;
        let packet = Packet::new(packet_type, data, compression_enabled)?;
        self.enqueue(packet.clone()).await;
        tracing::info!(
            packet_id = %packet.id,
            packet_type = packet.packet_type.as_str(),
            priority = packet.priority,
            size_bytes = packet.size_bytes,
            compressed_size = packet.compressed_size,
            "packet queued"
        );
        Ok(packet)
    }

    /// Append and re-sort. `sort_by_key` is stable, so equal priorities keep insertion order.
    pub async fn enqueue(&self, packet: Packet) {
        let mut inner = self.inner.lock().await;
        inner.pending.push(packet);
        inner.pending.sort_by_key(|p| p.priority);
    }

    /// Snapshot of the pending queue in drain order.
    pub async fn list_pending(&self) -> Vec<Packet> {
        self.inner.lock().await.pending.clone()
    }

    #[cfg(test)]
    pub(crate) async fn pending_count(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Empty the pending queue. History is untouched. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let cleared = inner.pending.len();
        inner.pending.clear();
        cleared
    }

    #[cfg(test)]
    pub(crate) async fn record_completion(&self, record: TransmissionRecord) {
        self.inner.lock().await.history.push(record);
    }

    /// The last `HISTORY_WINDOW` records, oldest first.
    pub async fn recent_history(&self) -> Vec<TransmissionRecord> {
        let inner = self.inner.lock().await;
        let start = inner.history.len().saturating_sub(HISTORY_WINDOW);
        inner.history[start..].to_vec()
    }

    #[cfg(test)]
    pub(crate) async fn history_len(&self) -> usize {
        self.inner.lock().await.history.len()
    }

    pub async fn config(&self) -> TransmissionConfig {
        self.inner.lock().await.config
    }

    /// Replace the link config wholesale. Invalid configs are rejected and the old one kept.
    pub async fn set_config(
        &self,
        config: TransmissionConfig,
    ) -> Result<(), ConfigValidationError> {
        config.validate()?;
        self.inner.lock().await.config = config;
        Ok(())
    }

    pub async fn stats(&self) -> SystemStats {
        let inner = self.inner.lock().await;
        stats::compute(&inner.pending, &inner.history, &inner.config)
    }

    // ── Drain bookkeeping ─────────────────────────────────────────────────────

    /// Ids of Queued packets in priority order, plus the config to drain them under.
    /// None if the pending queue is empty.
    pub(crate) async fn drain_plan(&self) -> Option<(Vec<String>, TransmissionConfig)> {
        let inner = self.inner.lock().await;
        if inner.pending.is_empty() {
            return None;
        }
        let ids = inner
            .pending
            .iter()
            .filter(|p| p.status == PacketStatus::Queued)
            .map(|p| p.id.clone())
            .collect();
        Some((ids, inner.config))
    }

    /// Mark a Queued packet as Transmitting and return its compressed size.
    /// None if the packet is gone (cleared) or no longer Queued.
    pub(crate) async fn begin_transmission(&self, id: &str) -> Option<u64> {
        let mut inner = self.inner.lock().await;
        let packet = inner
            .pending
            .iter_mut()
            .find(|p| p.id == id && p.status == PacketStatus::Queued)?;
        packet.status = PacketStatus::Transmitting;
        Some(packet.compressed_size)
    }

    /// Mark Transmitted, drop from pending, and append the history record in one step.
    /// Returns the packet, or None if it was cleared mid-flight (the record is kept either way).
    pub(crate) async fn complete_transmission(&self, record: TransmissionRecord) -> Option<Packet> {
        let mut inner = self.inner.lock().await;
        let packet = inner
            .pending
            .iter()
            .position(|p| p.id == record.packet_id)
            .map(|pos| {
                let mut packet = inner.pending.remove(pos);
                packet.status = PacketStatus::Transmitted;
                packet
            });
        inner.history.push(record);
        packet
    }
}
