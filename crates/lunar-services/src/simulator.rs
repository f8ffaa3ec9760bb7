//! Transmission simulator — drains the pending queue in priority order.
//!
//! Each packet goes Queued → Transmitting → Transmitted, with a scaled sleep in
//! between standing in for bandwidth and light-speed delay. Packets are sent one
//! after another, never in parallel. Only one drain runs at a time; a second
//! caller gets `TransmissionError::InProgress` instead of waiting.

use std::sync::Arc;

use tokio::sync::Mutex;

use lunar_core::packet::now_ms;
use lunar_core::TransmissionRecord;

use crate::packet_store::PacketStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransmissionError {
    #[error("No packets in queue")]
    EmptyQueue,
    #[error("transmission already in progress")]
    InProgress,
}

#[derive(Clone)]
pub struct TransmissionSimulator {
    store: PacketStore,
    /// Held for the whole drain.
    drain_lock: Arc<Mutex<()>>,
}

impl TransmissionSimulator {
    pub fn new(store: PacketStore) -> Self {
        Self {
            store,
            drain_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &PacketStore {
        &self.store
    }

    /// True while a drain is running.
    #[cfg(test)]
    pub(crate) fn is_draining(&self) -> bool {
        self.drain_lock.try_lock().is_err()
    }

    /// Transmit every packet that is Queued right now, highest priority first.
    /// Returns how many were transmitted.
    ///
    /// The link config is read once at the start. Packets enqueued while the
    /// drain runs wait for the next one; packets cleared before their turn are skipped.
    pub async fn drain(&self) -> Result<usize, TransmissionError> {
        let _guard = self
            .drain_lock
            .try_lock()
            .map_err(|_| TransmissionError::InProgress)?;

        let (ids, config) = self
            .store
            .drain_plan()
            .await
            .ok_or(TransmissionError::EmptyQueue)?;

        tracing::info!(packets = ids.len(), "transmission started");

        let mut transmitted = 0;
        for id in ids {
            let Some(size) = self.store.begin_transmission(&id).await else {
                tracing::debug!(packet_id = %id, "packet left the queue before its turn, skipping");
                continue;
            };

            let transmission_time = config.transmission_time(size);
            let propagation_delay = config.propagation_delay();
            let wait = config.simulated_wait(size);
            tokio::time::sleep(wait).await;

            let record = TransmissionRecord {
                packet_id: id.clone(),
                completed_at: now_ms(),
                transmission_time_secs: transmission_time,
                propagation_delay_secs: propagation_delay,
                size,
            };
            let packet = self.store.complete_transmission(record).await;
            transmitted += 1;

            tracing::info!(
                packet_id = %id,
                packet_type = packet.as_ref().map(|p| p.packet_type.as_str()).unwrap_or("cleared"),
                size,
                transmission_time,
                propagation_delay,
                wait_ms = wait.as_millis() as u64,
                "packet transmitted"
            );
        }

        tracing::info!(transmitted, "transmission finished");
        Ok(transmitted)
    }
}
