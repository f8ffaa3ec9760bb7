//! Summary metrics, recomputed from scratch on every call.

use lunar_core::{Packet, PacketStatus, SystemStats, TransmissionConfig, TransmissionRecord};

/// Number of most recent history records used for bandwidth utilization.
pub const UTILIZATION_WINDOW: usize = 10;

pub fn compute(
    pending: &[Packet],
    history: &[TransmissionRecord],
    config: &TransmissionConfig,
) -> SystemStats {
    let packets_transmitted = history.len();
    let total_packets = packets_transmitted + pending.len();
    let packets_queued = pending
        .iter()
        .filter(|p| p.status == PacketStatus::Queued)
        .count();

    let transmission_efficiency = if total_packets == 0 {
        0.0
    } else {
        packets_transmitted as f64 / total_packets as f64
    };

    SystemStats {
        total_packets,
        packets_transmitted,
        packets_queued,
        bandwidth_utilization: bandwidth_utilization(history, config),
        average_compression_ratio: average_compression_ratio(pending),
        transmission_efficiency,
    }
}

/// Achieved bit rate over the recent window as a fraction of configured bandwidth, in [0, 1].
fn bandwidth_utilization(history: &[TransmissionRecord], config: &TransmissionConfig) -> f64 {
    let recent = &history[history.len().saturating_sub(UTILIZATION_WINDOW)..];
    let total_bits: f64 = recent.iter().map(|r| r.size as f64 * 8.0).sum();
    let total_time: f64 = recent.iter().map(|r| r.transmission_time_secs).sum();

    if recent.is_empty() || total_time <= 0.0 || config.bandwidth_bps <= 0 {
        return 0.0;
    }
    (total_bits / total_time / config.bandwidth_bps as f64).clamp(0.0, 1.0)
}

/// Mean compressed/raw ratio over pending packets with a non-empty payload; 1.0 if none.
fn average_compression_ratio(pending: &[Packet]) -> f64 {
    let ratios: Vec<f64> = pending.iter().filter_map(Packet::compression_ratio).collect();
    if ratios.is_empty() {
        return 1.0;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}
