//! Stats and history commands.

use anyhow::Result;
use serde::Deserialize;

use super::http::{base_url, get_json};

#[derive(Deserialize)]
struct SystemStats {
    total_packets: usize,
    packets_transmitted: usize,
    packets_queued: usize,
    bandwidth_utilization: f64,
    average_compression_ratio: f64,
    transmission_efficiency: f64,
}

#[derive(Deserialize)]
struct TransmissionRecord {
    packet_id: String,
    timestamp: u64,
    transmission_time: f64,
    delay: f64,
    size: u64,
}

fn percent(v: f64) -> i64 {
    (v * 100.0).round() as i64
}

pub async fn cmd_stats(port: u16) -> Result<()> {
    let s: SystemStats = get_json(&format!("{}/stats", base_url(port))).await?;

    println!("═══════════════════════════════════════");
    println!("  Link Statistics");
    println!("═══════════════════════════════════════");
    println!("  Total packets          : {}", s.total_packets);
    println!("  Transmitted            : {}", s.packets_transmitted);
    println!("  Queued                 : {}", s.packets_queued);
    println!("  Bandwidth utilization  : {}%", percent(s.bandwidth_utilization));
    println!("  Avg compression ratio  : {}%", percent(s.average_compression_ratio));
    println!("  Transmission efficiency: {}%", percent(s.transmission_efficiency));

    Ok(())
}

pub async fn cmd_history(port: u16) -> Result<()> {
    let records: Vec<TransmissionRecord> = get_json(&format!("{}/history", base_url(port))).await?;

    if records.is_empty() {
        println!("No transmissions yet.");
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  Recent Transmissions ({})", records.len());
    println!("═══════════════════════════════════════");

    for r in &records {
        println!(
            "  {}  {:>6}B  tx {:>8.3}s  delay {:.3}s  @{}",
            &r.packet_id[..r.packet_id.len().min(12)],
            r.size,
            r.transmission_time,
            r.delay,
            r.timestamp
        );
    }

    Ok(())
}
