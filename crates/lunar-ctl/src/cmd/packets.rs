//! Queue commands: list, send, transmit, clear.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::http::{base_url, delete_json, get_json, post_json, post_json_body, MessageResponse};

#[derive(Deserialize)]
#[allow(dead_code)]
struct Packet {
    id: String,
    #[serde(rename = "type")]
    packet_type: String,
    data: String,
    priority: u8,
    timestamp: u64,
    size_bytes: u64,
    compressed_size: u64,
    status: String,
}

#[derive(Serialize)]
struct CreatePacketRequest<'a> {
    #[serde(rename = "type")]
    packet_type: &'a str,
    data: &'a str,
}

#[derive(Deserialize)]
struct StartTransmissionResponse {
    transmitted_packets: usize,
}

fn type_icon(packet_type: &str) -> &'static str {
    match packet_type {
        "emergency" => "!",
        "science" => "*",
        "logs" => "-",
        _ => "?",
    }
}

/// Percentage saved by compression, negative when the payload grew.
fn percent_saved(size_bytes: u64, compressed_size: u64) -> i64 {
    if size_bytes == 0 {
        return 0;
    }
    ((1.0 - compressed_size as f64 / size_bytes as f64) * 100.0).round() as i64
}

/// First `max` characters of `data`, with an ellipsis if cut.
fn preview(data: &str, max: usize) -> String {
    let mut chars = data.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub async fn cmd_packets(port: u16) -> Result<()> {
    let packets: Vec<Packet> = get_json(&format!("{}/packets", base_url(port))).await?;

    if packets.is_empty() {
        println!("Queue is empty.");
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  Packet Queue ({})", packets.len());
    println!("═══════════════════════════════════════");

    for p in &packets {
        println!(
            "  ┌─ {} {} [{}]",
            type_icon(&p.packet_type),
            p.packet_type.to_uppercase(),
            p.status.to_uppercase()
        );
        println!("  │  id       : {}", p.id);
        println!("  │  priority : {}", p.priority);
        println!("  │  data     : {}", preview(&p.data, 50));
        println!(
            "  └─ size     : {}B → {}B ({}% compressed)",
            p.size_bytes,
            p.compressed_size,
            percent_saved(p.size_bytes, p.compressed_size)
        );
    }

    Ok(())
}

pub async fn cmd_send(port: u16, packet_type: &str, data: &str) -> Result<()> {
    let req = CreatePacketRequest { packet_type, data };
    let p: Packet = post_json_body(&format!("{}/packets", base_url(port)), &req).await?;

    println!("Queued {} packet {}", p.packet_type, p.id);
    println!("  priority : {}", p.priority);
    println!("  size     : {}B → {}B", p.size_bytes, p.compressed_size);
    Ok(())
}

pub async fn cmd_transmit(port: u16) -> Result<()> {
    println!("Transmitting...");
    let resp: StartTransmissionResponse =
        post_json(&format!("{}/transmission/start", base_url(port))).await?;
    println!("Transmitted {} packets.", resp.transmitted_packets);
    Ok(())
}

pub async fn cmd_clear(port: u16) -> Result<()> {
    let resp: MessageResponse = delete_json(&format!("{}/packets/clear", base_url(port))).await?;
    println!("{}", resp.message);
    Ok(())
}
