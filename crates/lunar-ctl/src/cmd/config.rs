//! Link configuration commands.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::http::{base_url, get_json, post_json_body, MessageResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TransmissionConfig {
    distance_km: f64,
    bandwidth_bps: i64,
    compression_enabled: bool,
    latency_scale_factor: f64,
}

impl TransmissionConfig {
    /// Apply one `key=value` assignment.
    fn set(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .with_context(|| format!("expected key=value, got '{}'", assignment))?;

        match key {
            "distance" | "distance_km" => {
                self.distance_km = value.parse().context("distance_km must be a number")?
            }
            "bandwidth" | "bandwidth_bps" => {
                self.bandwidth_bps = value.parse().context("bandwidth_bps must be an integer")?
            }
            "compression" | "compression_enabled" => {
                self.compression_enabled = match value {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    _ => bail!("compression must be on/off, got '{}'", value),
                }
            }
            "scale" | "latency_scale_factor" => {
                self.latency_scale_factor =
                    value.parse().context("latency_scale_factor must be a number")?
            }
            other => bail!("unknown config key '{}'", other),
        }
        Ok(())
    }
}

pub async fn cmd_config(port: u16) -> Result<()> {
    let c: TransmissionConfig = get_json(&format!("{}/config", base_url(port))).await?;

    println!("═══════════════════════════════════════");
    println!("  Link Configuration");
    println!("═══════════════════════════════════════");
    println!("  Distance      : {} km", c.distance_km);
    println!("  Bandwidth     : {} bps", c.bandwidth_bps);
    println!(
        "  Compression   : {}",
        if c.compression_enabled { "on" } else { "off" }
    );
    println!("  Latency scale : {}", c.latency_scale_factor);

    Ok(())
}

/// Fetch the current config, apply assignments, and send the full config back.
pub async fn cmd_config_set(port: u16, assignments: &[&str]) -> Result<()> {
    if assignments.is_empty() {
        bail!("config set needs at least one key=value");
    }

    let url = format!("{}/config", base_url(port));
    let mut config: TransmissionConfig = get_json(&url).await?;
    for a in assignments {
        config.set(a)?;
    }

    let resp: MessageResponse = post_json_body(&url, &config).await?;
    println!("{}", resp.message);
    Ok(())
}
