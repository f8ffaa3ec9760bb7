//! lunard — bandwidth-constrained link simulator daemon.

use anyhow::{Context, Result};

use lunar_api::ApiState;
use lunar_core::LunarConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config
    if let Err(e) = LunarConfig::write_default_if_missing() {
        tracing::warn!(error = %e, "failed to write default config");
    }
    let config = LunarConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        LunarConfig::default()
    });
    config
        .link
        .validate()
        .context("invalid [link] section in config")?;

    tracing::info!(
        distance_km = config.link.distance_km,
        bandwidth_bps = config.link.bandwidth_bps,
        compression_enabled = config.link.compression_enabled,
        latency_scale_factor = config.link.latency_scale_factor,
        "lunard starting"
    );

    let state = ApiState::new(config.link);
    let static_dir = config.api.static_dir.clone();

    let (host, port) = (config.api.host.as_str(), config.api.port);

    tokio::select! {
        r = lunar_api::serve(state, host, port, Some(&static_dir)) => {
            r.with_context(|| format!("API server on {host}:{port} failed"))?;
        }
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    Ok(())
}
