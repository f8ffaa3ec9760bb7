//! lunar integration test harness.
//!
//! Each test starts its own API server in-process on 127.0.0.1:0 and talks
//! to it over real HTTP. Servers are independent, so tests can run in parallel.

mod link_config;
mod packets;
mod stats;

use anyhow::{Context, Result};
use serde_json::Value;

use lunar_api::ApiState;
use lunar_core::TransmissionConfig;

// ── Harness ───────────────────────────────────────────────────────────────────

/// Keeps simulated drains in the low milliseconds.
pub const FAST_SCALE: f64 = 0.0001;

pub struct TestServer {
    pub base: String,
    client: reqwest::Client,
}

/// Start a server with `config` as its initial link config.
pub async fn start_server(config: TransmissionConfig) -> Result<TestServer> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let state = ApiState::new(config);
    tokio::spawn(async move {
        if let Err(e) = lunar_api::serve_on(listener, state, None).await {
            eprintln!("test server failed: {e}");
        }
    });

    Ok(TestServer {
        base: format!("http://{addr}/api"),
        client: reqwest::Client::new(),
    })
}

/// Default link config with the latency scale turned down.
pub async fn start_fast_server() -> Result<TestServer> {
    start_server(TransmissionConfig {
        latency_scale_factor: FAST_SCALE,
        ..Default::default()
    })
    .await
}

impl TestServer {
    async fn finish(resp: reqwest::Response) -> Result<(u16, Value)> {
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok((status, body))
    }

    pub async fn get(&self, path: &str) -> Result<(u16, Value)> {
        let resp = self
            .client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;
        Self::finish(resp).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<(u16, Value)> {
        let mut req = self.client.post(format!("{}{}", self.base, path));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let resp = req.send().await.with_context(|| format!("POST {path} failed"))?;
        Self::finish(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<(u16, Value)> {
        let resp = self
            .client
            .delete(format!("{}{}", self.base, path))
            .send()
            .await
            .with_context(|| format!("DELETE {path} failed"))?;
        Self::finish(resp).await
    }

    /// Create a packet and assert success.
    pub async fn send_packet(&self, packet_type: &str, data: &str) -> Result<Value> {
        let (status, body) = self
            .post(
                "/packets",
                Some(serde_json::json!({ "type": packet_type, "data": data })),
            )
            .await?;
        anyhow::ensure!(status == 200, "create packet returned {status}: {body}");
        Ok(body)
    }
}
