use crate::*;

#[tokio::test]
async fn test_default_config() -> Result<()> {
    let server = start_server(TransmissionConfig::default()).await?;

    let (status, c) = server.get("/config").await?;
    assert_eq!(status, 200);
    assert_eq!(c["distance_km"], 384400.0);
    assert_eq!(c["bandwidth_bps"], 2048);
    assert_eq!(c["compression_enabled"], true);
    assert_eq!(c["latency_scale_factor"], 0.01);
    Ok(())
}

#[tokio::test]
async fn test_update_replaces_config() -> Result<()> {
    let server = start_fast_server().await?;
    let new = serde_json::json!({
        "distance_km": 225000000.0,
        "bandwidth_bps": 512,
        "compression_enabled": false,
        "latency_scale_factor": 0.001
    });

    let (status, body) = server.post("/config", Some(new.clone())).await?;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Configuration updated");

    let (_, c) = server.get("/config").await?;
    assert_eq!(c, new);

    // New packets pick up the compression setting.
    let p = server.send_packet("logs", &"x".repeat(200)).await?;
    assert_eq!(p["compressed_size"], 200);
    Ok(())
}

#[tokio::test]
async fn test_negative_bandwidth_rejected_and_config_unchanged() -> Result<()> {
    let server = start_fast_server().await?;
    let (_, before) = server.get("/config").await?;

    let bad = serde_json::json!({
        "distance_km": 384400.0,
        "bandwidth_bps": -1,
        "compression_enabled": true,
        "latency_scale_factor": 0.01
    });
    let (status, body) = server.post("/config", Some(bad)).await?;
    assert_eq!(status, 400);
    assert!(body.as_str().unwrap_or_default().contains("bandwidth_bps"), "body: {body}");

    let (_, after) = server.get("/config").await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn test_other_out_of_range_fields_rejected() -> Result<()> {
    let server = start_fast_server().await?;

    let config = |distance_km: f64, bandwidth_bps: i64, latency_scale_factor: f64| {
        serde_json::json!({
            "distance_km": distance_km,
            "bandwidth_bps": bandwidth_bps,
            "compression_enabled": true,
            "latency_scale_factor": latency_scale_factor
        })
    };

    for bad in [config(-1.0, 2048, 0.01), config(1.0, 0, 0.01), config(1.0, 2048, 0.0)] {
        let (status, _) = server.post("/config", Some(bad.clone())).await?;
        assert_eq!(status, 400, "accepted {bad}");
    }
    Ok(())
}

#[tokio::test]
async fn test_partial_update_rejected() -> Result<()> {
    let server = start_fast_server().await?;

    let (status, _) = server
        .post("/config", Some(serde_json::json!({ "bandwidth_bps": 4096 })))
        .await?;
    assert!((400..500).contains(&status), "status {status}");

    let (_, c) = server.get("/config").await?;
    assert_eq!(c["bandwidth_bps"], 2048);
    Ok(())
}
