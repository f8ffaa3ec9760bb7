use crate::*;

#[tokio::test]
async fn test_stats_on_fresh_server() -> Result<()> {
    let server = start_fast_server().await?;

    let (status, s) = server.get("/stats").await?;
    assert_eq!(status, 200);
    assert_eq!(s["total_packets"], 0);
    assert_eq!(s["packets_transmitted"], 0);
    assert_eq!(s["packets_queued"], 0);
    assert_eq!(s["bandwidth_utilization"], 0.0);
    assert_eq!(s["average_compression_ratio"], 1.0);
    assert_eq!(s["transmission_efficiency"], 0.0);
    Ok(())
}

#[tokio::test]
async fn test_stats_after_partial_drain() -> Result<()> {
    let server = start_fast_server().await?;
    server.send_packet("science", "a").await?;
    server.send_packet("logs", "b").await?;
    server.post("/transmission/start", None).await?;
    server.send_packet("emergency", &"MAYDAY ".repeat(100)).await?;

    let (_, s) = server.get("/stats").await?;
    assert_eq!(s["total_packets"], 3);
    assert_eq!(s["packets_transmitted"], 2);
    assert_eq!(s["packets_queued"], 1);

    let efficiency = s["transmission_efficiency"].as_f64().context("efficiency")?;
    assert!((efficiency - 2.0 / 3.0).abs() < 1e-9);

    let utilization = s["bandwidth_utilization"].as_f64().context("utilization")?;
    assert!((0.0..=1.0).contains(&utilization));

    // Only the repetitive pending packet counts, and it compresses well.
    let ratio = s["average_compression_ratio"].as_f64().context("ratio")?;
    assert!(ratio < 0.2, "ratio {ratio}");
    Ok(())
}

#[tokio::test]
async fn test_history_capped_at_twenty() -> Result<()> {
    let server = start_fast_server().await?;
    let mut ids = Vec::new();
    for i in 0..23 {
        ids.push(server.send_packet("logs", &format!("entry {i}")).await?["id"].clone());
    }
    let (_, body) = server.post("/transmission/start", None).await?;
    assert_eq!(body["transmitted_packets"], 23);

    let (_, history) = server.get("/history").await?;
    let got: Vec<Value> = history
        .as_array()
        .context("expected array")?
        .iter()
        .map(|r| r["packet_id"].clone())
        .collect();
    assert_eq!(got, ids[3..].to_vec());

    let (_, s) = server.get("/stats").await?;
    assert_eq!(s["packets_transmitted"], 23);
    assert_eq!(s["transmission_efficiency"], 1.0);
    Ok(())
}
