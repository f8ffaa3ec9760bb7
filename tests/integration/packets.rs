use crate::*;

#[tokio::test]
async fn test_create_logs_packet() -> Result<()> {
    let server = start_server(TransmissionConfig::default()).await?;

    let p = server.send_packet("logs", "hello").await?;
    assert_eq!(p["type"], "logs");
    assert_eq!(p["data"], "hello");
    assert_eq!(p["priority"], 3);
    assert_eq!(p["size_bytes"], 5);
    assert_eq!(
        p["compressed_size"],
        lunar_core::compress::compressed_len("hello")? as u64
    );
    assert_eq!(p["status"], "queued");
    assert!(p["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(p["timestamp"].as_u64().is_some());
    Ok(())
}

#[tokio::test]
async fn test_priorities_by_type() -> Result<()> {
    let server = start_fast_server().await?;

    for (t, expected) in [("emergency", 1), ("science", 2), ("logs", 3)] {
        let p = server.send_packet(t, "x").await?;
        assert_eq!(p["priority"], expected, "wrong priority for {t}");
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_type_rejected_and_not_queued() -> Result<()> {
    let server = start_fast_server().await?;

    let (status, body) = server
        .post("/packets", Some(serde_json::json!({ "type": "video", "data": "x" })))
        .await?;
    assert_eq!(status, 400);
    assert!(body.as_str().unwrap_or_default().contains("video"), "body: {body}");

    let (_, list) = server.get("/packets").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn test_missing_fields_rejected() -> Result<()> {
    let server = start_fast_server().await?;

    let (status, _) = server
        .post("/packets", Some(serde_json::json!({ "type": "logs" })))
        .await?;
    assert!((400..500).contains(&status), "status {status}");
    Ok(())
}

#[tokio::test]
async fn test_list_is_priority_ordered() -> Result<()> {
    let server = start_fast_server().await?;

    let l1 = server.send_packet("logs", "l1").await?;
    let e1 = server.send_packet("emergency", "e1").await?;
    let s1 = server.send_packet("science", "s1").await?;
    let l2 = server.send_packet("logs", "l2").await?;
    let e2 = server.send_packet("emergency", "e2").await?;

    let (status, list) = server.get("/packets").await?;
    assert_eq!(status, 200);
    let ids: Vec<&Value> = list
        .as_array()
        .context("expected array")?
        .iter()
        .map(|p| &p["id"])
        .collect();
    assert_eq!(ids, vec![&e1["id"], &e2["id"], &s1["id"], &l1["id"], &l2["id"]]);
    Ok(())
}

#[tokio::test]
async fn test_compression_disabled_keeps_raw_size() -> Result<()> {
    let server = start_server(TransmissionConfig {
        compression_enabled: false,
        ..Default::default()
    })
    .await?;

    let p = server.send_packet("science", &"spectrometer ".repeat(40)).await?;
    assert_eq!(p["compressed_size"], p["size_bytes"]);
    Ok(())
}

#[tokio::test]
async fn test_clear_queue() -> Result<()> {
    let server = start_fast_server().await?;
    server.send_packet("logs", "a").await?;
    server.send_packet("science", "b").await?;

    let (status, body) = server.delete("/packets/clear").await?;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Queue cleared");

    let (_, list) = server.get("/packets").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
    Ok(())
}
