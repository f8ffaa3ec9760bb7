pub mod handlers;

use std::path::Path;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use handlers::ApiState;

/// Build the application: `/api` routes, CORS, and the dashboard if `static_dir` exists.
pub fn router(state: ApiState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/packets",
            get(handlers::handle_list_packets).post(handlers::handle_create_packet),
        )
        .route("/packets/clear", delete(handlers::handle_clear_queue))
        .route("/transmission/start", post(handlers::handle_start_transmission))
        .route(
            "/config",
            get(handlers::handle_get_config).post(handlers::handle_update_config),
        )
        .route("/stats", get(handlers::handle_stats))
        .route("/history", get(handlers::handle_history))
        .with_state(state);

    let mut app = Router::new().nest("/api", api_routes);

    match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "serving static assets");
            app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "static directory missing, serving API only")
        }
        None => {}
    }

    app.layer(cors)
}

pub async fn serve(
    state: ApiState,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    serve_on(listener, state, static_dir).await
}

/// Serve on an already-bound listener.
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    state: ApiState,
    static_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = router(state, static_dir);
    tracing::info!(%addr, "API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
