use livemap_api::{cors_layer, create_api_routes, AppState};
use livemap_domain::config::ServerConfig;
use std::net::{IpAddr, SocketAddr};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serve the map API until `shutdown` is cancelled.
pub async fn start_web_server(
    cfg: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let ip: IpAddr = cfg
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", cfg.bind_address, e))?;
    let addr = SocketAddr::new(ip, cfg.port);

    let app = create_api_routes(state)
        .layer(cors_layer(&cfg.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}: {}", addr, e))?;

    info!("Map endpoint: http://{}/", addr);
    info!("Cache stats: http://{}/cache/stats", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}
