//! Binary entrypoint for the scoring service.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ras_service::{app, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cfg = ServiceConfig::from_env()?;
  let state = Arc::new(AppState { config: cfg.engine });

  let addr = SocketAddr::from(([127, 0, 0, 1], cfg.port));
  tracing::info!("ras-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app(state)).await?;

  Ok(())
}
