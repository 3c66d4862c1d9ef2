//! Combine RAS Scoring Service
//!
//! HTTP front for the RAS engine: scores measurement records into cards and
//! ranks leaderboard entries. Stores nothing.

mod config;
mod handlers;
mod state;
mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{ServiceConfig, DEFAULT_PORT};
pub use handlers::{health, leaderboard, score};
pub use state::AppState;
pub use types::{LeaderboardRequest, DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};

pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/score", post(score))
    .route("/leaderboard", post(leaderboard))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
