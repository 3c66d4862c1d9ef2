//! HTTP handlers for the scoring service.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{debug, warn};

use ras_engine::types::ErrorOutput;
use ras_engine::{rank_leaderboard, run_with_config, Input, RankedEntry, RasCard};

use crate::state::AppState;
use crate::types::LeaderboardRequest;

pub async fn health() -> &'static str {
  "ok"
}

pub async fn score(State(state): State<Arc<AppState>>, Json(input): Json<Input>) -> Json<RasCard> {
  let card = run_with_config(&input, &state.config);
  debug!(
    overall = card.overall_score,
    present = card.metrics_present,
    fallback = card.fallback_used,
    "scored card"
  );
  Json(card)
}

pub async fn leaderboard(
  Json(payload): Json<LeaderboardRequest>,
) -> Result<Json<Vec<RankedEntry>>, (StatusCode, Json<ErrorOutput>)> {
  match rank_leaderboard(&payload.entries, payload.effective_limit()) {
    Ok(ranked) => Ok(Json(ranked)),
    Err(e) => {
      warn!("leaderboard: {}", e);
      Err((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorOutput::from(&e))))
    }
  }
}
