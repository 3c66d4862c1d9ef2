//! Request types for the scoring service.

use ras_engine::LeaderboardEntry;
use serde::Deserialize;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 100;
pub const MAX_LEADERBOARD_LIMIT: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct LeaderboardRequest {
  pub entries: Vec<LeaderboardEntry>,
  #[serde(default)]
  pub limit: Option<usize>,
}

impl LeaderboardRequest {
  pub fn effective_limit(&self) -> usize {
    self
      .limit
      .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
      .min(MAX_LEADERBOARD_LIMIT)
  }
}
