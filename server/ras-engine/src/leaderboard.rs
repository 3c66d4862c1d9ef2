//! Cross-user leaderboard ranking over stored overall scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rating::classify_rating;
use crate::score::{MAX_SUBSCORE, MIN_SUBSCORE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
  pub player: String,
  pub overall_score: f64,
  #[serde(default)]
  pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
  pub rank: usize,
  pub player: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub position: Option<String>,
  pub overall_score: f64,
  pub rating_label: &'static str,
  pub rating_class: &'static str,
}

/// Rank entries best-first, keeping each player's best score.
///
/// Players are matched case-insensitively. Equal scores share a rank and the
/// next distinct score skips ahead (1, 2, 2, 4). Ties are listed by name.
pub fn rank_leaderboard(
  entries: &[LeaderboardEntry],
  limit: usize,
) -> Result<Vec<RankedEntry>, EngineError> {
  let mut best: HashMap<String, (&str, &LeaderboardEntry, f64)> = HashMap::new();

  for (i, entry) in entries.iter().enumerate() {
    let name = entry.player.trim();
    if name.is_empty() {
      return Err(EngineError::validation(
        &format!("entries[{}].player", i),
        "must not be empty",
      ));
    }
    if !entry.overall_score.is_finite()
      || !(MIN_SUBSCORE..=MAX_SUBSCORE).contains(&entry.overall_score)
    {
      return Err(EngineError::validation(
        &format!("entries[{}].overall_score", i),
        "must be a number between 0 and 10",
      ));
    }

    // -0.0 and 0.0 must sort as the same score.
    let score = entry.overall_score + 0.0;
    best
      .entry(name.to_lowercase())
      .and_modify(|kept| {
        if score > kept.2 {
          *kept = (name, entry, score);
        }
      })
      .or_insert((name, entry, score));
  }

  let mut rows: Vec<(String, &str, &LeaderboardEntry, f64)> = best
    .into_iter()
    .map(|(key, (name, entry, score))| (key, name, entry, score))
    .collect();
  rows.sort_by(|a, b| b.3.total_cmp(&a.3).then_with(|| a.0.cmp(&b.0)));

  let mut ranked: Vec<RankedEntry> = Vec::with_capacity(rows.len().min(limit));
  for (i, (_, name, entry, score)) in rows.into_iter().enumerate() {
    if i >= limit {
      break;
    }
    let rank = match ranked.last() {
      Some(prev) if prev.overall_score == score => prev.rank,
      _ => i + 1,
    };
    let rating = classify_rating(score);
    ranked.push(RankedEntry {
      rank,
      player: name.to_string(),
      position: entry.position.clone(),
      overall_score: score,
      rating_label: rating.overall_label(),
      rating_class: rating.css_class(),
    });
  }
  Ok(ranked)
}
