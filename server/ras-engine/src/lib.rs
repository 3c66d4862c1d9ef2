//! Combine RAS Engine: deterministic Relative Athletic Score cards.
//!
//! Turns one raw measurement record into per-metric subscores (0–10),
//! category grades, an overall score and rating labels. Also ranks
//! leaderboard entries by overall score.
//!
//! No DB, no network; pure computation. Used by the binary for
//! stdin/stdout and linked by the HTTP service.

pub mod config;
pub mod engine;
pub mod error;
pub mod grade;
pub mod leaderboard;
pub mod metric;
pub mod normalize;
pub mod rating;
pub mod score;
pub mod types;

pub use config::Config;
pub use engine::{format_score, score_card};
pub use error::EngineError;
pub use grade::{composite_grade, overall_score, FALLBACK_OVERALL_SCORE};
pub use leaderboard::{rank_leaderboard, LeaderboardEntry, RankedEntry};
pub use metric::{Category, Metric};
pub use normalize::{estimate_splits, format_feet_inches, parse_feet_inches, RawValue, Source};
pub use rating::{classify_rating, Rating};
pub use score::compute_subscore;
pub use types::{Input, MeasurementRecord, RasCard};

/// Score the input with the default configuration (no I/O).
pub fn run(input: &Input) -> RasCard {
  run_with_config(input, &Config::default())
}

pub fn run_with_config(input: &Input, config: &Config) -> RasCard {
  score_card(input, config)
}
