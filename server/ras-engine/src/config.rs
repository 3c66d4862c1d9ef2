//! Engine configuration with sane defaults.

use crate::grade::FALLBACK_OVERALL_SCORE;

/// 10-yard split as a fraction of the forty time.
pub const TEN_YARD_SPLIT_RATIO: f64 = 0.35;
/// 20-yard split as a fraction of the forty time.
pub const TWENTY_YARD_SPLIT_RATIO: f64 = 0.60;

/// Tunables for card assembly. The subscore formula table is fixed and not configurable.
#[derive(Debug, Clone)]
pub struct Config {
  /// Overall score reported when no metric has a value.
  pub fallback_overall_score: f64,
  /// Fill missing 10/20-yard splits from the forty time (tagged as estimates).
  pub estimate_missing_splits: bool,
  pub ten_yard_split_ratio: f64,
  pub twenty_yard_split_ratio: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      fallback_overall_score: FALLBACK_OVERALL_SCORE,
      estimate_missing_splits: true,
      ten_yard_split_ratio: TEN_YARD_SPLIT_RATIO,
      twenty_yard_split_ratio: TWENTY_YARD_SPLIT_RATIO,
    }
  }
}
