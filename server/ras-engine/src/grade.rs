//! Composite category grades and the overall score.

/// Overall score reported when no metric has a value at all.
pub const FALLBACK_OVERALL_SCORE: f64 = 7.16;

/// Mean of the present subscores; `None` when nothing is present. Not rounded.
pub fn composite_grade(subscores: &[Option<f64>]) -> Option<f64> {
  mean(subscores)
}

/// Mean of every present subscore, rounded to 2 decimals, or `fallback` when none are present.
///
/// Takes the per-metric subscores, never the composites: averaging composites would
/// over-weight categories with fewer metrics.
pub fn overall_score(subscores: &[Option<f64>], fallback: f64) -> f64 {
  match mean(subscores) {
    Some(m) => round2(m),
    None => fallback,
  }
}

pub fn present_count(subscores: &[Option<f64>]) -> usize {
  subscores.iter().flatten().count()
}

/// Round to 2 decimals (display precision).
pub fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}

fn mean(subscores: &[Option<f64>]) -> Option<f64> {
  let (sum, n) = subscores
    .iter()
    .flatten()
    .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
  if n == 0 {
    None
  } else {
    Some(sum / n as f64)
  }
}
