//! Per-metric subscores: one linear formula per event, clamped to 0–10.

use crate::metric::Metric;

pub const MIN_SUBSCORE: f64 = 0.0;
pub const MAX_SUBSCORE: f64 = 10.0;

/// Subscore 0–10 for one metric, or `None` when the value is absent or not finite.
pub fn compute_subscore(metric: Metric, value: Option<f64>) -> Option<f64> {
  let v = value.filter(|v| v.is_finite())?;
  // `+ 0.0` folds -0.0 into 0.0; clamp passes it through.
  Some(linear_score(metric, v).clamp(MIN_SUBSCORE, MAX_SUBSCORE) + 0.0)
}

/// Unclamped formula value; can overshoot either end.
fn linear_score(metric: Metric, v: f64) -> f64 {
  match metric {
    Metric::FortyYard => 10.0 - (v - 4.2) * 10.0,
    Metric::TwentyYardSplit => 10.0 - (v - 2.5) * 10.0,
    Metric::TenYardSplit => 10.0 - (v - 1.4) * 10.0 / 0.6,
    Metric::VerticalJump => (v - 24.0) * 10.0 / 20.0,
    Metric::BroadJump => (v - 90.0) * 10.0 / 50.0,
    Metric::BenchPress => v * 10.0 / 36.0,
    Metric::ConeDrill => 10.0 - (v - 6.4) * 5.0,
    Metric::ShuttleRun => 10.0 - (v - 3.8) * 10.0 / 1.2,
    Metric::Height => (v - 69.0) * 6.0 / 6.0 + 2.0,
    Metric::Weight => (v - 190.0) * 6.0 / 40.0 + 2.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::metric::Direction;
  use proptest::prelude::*;

  fn approx(a: Option<f64>, b: f64) {
    let a = a.expect("expected a subscore");
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
  }

  #[test]
  fn forty_yard_scenarios() {
    approx(compute_subscore(Metric::FortyYard, Some(4.2)), 10.0);
    approx(compute_subscore(Metric::FortyYard, Some(4.7)), 5.0);
    approx(compute_subscore(Metric::FortyYard, Some(5.2)), 0.0);
  }

  #[test]
  fn forty_yard_clamps_both_ends() {
    approx(compute_subscore(Metric::FortyYard, Some(4.0)), 10.0);
    approx(compute_subscore(Metric::FortyYard, Some(6.0)), 0.0);
  }

  #[test]
  fn bench_press_scenarios() {
    approx(compute_subscore(Metric::BenchPress, Some(36.0)), 10.0);
    approx(compute_subscore(Metric::BenchPress, Some(0.0)), 0.0);
    approx(compute_subscore(Metric::BenchPress, Some(18.0)), 5.0);
  }

  #[test]
  fn jump_formulas() {
    approx(compute_subscore(Metric::VerticalJump, Some(44.0)), 10.0);
    approx(compute_subscore(Metric::VerticalJump, Some(34.0)), 5.0);
    approx(compute_subscore(Metric::BroadJump, Some(110.0)), 4.0);
    approx(compute_subscore(Metric::BroadJump, Some(140.0)), 10.0);
  }

  #[test]
  fn agility_formulas() {
    approx(compute_subscore(Metric::ConeDrill, Some(6.4)), 10.0);
    approx(compute_subscore(Metric::ConeDrill, Some(7.4)), 5.0);
    approx(compute_subscore(Metric::ShuttleRun, Some(4.4)), 5.0);
    approx(compute_subscore(Metric::TenYardSplit, Some(1.7)), 5.0);
    approx(compute_subscore(Metric::TwentyYardSplit, Some(3.0)), 5.0);
  }

  #[test]
  fn size_formulas_start_at_two() {
    approx(compute_subscore(Metric::Height, Some(69.0)), 2.0);
    approx(compute_subscore(Metric::Height, Some(74.0)), 7.0);
    approx(compute_subscore(Metric::Weight, Some(190.0)), 2.0);
    approx(compute_subscore(Metric::Weight, Some(230.0)), 8.0);
    approx(compute_subscore(Metric::Weight, Some(150.0)), 0.0);
  }

  #[test]
  fn negative_zero_scores_as_plain_zero() {
    let s = compute_subscore(Metric::BenchPress, Some(-0.0)).unwrap();
    assert!(s.is_sign_positive());
    assert_eq!(format!("{:.2}", s), "0.00");
  }

  #[test]
  fn absent_and_non_finite_are_absent() {
    for m in Metric::ALL {
      assert_eq!(compute_subscore(m, None), None);
      assert_eq!(compute_subscore(m, Some(f64::NAN)), None);
      assert_eq!(compute_subscore(m, Some(f64::INFINITY)), None);
    }
  }

  fn any_metric() -> impl Strategy<Value = Metric> {
    (0..Metric::ALL.len()).prop_map(|i| Metric::ALL[i])
  }

  proptest! {
    #[test]
    fn subscore_always_in_range(m in any_metric(), v in -1.0e6f64..1.0e6) {
      let s = compute_subscore(m, Some(v)).unwrap();
      prop_assert!((MIN_SUBSCORE..=MAX_SUBSCORE).contains(&s));
    }

    #[test]
    fn subscore_is_monotonic(m in any_metric(), a in -500.0f64..500.0, b in -500.0f64..500.0) {
      let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
      let s_lo = compute_subscore(m, Some(lo)).unwrap();
      let s_hi = compute_subscore(m, Some(hi)).unwrap();
      match m.direction() {
        Direction::LowerIsBetter => prop_assert!(s_lo >= s_hi),
        Direction::HigherIsBetter => prop_assert!(s_hi >= s_lo),
      }
    }
  }
}
