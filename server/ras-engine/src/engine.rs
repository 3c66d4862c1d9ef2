//! Card assembly: measurements -> subscores -> grades -> overall -> labels.
//!
//! Every call derives the whole card fresh from the raw record; nothing is
//! cached between calls.

use tracing::debug;

use crate::config::Config;
use crate::grade::{composite_grade, overall_score, present_count};
use crate::metric::{Category, Metric};
use crate::normalize::{estimate_splits, Measurement, Source};
use crate::rating::classify_rating;
use crate::score::compute_subscore;
use crate::types::*;

pub const ABSENT_TEXT: &str = "N/A";

/// Two decimals, or "N/A" when absent.
pub fn format_score(score: Option<f64>) -> String {
  match score {
    Some(s) => format!("{:.2}", s),
    None => ABSENT_TEXT.to_string(),
  }
}

/// Normalize every metric of the record, in `Metric::ALL` order.
pub fn normalize_record(record: &MeasurementRecord, config: &Config) -> Vec<Measurement> {
  let mut measurements: Vec<Measurement> = Metric::ALL
    .iter()
    .map(|&m| Measurement::from_raw(m, record.get(m)))
    .collect();
  if config.estimate_missing_splits {
    fill_estimated_splits(&mut measurements, config);
  }
  measurements
}

/// Fill absent 10/20-yard splits from the forty. Recorded splits are never overwritten.
fn fill_estimated_splits(measurements: &mut [Measurement], config: &Config) {
  let forty = match measurements[Metric::FortyYard.index()].value {
    Some(f) => f,
    None => return,
  };
  let est = match estimate_splits(forty, config) {
    Some(e) => e,
    None => return,
  };
  for (metric, value) in [
    (Metric::TenYardSplit, est.ten_yard),
    (Metric::TwentyYardSplit, est.twenty_yard),
  ] {
    let slot = &mut measurements[metric.index()];
    if slot.value.is_none() {
      debug!(?metric, value, forty, "estimating split from forty");
      *slot = Measurement::estimated(metric, value);
    }
  }
}

/// Score one record into a card.
///
/// Estimated splits get a subscore on their own row but are left out of the
/// composites, the overall score and `metrics_present`.
pub fn score_card(input: &Input, config: &Config) -> RasCard {
  let measurements = normalize_record(&input.measurements, config);
  let subscores: Vec<Option<f64>> = measurements
    .iter()
    .map(|m| compute_subscore(m.metric, m.value))
    .collect();
  let measured: Vec<Option<f64>> = measurements
    .iter()
    .zip(subscores.iter())
    .map(|(m, s)| s.filter(|_| m.source == Source::Recorded))
    .collect();

  let metrics: Vec<MetricScore> = measurements
    .into_iter()
    .zip(subscores.iter().copied())
    .map(|(m, subscore)| MetricScore {
      metric: m.metric,
      element_key: m.metric.element_key(),
      unit: m.metric.unit(),
      display: m.display,
      source: m.source,
      value: m.value,
      subscore,
      subscore_text: format_score(subscore),
    })
    .collect();

  let composites: Vec<CompositeScore> = Category::ALL
    .iter()
    .map(|&c| composite_score(c, &measured))
    .collect();

  let metrics_present = present_count(&measured);
  let overall = overall_score(&measured, config.fallback_overall_score);
  let rating = classify_rating(overall);

  RasCard {
    player: input
      .player
      .as_deref()
      .map(str::trim)
      .filter(|p| !p.is_empty())
      .map(str::to_string),
    overall_score: overall,
    overall_text: format_score(Some(overall)),
    rating,
    rating_label: rating.overall_label(),
    rating_class: rating.css_class(),
    fallback_used: metrics_present == 0,
    metrics_present,
    metrics,
    composites,
  }
}

fn composite_score(category: Category, subscores: &[Option<f64>]) -> CompositeScore {
  let members: Vec<Option<f64>> = category
    .metrics()
    .iter()
    .map(|m| subscores[m.index()])
    .collect();
  let grade = composite_grade(&members);
  let rating = grade.map(classify_rating);

  CompositeScore {
    category,
    element_key: category.element_key(),
    label_prefix: category.label_prefix(),
    grade,
    grade_text: format!("{}: {}", category.label_prefix(), format_score(grade)),
    rating,
    rating_label: rating.map(|r| r.composite_label()),
    rating_class: rating.map(|r| r.css_class()),
  }
}
