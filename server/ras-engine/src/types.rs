//! Input/output types for the RAS engine (JSON contract with the site).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::metric::{Category, Metric};
use crate::normalize::{RawValue, Source};
use crate::rating::Rating;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the measurement source sends)
// ---------------------------------------------------------------------------

/// Input: one JSON object per card. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
  #[serde(default)]
  pub player: Option<String>,
  #[serde(default)]
  pub measurements: MeasurementRecord,
}

impl Input {
  pub fn from_json(raw: &str) -> Result<Self, EngineError> {
    Ok(serde_json::from_str(raw)?)
  }
}

/// Raw values for the ten metrics. Omitted or null means not provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
  #[serde(default)]
  pub forty_yard: Option<RawValue>,
  #[serde(default)]
  pub twenty_yard_split: Option<RawValue>,
  #[serde(default)]
  pub ten_yard_split: Option<RawValue>,
  #[serde(default)]
  pub vertical_jump: Option<RawValue>,
  #[serde(default)]
  pub broad_jump: Option<RawValue>,
  #[serde(default)]
  pub bench_press: Option<RawValue>,
  #[serde(default)]
  pub cone_drill: Option<RawValue>,
  #[serde(default)]
  pub shuttle_run: Option<RawValue>,
  #[serde(default)]
  pub height: Option<RawValue>,
  #[serde(default)]
  pub weight: Option<RawValue>,
}

impl MeasurementRecord {
  pub fn get(&self, metric: Metric) -> Option<&RawValue> {
    self.slot(metric).as_ref()
  }

  pub fn set(&mut self, metric: Metric, raw: impl Into<RawValue>) {
    *self.slot_mut(metric) = Some(raw.into());
  }

  /// Builder form of `set`.
  pub fn with(mut self, metric: Metric, raw: impl Into<RawValue>) -> Self {
    self.set(metric, raw);
    self
  }

  fn slot(&self, metric: Metric) -> &Option<RawValue> {
    match metric {
      Metric::FortyYard => &self.forty_yard,
      Metric::TwentyYardSplit => &self.twenty_yard_split,
      Metric::TenYardSplit => &self.ten_yard_split,
      Metric::VerticalJump => &self.vertical_jump,
      Metric::BroadJump => &self.broad_jump,
      Metric::BenchPress => &self.bench_press,
      Metric::ConeDrill => &self.cone_drill,
      Metric::ShuttleRun => &self.shuttle_run,
      Metric::Height => &self.height,
      Metric::Weight => &self.weight,
    }
  }

  fn slot_mut(&mut self, metric: Metric) -> &mut Option<RawValue> {
    match metric {
      Metric::FortyYard => &mut self.forty_yard,
      Metric::TwentyYardSplit => &mut self.twenty_yard_split,
      Metric::TenYardSplit => &mut self.ten_yard_split,
      Metric::VerticalJump => &mut self.vertical_jump,
      Metric::BroadJump => &mut self.broad_jump,
      Metric::BenchPress => &mut self.bench_press,
      Metric::ConeDrill => &mut self.cone_drill,
      Metric::ShuttleRun => &mut self.shuttle_run,
      Metric::Height => &mut self.height,
      Metric::Weight => &mut self.weight,
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what the display and persistence sinks get)
// ---------------------------------------------------------------------------

/// One metric row of the card.
#[derive(Debug, Clone, Serialize)]
pub struct MetricScore {
  pub metric: Metric,
  pub element_key: &'static str,
  pub unit: &'static str,
  pub display: String,
  pub source: Source,
  pub value: Option<f64>,
  pub subscore: Option<f64>,
  /// Two decimals, or "N/A".
  pub subscore_text: String,
}

/// One category grade of the card.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeScore {
  pub category: Category,
  pub element_key: &'static str,
  pub label_prefix: &'static str,
  pub grade: Option<f64>,
  /// "Speed: 5.00" or "Speed: N/A".
  pub grade_text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating: Option<Rating>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating_label: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating_class: Option<&'static str>,
}

/// Output: the full RAS card.
#[derive(Debug, Clone, Serialize)]
pub struct RasCard {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub player: Option<String>,
  pub overall_score: f64,
  pub overall_text: String,
  pub rating: Rating,
  pub rating_label: &'static str,
  pub rating_class: &'static str,
  /// True when no metric was present and `overall_score` is the fallback constant.
  pub fallback_used: bool,
  pub metrics_present: usize,
  pub metrics: Vec<MetricScore>,
  pub composites: Vec<CompositeScore>,
}

impl RasCard {
  pub fn metric(&self, metric: Metric) -> &MetricScore {
    &self.metrics[metric.index()]
  }

  pub fn composite(&self, category: Category) -> &CompositeScore {
    &self.composites[category as usize]
  }

  /// Subscores in `Metric::ALL` order, for the persistence sink.
  pub fn subscores(&self) -> Vec<Option<f64>> {
    self.metrics.iter().map(|m| m.subscore).collect()
  }
}

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

/// Structured error output for invalid requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&EngineError> for ErrorOutput {
  fn from(e: &EngineError) -> Self {
    match e {
      EngineError::Validation { field, reason } => Self::new(reason.clone()).with_field(field.clone()),
      _ => Self::new(e.to_string()),
    }
  }
}
