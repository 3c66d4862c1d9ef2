//! Normalize raw measurement values into canonical `Measurement`s.
//!
//! This is the only place that knows about the "--" sentinel and the
//! `feet'inches"` notation; everything downstream sees `Option<f64>`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::grade::round2;
use crate::metric::Metric;

/// One metric as sent by the measurement source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
  Number(f64),
  Text(String),
}

impl From<f64> for RawValue {
  fn from(v: f64) -> Self {
    Self::Number(v)
  }
}

impl From<&str> for RawValue {
  fn from(s: &str) -> Self {
    Self::Text(s.to_string())
  }
}

/// Where a measurement's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
  Recorded,
  /// Derived from another metric (split estimates); never a real measurement.
  Estimated,
  Missing,
}

/// Canonical measurement: parsed value plus the text to show for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
  pub metric: Metric,
  pub value: Option<f64>,
  pub display: String,
  pub source: Source,
}

pub const MISSING_DISPLAY: &str = "--";

const MISSING_SENTINELS: &[&str] = &["", "-", "--", "n/a", "na", "null"];

impl Measurement {
  pub fn missing(metric: Metric) -> Self {
    Self {
      metric,
      value: None,
      display: MISSING_DISPLAY.to_string(),
      source: Source::Missing,
    }
  }

  pub fn estimated(metric: Metric, value: f64) -> Self {
    Self {
      metric,
      value: Some(value),
      display: format!("{:.2}", value),
      source: Source::Estimated,
    }
  }

  /// Normalize one raw value. Malformed input degrades to a missing measurement.
  pub fn from_raw(metric: Metric, raw: Option<&RawValue>) -> Self {
    let raw = match raw {
      Some(r) => r,
      None => return Self::missing(metric),
    };
    if is_missing_sentinel(raw) {
      return Self::missing(metric);
    }

    match parse_value(metric, raw) {
      Some(value) => Self {
        metric,
        value: Some(value),
        display: display_text(metric, raw),
        source: Source::Recorded,
      },
      None => {
        debug!(?metric, ?raw, "discarding malformed measurement");
        Self::missing(metric)
      }
    }
  }
}

/// Parse a raw value into a usable number for `metric`.
///
/// Rejects non-finite numbers and non-positive times (a zero stopwatch
/// reading means the drill was not run).
pub fn parse_value(metric: Metric, raw: &RawValue) -> Option<f64> {
  let v = match raw {
    RawValue::Number(n) => *n,
    RawValue::Text(s) => parse_text(metric, s)?,
  };
  if !v.is_finite() || (metric.is_timed() && v <= 0.0) {
    return None;
  }
  Some(v)
}

fn parse_text(metric: Metric, s: &str) -> Option<f64> {
  let t = s.trim();
  if metric.accepts_feet_inches() && t.contains('\'') {
    return parse_feet_inches(t);
  }
  t.trim_end_matches('"').trim().parse::<f64>().ok()
}

fn is_missing_sentinel(raw: &RawValue) -> bool {
  match raw {
    RawValue::Number(_) => false,
    RawValue::Text(s) => {
      let t = s.trim().to_ascii_lowercase();
      MISSING_SENTINELS.contains(&t.as_str())
    }
  }
}

fn display_text(metric: Metric, raw: &RawValue) -> String {
  match raw {
    RawValue::Text(s) => s.trim().to_string(),
    RawValue::Number(n) if metric.accepts_feet_inches() => format_feet_inches(*n),
    RawValue::Number(n) => n.to_string(),
  }
}

/// Parse `9'2"` (also `9' 2"`, `9'2`, `9'`) into total inches.
pub fn parse_feet_inches(s: &str) -> Option<f64> {
  let (feet, rest) = s.trim().split_once('\'')?;
  let feet: f64 = feet.trim().parse().ok()?;
  let inches = rest.trim().trim_end_matches(['"', '\'']).trim();
  let inches: f64 = if inches.is_empty() {
    0.0
  } else {
    inches.parse().ok()?
  };
  if !feet.is_finite()
    || feet < 0.0
    || feet.fract() != 0.0
    || !(0.0..12.0).contains(&inches)
  {
    return None;
  }
  Some(feet * 12.0 + inches)
}

/// Format total inches as `feet'inches"`, keeping a tenth-of-an-inch fraction (`6'1.5"`).
pub fn format_feet_inches(inches: f64) -> String {
  if !inches.is_finite() || inches < 0.0 {
    return MISSING_DISPLAY.to_string();
  }
  let tenths = (inches * 10.0).round() as u64;
  let (feet, rem) = (tenths / 120, tenths % 120);
  if rem % 10 == 0 {
    format!("{}'{}\"", feet, rem / 10)
  } else {
    format!("{}'{}.{}\"", feet, rem / 10, rem % 10)
  }
}

/// Split times derived from a forty. Estimates, not measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedSplits {
  pub ten_yard: f64,
  pub twenty_yard: f64,
}

/// Estimate 10- and 20-yard splits from a forty time using the configured ratios.
pub fn estimate_splits(forty: f64, config: &Config) -> Option<EstimatedSplits> {
  if !forty.is_finite() || forty <= 0.0 {
    return None;
  }
  Some(EstimatedSplits {
    ten_yard: round2(forty * config.ten_yard_split_ratio),
    twenty_yard: round2(forty * config.twenty_yard_split_ratio),
  })
}
