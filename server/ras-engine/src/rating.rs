//! Rating bands derived from a 0–10 score.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
  Poor,
  BelowAverage,
  Average,
  Good,
  Excellent,
}

/// Highest band whose inclusive lower bound the score meets. NaN is `Poor`.
pub fn classify_rating(score: f64) -> Rating {
  if score.is_nan() || score < 4.0 {
    Rating::Poor
  } else if score < 5.0 {
    Rating::BelowAverage
  } else if score < 7.0 {
    Rating::Average
  } else if score < 9.0 {
    Rating::Good
  } else {
    Rating::Excellent
  }
}

impl Rating {
  /// Label used next to the overall score.
  pub fn overall_label(self) -> &'static str {
    match self {
      Self::Poor => "POOR",
      Self::BelowAverage => "BELOW AVERAGE",
      Self::Average => "AVERAGE",
      Self::Good => "GOOD",
      Self::Excellent => "EXCELLENT",
    }
  }

  /// Label used next to a category grade; the middle band reads "OKAY" there.
  pub fn composite_label(self) -> &'static str {
    match self {
      Self::Average => "OKAY",
      other => other.overall_label(),
    }
  }

  /// Class name the display sink uses for color coding.
  pub fn css_class(self) -> &'static str {
    match self {
      Self::Poor => "poor",
      Self::BelowAverage => "below-average",
      Self::Average => "average",
      Self::Good => "good",
      Self::Excellent => "excellent",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn band_edges() {
    assert_eq!(classify_rating(3.99), Rating::Poor);
    assert_eq!(classify_rating(4.0), Rating::BelowAverage);
    assert_eq!(classify_rating(6.99), Rating::Average);
    assert_eq!(classify_rating(7.0), Rating::Good);
    assert_eq!(classify_rating(8.99), Rating::Good);
    assert_eq!(classify_rating(9.0), Rating::Excellent);
    assert_eq!(classify_rating(10.0), Rating::Excellent);
  }

  #[test]
  fn nan_is_poor() {
    assert_eq!(classify_rating(f64::NAN), Rating::Poor);
  }

  #[test]
  fn average_reads_okay_only_in_composite_context() {
    assert_eq!(Rating::Average.overall_label(), "AVERAGE");
    assert_eq!(Rating::Average.composite_label(), "OKAY");
    assert_eq!(Rating::Good.composite_label(), "GOOD");
  }
}
