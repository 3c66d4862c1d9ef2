//! The ten combine metrics and the four categories they roll up into.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
  FortyYard,
  TwentyYardSplit,
  TenYardSplit,
  VerticalJump,
  BroadJump,
  BenchPress,
  ConeDrill,
  ShuttleRun,
  Height,
  Weight,
}

/// Which way a raw measurement improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  LowerIsBetter,
  HigherIsBetter,
}

impl Metric {
  /// Card order. `Metric::index` is the position in this array.
  pub const ALL: [Metric; 10] = [
    Metric::FortyYard,
    Metric::TwentyYardSplit,
    Metric::TenYardSplit,
    Metric::VerticalJump,
    Metric::BroadJump,
    Metric::BenchPress,
    Metric::ConeDrill,
    Metric::ShuttleRun,
    Metric::Height,
    Metric::Weight,
  ];

  pub fn index(self) -> usize {
    self as usize
  }

  pub fn category(self) -> Category {
    match self {
      Self::Height | Self::Weight => Category::Size,
      Self::FortyYard | Self::TwentyYardSplit | Self::TenYardSplit => Category::Speed,
      Self::VerticalJump | Self::BroadJump | Self::BenchPress => Category::Explosion,
      Self::ConeDrill | Self::ShuttleRun => Category::Agility,
    }
  }

  pub fn direction(self) -> Direction {
    match self {
      Self::FortyYard
      | Self::TwentyYardSplit
      | Self::TenYardSplit
      | Self::ConeDrill
      | Self::ShuttleRun => Direction::LowerIsBetter,
      _ => Direction::HigherIsBetter,
    }
  }

  /// Stopwatch events. A zero or negative time means the drill was not run.
  pub fn is_timed(self) -> bool {
    self.direction() == Direction::LowerIsBetter
  }

  /// Metrics that may arrive as `feet'inches"`.
  pub fn accepts_feet_inches(self) -> bool {
    matches!(self, Self::BroadJump | Self::Height)
  }

  pub fn unit(self) -> &'static str {
    match self {
      Self::BenchPress => "reps",
      Self::Weight => "lb",
      Self::VerticalJump | Self::BroadJump | Self::Height => "in",
      _ => "s",
    }
  }

  /// Display element the subscore is written to.
  pub fn element_key(self) -> &'static str {
    match self {
      Self::FortyYard => "forty-score",
      Self::TwentyYardSplit => "twenty-score",
      Self::TenYardSplit => "ten-score",
      Self::VerticalJump => "vertical-score",
      Self::BroadJump => "broad-score",
      Self::BenchPress => "bench-score",
      Self::ConeDrill => "cone-score",
      Self::ShuttleRun => "shuttle-score",
      Self::Height => "height-score",
      Self::Weight => "weight-score",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Size,
  Speed,
  Explosion,
  Agility,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Size,
    Category::Speed,
    Category::Explosion,
    Category::Agility,
  ];

  pub fn metrics(self) -> &'static [Metric] {
    match self {
      Self::Size => &[Metric::Height, Metric::Weight],
      Self::Speed => &[Metric::FortyYard, Metric::TwentyYardSplit, Metric::TenYardSplit],
      Self::Explosion => &[Metric::VerticalJump, Metric::BroadJump, Metric::BenchPress],
      Self::Agility => &[Metric::ConeDrill, Metric::ShuttleRun],
    }
  }

  pub fn label_prefix(self) -> &'static str {
    match self {
      Self::Size => "Size",
      Self::Speed => "Speed",
      Self::Explosion => "Explosion",
      Self::Agility => "Agility",
    }
  }

  pub fn element_key(self) -> &'static str {
    match self {
      Self::Size => "size-grade",
      Self::Speed => "speed-grade",
      Self::Explosion => "explosion-grade",
      Self::Agility => "agility-grade",
    }
  }
}
