//! Integration tests for the RAS engine.

use proptest::prelude::*;
use ras_engine::{
  classify_rating, composite_grade, compute_subscore, format_feet_inches, overall_score,
  parse_feet_inches, run, run_with_config, Category, Config, Input, Metric, Rating, Source,
  FALLBACK_OVERALL_SCORE,
};

fn fixture_input() -> Input {
  let json = r#"{
    "player": "Test Prospect",
    "measurements": {
      "forty_yard": 4.48,
      "twenty_yard_split": "--",
      "ten_yard_split": 1.55,
      "vertical_jump": "38.5",
      "broad_jump": "10'5\"",
      "bench_press": 19,
      "cone_drill": 6.95,
      "shuttle_run": "",
      "height": "6'2\"",
      "weight": 212
    }
  }"#;
  Input::from_json(json).unwrap()
}

#[test]
fn full_card_from_json() {
  let card = run(&fixture_input());

  assert_eq!(card.player.as_deref(), Some("Test Prospect"));
  assert_eq!(card.metrics.len(), 10);
  assert_eq!(card.composites.len(), 4);

  // "--" for the 20-yard split is filled from the forty, but tagged and not counted.
  let twenty = card.metric(Metric::TwentyYardSplit);
  assert_eq!(twenty.source, Source::Estimated);
  assert!(twenty.subscore.is_some());

  // Empty shuttle stays absent and does not count.
  let shuttle = card.metric(Metric::ShuttleRun);
  assert_eq!(shuttle.source, Source::Missing);
  assert_eq!(shuttle.subscore, None);
  assert_eq!(shuttle.subscore_text, "N/A");
  assert_eq!(card.metrics_present, 8);

  // Feet-inches input normalized but displayed as given.
  let broad = card.metric(Metric::BroadJump);
  assert_eq!(broad.value, Some(125.0));
  assert_eq!(broad.display, "10'5\"");

  let agility = card.composite(Category::Agility);
  assert_eq!(agility.grade, card.metric(Metric::ConeDrill).subscore);
  assert!(agility.grade_text.starts_with("Agility: "));

  for m in &card.metrics {
    if let Some(s) = m.subscore {
      assert!((0.0..=10.0).contains(&s), "{:?} out of range: {}", m.metric, s);
    }
  }
  assert!(!card.fallback_used);
  assert_eq!(card.rating, classify_rating(card.overall_score));
}

#[test]
fn deterministic_output_across_runs() {
  let input = fixture_input();
  let json1 = serde_json::to_string(&run(&input)).unwrap();
  let json2 = serde_json::to_string(&run(&input)).unwrap();
  assert_eq!(json1, json2, "Same inputs must produce identical JSON output");
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"{
    "measurements": {"bench_press": 36, "mystery_drill": 3.2},
    "some_unknown_field": "should be ignored"
  }"#;
  let card = run(&Input::from_json(json).unwrap());
  assert_eq!(card.overall_score, 10.0);
}

#[test]
fn malformed_json_gives_clear_error() {
  let err = Input::from_json("{\"measurements\": 42}").unwrap_err();
  assert!(err.to_string().starts_with("json:"), "{}", err);
}

#[test]
fn null_and_sentinels_never_score_zero() {
  let json = r#"{"measurements": {
    "forty_yard": null, "vertical_jump": "--", "bench_press": "N/A", "weight": "heavy"
  }}"#;
  let card = run(&Input::from_json(json).unwrap());
  assert_eq!(card.metrics_present, 0);
  assert!(card.fallback_used);
  assert_eq!(card.overall_score, FALLBACK_OVERALL_SCORE);
  assert_eq!(card.overall_text, "7.16");
}

#[test]
fn explosion_only_overall_is_mean_of_three() {
  let json = r#"{"measurements": {
    "vertical_jump": 44, "broad_jump": "9'2\"", "bench_press": 22
  }}"#;
  let card = run(&Input::from_json(json).unwrap());
  let mean = (10.0 + 4.0 + 22.0 * 10.0 / 36.0) / 3.0;
  assert!((card.overall_score - mean).abs() < 0.005);
  assert_eq!(card.overall_text, "6.70");
  assert_eq!(card.metrics_present, 3);
}

#[test]
fn forty_only_overall_is_the_forty() {
  let card = run(&Input::from_json(r#"{"measurements": {"forty_yard": 4.7}}"#).unwrap());
  assert_eq!(card.overall_score, 5.0);
  assert_eq!(card.metrics_present, 1);
  assert_eq!(card.metric(Metric::TwentyYardSplit).source, Source::Estimated);
}

#[test]
fn card_serializes_absent_as_null() {
  let config = Config {
    estimate_missing_splits: false,
    ..Config::default()
  };
  let card = run_with_config(&Input::default(), &config);
  let v: serde_json::Value = serde_json::to_value(&card).unwrap();
  assert!(v["metrics"][0]["subscore"].is_null());
  assert_eq!(v["metrics"][0]["metric"], "forty_yard");
  assert_eq!(v["metrics"][0]["element_key"], "forty-score");
  assert_eq!(v["composites"][1]["grade_text"], "Speed: N/A");
  assert_eq!(v["rating_label"], "GOOD");
  assert_eq!(v["rating_class"], "good");
}

#[test]
fn rating_scenarios() {
  assert_eq!(classify_rating(3.99).overall_label(), "POOR");
  assert_eq!(classify_rating(4.00).overall_label(), "BELOW AVERAGE");
  assert_eq!(classify_rating(6.99).overall_label(), "AVERAGE");
  assert_eq!(classify_rating(6.99).composite_label(), "OKAY");
  assert_eq!(classify_rating(7.00), Rating::Good);
  assert_eq!(classify_rating(9.00), Rating::Excellent);
}

#[test]
fn aggregate_edge_cases() {
  assert_eq!(composite_grade(&[]), None);
  assert_eq!(composite_grade(&[None, None]), None);
  assert_eq!(overall_score(&[None; 10], FALLBACK_OVERALL_SCORE), 7.16);
}

#[test]
fn broad_jump_round_trip() {
  assert_eq!(parse_feet_inches("9'2\""), Some(110.0));
  assert_eq!(format_feet_inches(110.0), "9'2\"");
}

fn any_metric() -> impl Strategy<Value = Metric> {
  prop::sample::select(Metric::ALL.to_vec())
}

proptest! {
  #[test]
  fn arbitrary_text_never_escapes_range(m in any_metric(), s in ".{0,12}") {
    let mut input = Input::default();
    input.measurements.set(m, s.as_str());
    let card = run(&input);
    for row in &card.metrics {
      if let Some(v) = row.subscore {
        prop_assert!((0.0..=10.0).contains(&v));
      }
    }
    prop_assert!(card.overall_score.is_finite());
  }

  #[test]
  fn missing_is_absent_for_every_metric(m in any_metric()) {
    prop_assert_eq!(compute_subscore(m, None), None);
  }
}
