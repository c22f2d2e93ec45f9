//! Tests for validation options.

use dyom_validate::options::{MAX_CARS, MAX_ROUTE_POINTS};
use dyom_validate::{Limits, OptionsError, ValidationOptions};

#[test]
fn defaults_match_engine_caps() {
    let options = ValidationOptions::default();
    assert_eq!(options.limits.objectives, 100);
    assert_eq!(options.limits.actors, 100);
    assert_eq!(options.limits.cars, MAX_CARS);
    assert_eq!(options.limits.pickups, 50);
    assert_eq!(options.limits.objects, 100);
    assert_eq!(options.limits.route_points, MAX_ROUTE_POINTS);
    assert_eq!(options.warn_ratio, 0.9);
}

#[test]
fn empty_toml_gives_defaults() {
    let options = ValidationOptions::from_toml_str("").expect("parse empty");
    assert_eq!(options, ValidationOptions::default());
}

#[test]
fn toml_overrides_only_named_keys() {
    let options = ValidationOptions::from_toml_str(
        r#"
warn_ratio = 0.75

[limits]
actors = 60
route_points = 200
"#,
    )
    .expect("parse options");
    assert_eq!(options.warn_ratio, 0.75);
    assert_eq!(
        options.limits,
        Limits {
            actors: 60,
            route_points: 200,
            ..Limits::default()
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let error = ValidationOptions::from_toml_str("[limits]\nhelicopters = 3\n")
        .expect_err("unknown limit");
    assert!(matches!(error, OptionsError::Toml(_)));
}

#[test]
fn warn_ratio_must_be_a_fraction() {
    for source in ["warn_ratio = 0.0", "warn_ratio = 1.5", "warn_ratio = -0.2"] {
        let error = ValidationOptions::from_toml_str(source).expect_err("bad ratio");
        assert!(matches!(error, OptionsError::WarnRatio { .. }), "{source}");
    }
    assert!(ValidationOptions::from_toml_str("warn_ratio = 1.0").is_ok());
}

#[test]
fn approaching_band_is_strict() {
    let options = ValidationOptions::default();
    assert!(!options.approaching(90, 100));
    assert!(options.approaching(91, 100));
    assert!(options.approaching(99, 100));
    assert!(!options.approaching(100, 100));
    assert!(!options.approaching(101, 100));
}
