//! Tests for the Folio configuration system.

use std::sync::Mutex;

use folio_core::config::{ConfigOverrides, FolioConfig};
use folio_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all FOLIO_ env vars to prevent cross-test contamination.
fn clear_folio_env_vars() {
    for key in [
        "FOLIO_TOP_N",
        "FOLIO_MIN_RATINGS",
        "FOLIO_MIN_SUPPORT",
        "FOLIO_MIN_LIFT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_compiled_defaults() {
    let config = FolioConfig::from_toml("").unwrap();
    let r = &config.recommend;
    assert_eq!(r.effective_top_n(), 10);
    assert_eq!(r.effective_min_ratings(), 8);
    assert!((r.effective_min_support() - 0.05).abs() < f64::EPSILON);
    assert!((r.effective_min_lift() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn layered_resolution_prefers_overrides_then_env_then_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_folio_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("folio.toml"),
        r#"
[recommend]
top_n = 5
min_ratings = 3
min_lift = 1.5
"#,
    )
    .unwrap();

    std::env::set_var("FOLIO_MIN_RATINGS", "4");

    let overrides = ConfigOverrides {
        min_lift: Some(3.0),
        ..Default::default()
    };
    let config = FolioConfig::load(dir.path(), Some(&overrides)).unwrap();
    clear_folio_env_vars();

    let r = &config.recommend;
    assert_eq!(r.effective_top_n(), 5, "project file");
    assert_eq!(r.effective_min_ratings(), 4, "env beats project file");
    assert!((r.effective_min_lift() - 3.0).abs() < f64::EPSILON, "override beats all");
    assert!((r.effective_min_support() - 0.05).abs() < f64::EPSILON, "default");
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_folio_env_vars();

    let dir = tempdir();
    let config = FolioConfig::load(dir.path(), None).unwrap();
    assert_eq!(config, FolioConfig::default());
}

#[test]
fn invalid_toml_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_folio_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("folio.toml"), "[recommend\ntop_n = ").unwrap();
    let err = FolioConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("folio.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn lift_must_exceed_one() {
    let config = FolioConfig::from_toml("[recommend]\nmin_lift = 1.0\n").unwrap();
    let err = FolioConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "recommend.min_lift"));
}

#[test]
fn support_must_be_a_fraction() {
    for bad in ["0.0", "1.5"] {
        let config = FolioConfig::from_toml(&format!("[recommend]\nmin_support = {bad}\n")).unwrap();
        assert!(FolioConfig::validate(&config).is_err(), "min_support = {bad}");
    }
}

#[test]
fn zero_top_n_and_zero_min_ratings_are_rejected() {
    let config = FolioConfig::from_toml("[recommend]\ntop_n = 0\n").unwrap();
    assert!(FolioConfig::validate(&config).is_err());
    let config = FolioConfig::from_toml("[recommend]\nmin_ratings = 0\n").unwrap();
    assert!(FolioConfig::validate(&config).is_err());
}

#[test]
fn toml_roundtrip_preserves_values() {
    let mut config = FolioConfig::default();
    FolioConfig::apply_overrides(
        &mut config,
        &ConfigOverrides {
            top_n: Some(20),
            min_support: Some(0.1),
            ..Default::default()
        },
    );
    let toml_str = config.to_toml().unwrap();
    let roundtripped = FolioConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}
