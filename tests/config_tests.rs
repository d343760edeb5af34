//! Integration tests for configuration management

use grade_tracker::config::{Config, ConfigOverrides};
use grade_tracker::models::GradingSystem;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.records_dir.is_empty(),
        "Default records_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.grading_system(), Ok(GradingSystem::Percentage));
    assert!(config.classification_scheme().is_ok());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
system = "four-point"
percentage_target = 60.0
four_point_target = 3.3

[classification]
first_class = 72.0

[paths]
records_dir = "./records"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading_system(), Ok(GradingSystem::FourPoint));
    assert!((config.target_for(GradingSystem::Percentage) - 60.0).abs() < f64::EPSILON);
    assert!((config.target_for(GradingSystem::FourPoint) - 3.3).abs() < f64::EPSILON);
    assert_eq!(config.classification.first_class, Some(72.0));
    assert_eq!(config.classification.upper_second, None);
    assert_eq!(config.paths.records_dir, "./records");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.grading.system, "");
    assert_eq!(config.grading_system(), Ok(GradingSystem::Percentage));
    assert!((config.target_for(GradingSystem::Percentage) - 65.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADE_TRACKER/test.log"

[paths]
records_dir = "$GRADE_TRACKER/records"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gradetracker"));
    assert!(!config.logging.file.contains("$GRADE_TRACKER"));
    assert!(config.paths.records_dir.ends_with("records"));
    assert!(!config.paths.records_dir.contains("$GRADE_TRACKER"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("system", "gpa").expect("Failed to set system");
    assert_eq!(config.get("system").unwrap(), "four-point");

    config
        .set("four-point-target", "3.5")
        .expect("Failed to set target");
    assert_eq!(config.get("four_point_target").unwrap(), "3.5");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "trace").is_err());
    assert!(config.set("system", "ects").is_err());
    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.set("percentage_target", "NaN").is_err());
    assert!(config.set("first_class", "high").is_err());
}

#[test]
fn test_config_thresholds_must_stay_descending() {
    let mut config = Config::from_defaults();

    assert!(config.set("upper_second", "75").is_err());
    assert_eq!(config.classification.upper_second, Some(60.0));

    config.set("first_class", "68").expect("68 is above 60");
    let scheme = config.classification_scheme().unwrap();
    assert!((scheme.thresholds().first_class - 68.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("first_class", "75").expect("Failed to set first_class");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("first_class", &defaults)
        .expect("Failed to unset first_class");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.classification.first_class, Some(70.0));

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("third_class", "35").expect("Failed to set third_class");

    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.classification.third_class, Some(35.0));
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        system: Some("four-point".to_string()),
        records_dir: Some("./custom_records".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading_system(), Ok(GradingSystem::FourPoint));
    assert_eq!(config.paths.records_dir, "./custom_records");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let reports_dir = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, reports_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[classification]"));
    assert!(display_str.contains("[paths]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("first_class = 70"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
records_dir = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.classification.first_class, Some(70.0));
    assert_eq!(config.grading.four_point_target, Some(3.0));
    assert!(!config.paths.records_dir.is_empty());
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[classification]
first_class = 75.0
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.classification.first_class, Some(75.0));
}

#[test]
fn test_get_gradetracker_dir() {
    let dir = Config::get_gradetracker_dir();

    assert!(dir.to_string_lossy().contains("gradetracker"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
