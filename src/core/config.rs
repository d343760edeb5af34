//! Configuration module for `GradeTracker`

use crate::core::classification::{ClassificationScheme, HonoursThresholds};
use crate::core::models::GradingSystem;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$GRADE_TRACKER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Grading system for records without one, and the `convert` source
    /// (percentage, four-point)
    #[serde(default)]
    pub system: String,
    /// Target average under the percentage system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_target: Option<f64>,
    /// Target average under the four-point system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_point_target: Option<f64>,
}

/// Honours classification lower bounds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// First Class lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_class: Option<f64>,
    /// Upper Second lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_second: Option<f64>,
    /// Lower Second lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_second: Option<f64>,
    /// Third Class lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_class: Option<f64>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for student record files
    #[serde(default)]
    pub records_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Classification thresholds
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override grading system
    pub system: Option<String>,
    /// Override records directory
    pub records_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn fill_missing(value: &mut Option<f64>, default: Option<f64>) -> bool {
    if value.is_none() && default.is_some() {
        *value = default;
        true
    } else {
        false
    }
}

fn fill_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid number for '{key}': '{value}'"))
}

fn display_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Config {
    /// Get the `$GRADE_TRACKER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradetracker`
    /// - macOS: `~/Library/Application Support/gradetracker`
    /// - Windows: `%APPDATA%\gradetracker`
    #[must_use]
    pub fn get_gradetracker_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradetracker")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fields that are empty (strings) or absent (numbers) take the default
    /// value. Existing user settings are never replaced.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let results = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.grading.system, &defaults.grading.system),
            fill_missing(
                &mut self.grading.percentage_target,
                defaults.grading.percentage_target,
            ),
            fill_missing(
                &mut self.grading.four_point_target,
                defaults.grading.four_point_target,
            ),
            fill_missing(
                &mut self.classification.first_class,
                defaults.classification.first_class,
            ),
            fill_missing(
                &mut self.classification.upper_second,
                defaults.classification.upper_second,
            ),
            fill_missing(
                &mut self.classification.lower_second,
                defaults.classification.lower_second,
            ),
            fill_missing(
                &mut self.classification.third_class,
                defaults.classification.third_class,
            ),
            fill_empty(&mut self.paths.records_dir, &defaults.paths.records_dir),
            fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ];
        results.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values. Nothing is persisted.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(system) = &overrides.system {
            self.grading.system.clone_from(system);
        }
        if let Some(records_dir) = &overrides.records_dir {
            self.paths.records_dir.clone_from(records_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gradetracker_dir`](Self::get_gradetracker_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradetracker_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADE_TRACKER` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gradetracker_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$GRADE_TRACKER` in path values. Missing fields use their
    /// serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.records_dir = Self::expand_variables(&config.paths.records_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the file exists: load it, merge missing fields from defaults and save
    ///   the merged result.
    /// - On first run: create the directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `system`,
    /// `percentage_target`, `four_point_target`, `first_class`,
    /// `upper_second`, `lower_second`, `third_class`, `records_dir`,
    /// `reports_dir`. Dashes are accepted in place of underscores.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string (empty when unset)
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "system" => Some(self.grading.system.clone()),
            "percentage_target" => Some(display_number(self.grading.percentage_target)),
            "four_point_target" => Some(display_number(self.grading.four_point_target)),
            "first_class" => Some(display_number(self.classification.first_class)),
            "upper_second" => Some(display_number(self.classification.upper_second)),
            "lower_second" => Some(display_number(self.classification.lower_second)),
            "third_class" => Some(display_number(self.classification.third_class)),
            "records_dir" => Some(self.paths.records_dir.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated: `level` must be a known log level, `system` a
    /// known grading system, numbers must be finite, and classification
    /// thresholds must stay strictly descending.
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let key = key.replace('-', "_");
        match key.as_str() {
            "level" => {
                let level: Level = value.parse()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "system" => {
                let system: GradingSystem = value.parse()?;
                self.grading.system = system.to_string();
            }
            "percentage_target" => {
                self.grading.percentage_target = Some(parse_number(&key, value)?);
            }
            "four_point_target" => {
                self.grading.four_point_target = Some(parse_number(&key, value)?);
            }
            "first_class" | "upper_second" | "lower_second" | "third_class" => {
                let number = parse_number(&key, value)?;
                let mut candidate = self.classification.clone();
                match key.as_str() {
                    "first_class" => candidate.first_class = Some(number),
                    "upper_second" => candidate.upper_second = Some(number),
                    "lower_second" => candidate.lower_second = Some(number),
                    _ => candidate.third_class = Some(number),
                }
                ClassificationScheme::with_honours_thresholds(candidate.thresholds())?;
                self.classification = candidate;
            }
            "records_dir" => self.paths.records_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "system" => self.grading.system.clone_from(&defaults.grading.system),
            "percentage_target" => {
                self.grading.percentage_target = defaults.grading.percentage_target;
            }
            "four_point_target" => {
                self.grading.four_point_target = defaults.grading.four_point_target;
            }
            "first_class" => {
                self.classification.first_class = defaults.classification.first_class;
            }
            "upper_second" => {
                self.classification.upper_second = defaults.classification.upper_second;
            }
            "lower_second" => {
                self.classification.lower_second = defaults.classification.lower_second;
            }
            "third_class" => {
                self.classification.third_class = defaults.classification.third_class;
            }
            "records_dir" => self.paths.records_dir.clone_from(&defaults.paths.records_dir),
            "reports_dir" => self.paths.reports_dir.clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Configured default grading system (percentage when unset)
    ///
    /// # Errors
    /// Returns an error if the configured value is not a known system.
    pub fn grading_system(&self) -> Result<GradingSystem, String> {
        if self.grading.system.is_empty() {
            Ok(GradingSystem::default())
        } else {
            self.grading.system.parse()
        }
    }

    /// Target average for a grading system, falling back to the system default
    #[must_use]
    pub fn target_for(&self, system: GradingSystem) -> f64 {
        let configured = match system {
            GradingSystem::Percentage => self.grading.percentage_target,
            GradingSystem::FourPoint => self.grading.four_point_target,
        };
        configured.unwrap_or_else(|| system.target_grade())
    }

    /// Build the classification scheme from the configured thresholds
    ///
    /// # Errors
    /// Returns an error if the thresholds are not strictly descending.
    pub fn classification_scheme(&self) -> Result<ClassificationScheme, String> {
        ClassificationScheme::with_honours_thresholds(self.classification.thresholds())
    }
}

impl ClassificationConfig {
    /// Thresholds with canonical values for anything unset
    #[must_use]
    pub fn thresholds(&self) -> HonoursThresholds {
        let canonical = HonoursThresholds::default();
        HonoursThresholds {
            first_class: self.first_class.unwrap_or(canonical.first_class),
            upper_second: self.upper_second.unwrap_or(canonical.upper_second),
            lower_second: self.lower_second.unwrap_or(canonical.lower_second),
            third_class: self.third_class.unwrap_or(canonical.third_class),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  system = \"{}\"", self.grading.system)?;
        writeln!(
            f,
            "  percentage_target = {}",
            display_number(self.grading.percentage_target)
        )?;
        writeln!(
            f,
            "  four_point_target = {}",
            display_number(self.grading.four_point_target)
        )?;

        let thresholds = self.classification.thresholds();
        writeln!(f, "\n[classification]")?;
        writeln!(f, "  first_class = {}", thresholds.first_class)?;
        writeln!(f, "  upper_second = {}", thresholds.upper_second)?;
        writeln!(f, "  lower_second = {}", thresholds.lower_second)?;
        writeln!(f, "  third_class = {}", thresholds.third_class)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  records_dir = \"{}\"", self.paths.records_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
