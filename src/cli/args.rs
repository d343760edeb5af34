//! CLI argument definitions for `GradeTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_tracker::config::ConfigOverrides;
use grade_tracker::logger::Level;
use grade_tracker::models::GradingSystem;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// CLI grading system argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SystemArg {
    /// Percentage-banded (UK) system
    #[value(alias = "uk")]
    Percentage,
    /// Four-point (US) system
    #[value(alias = "us", alias = "gpa")]
    FourPoint,
}

impl From<SystemArg> for GradingSystem {
    fn from(arg: SystemArg) -> Self {
        match arg {
            SystemArg::Percentage => Self::Percentage,
            SystemArg::FourPoint => Self::FourPoint,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `system`, `first_class`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print a summary of a student record.
    Summary {
        /// Path to a student record (TOML)
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },
    /// Write a report for a student record.
    ///
    /// The report goes to the configured reports directory unless --output is given.
    Report {
        /// Path to a student record (TOML)
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Output file path (optional; defaults to `reports_dir/<record>_report.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,
    },
    /// Show the score needed on a module's remaining work to reach a target.
    Target {
        /// Path to a student record (TOML)
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Module code (case-insensitive)
        #[arg(short, long, value_name = "CODE")]
        module: String,

        /// Target grade in the record's grading system (defaults to the configured target)
        #[arg(short, long, value_name = "GRADE")]
        target: Option<f64>,
    },
    /// Convert a grade between grading systems.
    Convert {
        /// Grade to convert
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,

        /// System the value is expressed in (defaults to the configured system)
        #[arg(long, value_enum)]
        from: Option<SystemArg>,

        /// System to convert to (defaults to the other system)
        #[arg(long, value_enum)]
        to: Option<SystemArg>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetracker",
    about = "GradeTracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the default grading system
    #[arg(long = "system", value_enum)]
    pub system: Option<SystemArg>,

    /// Override config records directory
    #[arg(long = "records-dir", value_name = "DIR")]
    pub records_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            system: self.system.map(|s| GradingSystem::from(s).to_string()),
            records_dir: self
                .records_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
