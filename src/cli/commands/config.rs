//! Config command handler

use crate::args::ConfigSubcommand;
use grade_tracker::config::Config;
use grade_tracker::models::GradingSystem;
use std::io::{self, Write};

const THRESHOLD_KEYS: [&str; 4] = ["first_class", "upper_second", "lower_second", "third_class"];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| {
                println!("✓ Set {key} = {value}");
                show_bands_if_threshold(config, &key);
            }),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| {
                println!("✓ Reset {key} to default");
                show_bands_if_threshold(config, &key);
            }),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("# {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

/// Print the honours bands after a threshold change
fn show_bands_if_threshold(config: &Config, key: &str) {
    if !THRESHOLD_KEYS.contains(&key.replace('-', "_").as_str()) {
        return;
    }
    if let Ok(scheme) = config.classification_scheme() {
        println!("\nHonours bands:");
        for band in scheme.table(GradingSystem::Percentage).bands() {
            println!("  ≥ {:>5.1}  {}", band.lower_bound, band.label);
        }
    }
}

/// Delete the config file after confirmation
fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset config to defaults? Custom targets and thresholds will be lost. (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
