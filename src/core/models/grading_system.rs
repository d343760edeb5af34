//! Grading system model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default target for the percentage-banded system (a 2:1).
pub const PERCENTAGE_TARGET: f64 = 65.0;

/// Default target for the four-point system (a B average).
pub const FOUR_POINT_TARGET: f64 = 3.0;

/// The convention that governs how a student's grades are reported and classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradingSystem {
    /// Percentage-banded (UK-style) system: averages are 0-100 and map to
    /// honours classifications.
    #[default]
    #[serde(alias = "uk")]
    Percentage,
    /// Four-point (US-style) system: averages are 0.0-4.0 and map to letters.
    #[serde(alias = "us", alias = "gpa")]
    FourPoint,
}

impl GradingSystem {
    /// Every supported system, in display order
    pub const ALL: [Self; 2] = [Self::Percentage, Self::FourPoint];

    /// Human-readable name of the system
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Percentage => "UK System",
            Self::FourPoint => "US System",
        }
    }

    /// Highest grade representable in this system
    #[must_use]
    pub const fn max_grade(self) -> f64 {
        match self {
            Self::Percentage => 100.0,
            Self::FourPoint => 4.0,
        }
    }

    /// Default target grade used when the user has not set one
    #[must_use]
    pub const fn target_grade(self) -> f64 {
        match self {
            Self::Percentage => PERCENTAGE_TARGET,
            Self::FourPoint => FOUR_POINT_TARGET,
        }
    }

    /// Format a grade the way this system is conventionally displayed
    ///
    /// Percentages get one decimal and a `%` sign; four-point values get two
    /// decimals.
    #[must_use]
    pub fn format_grade(self, grade: f64) -> String {
        match self {
            Self::Percentage => format!("{grade:.1}%"),
            Self::FourPoint => format!("{grade:.2}"),
        }
    }

    /// Format an optional grade, rendering an undefined value as `N/A`
    #[must_use]
    pub fn format_optional(self, grade: Option<f64>) -> String {
        grade.map_or_else(|| "N/A".to_string(), |g| self.format_grade(g))
    }
}

impl FromStr for GradingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "uk" => Ok(Self::Percentage),
            "four-point" | "four_point" | "fourpoint" | "gpa" | "us" => Ok(Self::FourPoint),
            _ => Err(format!("Unknown grading system: '{s}'")),
        }
    }
}

impl fmt::Display for GradingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::FourPoint => write!(f, "four-point"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("uk".parse::<GradingSystem>(), Ok(GradingSystem::Percentage));
        assert_eq!(
            "Percentage".parse::<GradingSystem>(),
            Ok(GradingSystem::Percentage)
        );
        assert_eq!("US".parse::<GradingSystem>(), Ok(GradingSystem::FourPoint));
        assert_eq!(
            "four-point".parse::<GradingSystem>(),
            Ok(GradingSystem::FourPoint)
        );
        assert!("ects".parse::<GradingSystem>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for system in GradingSystem::ALL {
            assert_eq!(system.to_string().parse::<GradingSystem>(), Ok(system));
        }
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(GradingSystem::Percentage.format_grade(65.0), "65.0%");
        assert_eq!(GradingSystem::FourPoint.format_grade(3.333), "3.33");
        assert_eq!(GradingSystem::FourPoint.format_optional(None), "N/A");
    }

    #[test]
    fn test_targets() {
        assert!((GradingSystem::Percentage.target_grade() - 65.0).abs() < f64::EPSILON);
        assert!((GradingSystem::FourPoint.target_grade() - 3.0).abs() < f64::EPSILON);
    }
}
