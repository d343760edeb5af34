//! Classification engine
//!
//! Maps a numeric average to a named band under the student's grading
//! system. Every band is inclusive at its lower edge: with the canonical
//! honours table an average of exactly 70.0 is a First, 69.999 is a 2:1.
//!
//! Thresholds live in an immutable [`ClassificationScheme`] that callers
//! build once (usually from configuration) and pass in. The free functions
//! use the canonical scheme.

use crate::core::models::GradingSystem;
use std::fmt;
use std::sync::LazyLock;

/// Canonical honours classification labels, highest first
pub const HONOURS_LABELS: [&str; 4] = [
    "First Class",
    "Upper Second (2:1)",
    "Lower Second (2:2)",
    "Third Class",
];

/// Short honours labels, highest first
pub const HONOURS_SHORT_LABELS: [&str; 4] = ["1st", "2:1", "2:2", "3rd"];

/// Label below the lowest honours band
pub const HONOURS_FAIL: &str = "Fail";

/// Canonical four-point letter bands, highest first
pub const LETTER_BANDS: [(f64, &str); 10] = [
    (3.7, "A"),
    (3.3, "A-"),
    (3.0, "B+"),
    (2.7, "B"),
    (2.3, "B-"),
    (2.0, "C+"),
    (1.7, "C"),
    (1.3, "C-"),
    (1.0, "D+"),
    (0.67, "D"),
];

/// Letter below the lowest four-point band
pub const LETTER_FAIL: &str = "F";

static CANONICAL: LazyLock<ClassificationScheme> = LazyLock::new(ClassificationScheme::default);

/// One band: values at or above `lower_bound` (and below the next band up)
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Inclusive lower edge
    pub lower_bound: f64,
    /// Label reported for the band
    pub label: String,
}

/// Ordered set of bands with a fallback label for values below all of them
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<Band>,
    fallback: String,
}

impl BandTable {
    /// Build a table from `(lower_bound, label)` pairs given highest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or the bounds are not
    /// strictly descending.
    pub fn new<I, S>(bands: I, fallback: &str) -> Result<Self, String>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let bands: Vec<Band> = bands
            .into_iter()
            .map(|(lower_bound, label)| Band {
                lower_bound,
                label: label.into(),
            })
            .collect();

        if let Some(bad) = bands.iter().find(|b| !b.lower_bound.is_finite()) {
            return Err(format!("Band '{}' has a non-finite lower bound", bad.label));
        }
        for pair in bands.windows(2) {
            if pair[1].lower_bound >= pair[0].lower_bound {
                return Err(format!(
                    "Band '{}' ({}) must be below band '{}' ({})",
                    pair[1].label, pair[1].lower_bound, pair[0].label, pair[0].lower_bound
                ));
            }
        }

        Ok(Self {
            bands,
            fallback: fallback.to_string(),
        })
    }

    /// Label for a value: the first band whose lower bound it reaches
    #[must_use]
    pub fn classify(&self, value: f64) -> &str {
        self.bands
            .iter()
            .find(|b| value >= b.lower_bound)
            .map_or(self.fallback.as_str(), |b| b.label.as_str())
    }

    /// Bands, highest first
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Label used below every band
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Lower bounds of the four honours bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HonoursThresholds {
    /// First Class lower bound
    pub first_class: f64,
    /// Upper Second lower bound
    pub upper_second: f64,
    /// Lower Second lower bound
    pub lower_second: f64,
    /// Third Class lower bound (the pass mark)
    pub third_class: f64,
}

impl Default for HonoursThresholds {
    fn default() -> Self {
        Self {
            first_class: 70.0,
            upper_second: 60.0,
            lower_second: 50.0,
            third_class: 40.0,
        }
    }
}

impl HonoursThresholds {
    const fn as_array(&self) -> [f64; 4] {
        [
            self.first_class,
            self.upper_second,
            self.lower_second,
            self.third_class,
        ]
    }
}

/// Result of classifying an average
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The average falls in a named band
    Classified(String),
    /// There is no average yet
    NotYetClassified,
}

impl Classification {
    /// The band label, if classified
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Classified(label) => Some(label.as_str()),
            Self::NotYetClassified => None,
        }
    }

    /// Whether a band was assigned
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(label) => f.write_str(label),
            Self::NotYetClassified => f.write_str("No classification yet"),
        }
    }
}

/// Immutable set of thresholds for both grading systems
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationScheme {
    thresholds: HonoursThresholds,
    honours: BandTable,
    honours_short: BandTable,
    letters: BandTable,
}

impl Default for ClassificationScheme {
    fn default() -> Self {
        Self::with_honours_thresholds(HonoursThresholds::default())
            .expect("canonical honours thresholds are descending")
    }
}

impl ClassificationScheme {
    /// Build a scheme with custom honours thresholds and the canonical
    /// four-point letter bands.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are not finite and strictly
    /// descending.
    pub fn with_honours_thresholds(thresholds: HonoursThresholds) -> Result<Self, String> {
        let bounds = thresholds.as_array();
        let honours = BandTable::new(bounds.into_iter().zip(HONOURS_LABELS), HONOURS_FAIL)?;
        let honours_short =
            BandTable::new(bounds.into_iter().zip(HONOURS_SHORT_LABELS), HONOURS_FAIL)?;
        let letters = BandTable::new(LETTER_BANDS, LETTER_FAIL)?;

        Ok(Self {
            thresholds,
            honours,
            honours_short,
            letters,
        })
    }

    /// The canonical scheme
    #[must_use]
    pub fn canonical() -> &'static Self {
        &CANONICAL
    }

    /// Honours thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &HonoursThresholds {
        &self.thresholds
    }

    /// Band table used for a grading system
    #[must_use]
    pub const fn table(&self, system: GradingSystem) -> &BandTable {
        match system {
            GradingSystem::Percentage => &self.honours,
            GradingSystem::FourPoint => &self.letters,
        }
    }

    /// Classify an average. An undefined or non-finite average is never
    /// coerced into the lowest band.
    #[must_use]
    pub fn classify(&self, average: Option<f64>, system: GradingSystem) -> Classification {
        match average {
            Some(avg) if avg.is_finite() => {
                Classification::Classified(self.table(system).classify(avg).to_string())
            }
            _ => Classification::NotYetClassified,
        }
    }

    /// Short honours label for a percentage (`1st`, `2:1`, `2:2`, `3rd`, `Fail`)
    #[must_use]
    pub fn short_label(&self, percentage: f64) -> &str {
        self.honours_short.classify(percentage)
    }

    /// Whether a grade reaches the top band of its system
    #[must_use]
    pub fn is_excellent(&self, grade: f64, system: GradingSystem) -> bool {
        self.table(system)
            .bands()
            .first()
            .is_some_and(|top| grade >= top.lower_bound)
    }
}

/// Classify with the canonical scheme
#[must_use]
pub fn classify(average: Option<f64>, system: GradingSystem) -> Classification {
    ClassificationScheme::canonical().classify(average, system)
}

/// Honours classification of a percentage with the canonical scheme
#[must_use]
pub fn honours_classification(percentage: f64) -> &'static str {
    ClassificationScheme::canonical().honours.classify(percentage)
}

/// Letter grade of a four-point value with the canonical scheme
#[must_use]
pub fn letter_grade(four_point: f64) -> &'static str {
    ClassificationScheme::canonical().letters.classify(four_point)
}

/// School-style letter for a percentage (`A*` at 85 and above down to `F`
/// below 40)
#[must_use]
pub fn percentage_letter_grade(percentage: f64) -> &'static str {
    match percentage {
        p if p >= 85.0 => "A*",
        p if p >= 70.0 => "A",
        p if p >= 60.0 => "B",
        p if p >= 50.0 => "C",
        p if p >= 40.0 => "D",
        _ => "F",
    }
}
