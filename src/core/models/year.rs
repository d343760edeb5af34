//! Academic year model

use super::Module;
use serde::{Deserialize, Serialize};

/// One year of study and the modules taken in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYear {
    /// Year name (e.g., "Year 2")
    pub name: String,

    /// Level of study, used to order years
    #[serde(default)]
    pub level: u32,

    /// Contribution to the overall average; 0 means the year does not count
    pub weighting_multiplier: f64,

    /// Whether this is the year currently being studied
    #[serde(default)]
    pub is_active: bool,

    /// Modules taken this year
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl AcademicYear {
    /// Create a new academic year with no modules
    ///
    /// # Arguments
    /// * `name` - Year name
    /// * `level` - Level of study
    /// * `weighting_multiplier` - Weight of the year in the overall average
    #[must_use]
    pub const fn new(name: String, level: u32, weighting_multiplier: f64) -> Self {
        Self {
            name,
            level,
            weighting_multiplier,
            is_active: false,
            modules: Vec::new(),
        }
    }

    /// Add a module
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Builder-style variant of [`add_module`](Self::add_module)
    #[must_use]
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Look up a module by code (case-insensitive)
    #[must_use]
    pub fn get_module(&self, code: &str) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(code))
    }

    /// Whether the year counts toward the overall average
    #[must_use]
    pub fn counts_toward_overall(&self) -> bool {
        self.weighting_multiplier > 0.0
    }
}
