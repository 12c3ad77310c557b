//! Type definitions for baseline emissions and the scenario catalog.
//!
//! The config types mirror `reference_data.toml` one to one. The validated
//! types are what the model consumes; they can only be built through
//! constructors that enforce the reference-data invariants.

use serde::{Deserialize, Serialize};

use crate::error::ReferenceDataError;
use crate::scenario::{Percentage, ScenarioKind};

use super::validation;

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from reference_data.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDataConfig {
    /// Baseline categories in display order
    pub categories: Vec<CategoryConfig>,
    /// One entry per scenario kind
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    /// Annual emissions before any scenario, in tCO2e
    pub baseline: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub kind: ScenarioKind,
    pub name: String,
    pub description: String,
    /// Category this scenario reduces (None = total only)
    #[serde(default)]
    pub affected_category: Option<String>,
    /// Reduction at full effect, in tCO2e
    pub max_reduction: f64,
    pub cost: CostTier,
    pub timeline: String,
    /// Starting slider value for adjustable scenarios
    #[serde(default)]
    pub default_percentage: Option<f64>,
    #[serde(default)]
    pub adjustment_label: Option<String>,
    #[serde(default)]
    pub adjustment_hint: Option<String>,
}

/// Relative implementation cost of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    pub fn label(self) -> &'static str {
        match self {
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
        }
    }
}

// =============================================================================
// VALIDATED TYPES (consumed by the model)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionCategory {
    pub name: String,
    pub baseline: f64,
}

impl EmissionCategory {
    pub fn new(name: impl Into<String>, baseline: f64) -> Self {
        Self {
            name: name.into(),
            baseline,
        }
    }
}

/// Ordered baseline breakdown. The total is always derived from the
/// categories, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    categories: Vec<EmissionCategory>,
}

impl Baseline {
    /// Build a baseline, rejecting empty or duplicate names and negative or
    /// non-finite values.
    pub fn new(categories: Vec<EmissionCategory>) -> Result<Self, ReferenceDataError> {
        validation::validate_categories(&categories)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[EmissionCategory] {
        &self.categories
    }

    pub fn total_emissions(&self) -> f64 {
        self.categories.iter().map(|c| c.baseline).sum()
    }

    pub fn get(&self, name: &str) -> Option<&EmissionCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// A reduction scenario with its presentation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDefinition {
    pub kind: ScenarioKind,
    pub name: String,
    pub description: String,
    pub affected_category: Option<String>,
    pub max_reduction: f64,
    pub cost: CostTier,
    pub timeline: String,
    /// Slider value used until the user moves the slider. Always 100% for
    /// non-adjustable scenarios.
    pub default_percentage: Percentage,
    pub adjustment_label: Option<String>,
    pub adjustment_hint: Option<String>,
}

impl ScenarioDefinition {
    /// A definition with no presentation metadata and a 100% default.
    pub fn new(kind: ScenarioKind, affected_category: Option<&str>, max_reduction: f64) -> Self {
        Self {
            kind,
            name: kind.id().to_string(),
            description: String::new(),
            affected_category: affected_category.map(str::to_string),
            max_reduction,
            cost: CostTier::Medium,
            timeline: String::new(),
            default_percentage: Percentage::FULL,
            adjustment_label: None,
            adjustment_hint: None,
        }
    }

    pub fn adjustable(&self) -> bool {
        self.kind.adjustable().is_some()
    }
}

/// Exactly one definition per `ScenarioKind`, stored in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCatalog {
    definitions: Vec<ScenarioDefinition>,
}

impl ScenarioCatalog {
    fn new(
        definitions: Vec<ScenarioDefinition>,
        baseline: &Baseline,
    ) -> Result<Self, ReferenceDataError> {
        let definitions = validation::order_scenarios(definitions, baseline)?;
        Ok(Self { definitions })
    }

    pub fn get(&self, kind: ScenarioKind) -> &ScenarioDefinition {
        &self.definitions[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioDefinition> {
        self.definitions.iter()
    }
}

/// Immutable reference data handed to the model at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub baseline: Baseline,
    pub scenarios: ScenarioCatalog,
}

impl ReferenceData {
    /// Pair a baseline with its scenarios. Every scenario kind must be
    /// defined exactly once and may only reference categories of `baseline`.
    pub fn new(
        baseline: Baseline,
        scenarios: Vec<ScenarioDefinition>,
    ) -> Result<Self, ReferenceDataError> {
        let scenarios = ScenarioCatalog::new(scenarios, &baseline)?;
        Ok(Self {
            baseline,
            scenarios,
        })
    }
}
