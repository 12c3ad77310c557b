use thiserror::Error;

use crate::scenario::ScenarioKind;

/// Problems found while loading or validating reference data.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Reference data parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Invalid baseline for {name}: {value}")]
    InvalidBaseline { name: String, value: f64 },

    #[error("Invalid max reduction for {kind}: {value}")]
    InvalidReduction { kind: ScenarioKind, value: f64 },

    #[error("Sum of {0} overflows")]
    NonFiniteTotal(&'static str),

    #[error("Scenario {0} is not defined")]
    MissingScenario(ScenarioKind),

    #[error("Scenario {0} is defined more than once")]
    DuplicateScenario(ScenarioKind),

    #[error("Scenario {kind} affects unknown category {category}")]
    UnknownCategory { kind: ScenarioKind, category: String },

    #[error("Scenario {0} is not adjustable but sets a default percentage")]
    UnexpectedDefaultPercentage(ScenarioKind),

    #[error("Default percentage for {kind} must be within 0-100, got {value}")]
    InvalidDefaultPercentage { kind: ScenarioKind, value: f64 },
}
