use std::collections::HashSet;

use crate::error::ReferenceDataError;
use crate::scenario::{Percentage, ScenarioKind};

use super::types::{
    Baseline, EmissionCategory, ReferenceData, ReferenceDataConfig, ScenarioConfig,
    ScenarioDefinition,
};

/// Category names must be non-empty and unique; baselines finite and >= 0,
/// with a finite total.
pub(super) fn validate_categories(
    categories: &[EmissionCategory],
) -> Result<(), ReferenceDataError> {
    let mut seen = HashSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(ReferenceDataError::EmptyCategoryName);
        }
        if !seen.insert(category.name.as_str()) {
            return Err(ReferenceDataError::DuplicateCategory(category.name.clone()));
        }
        if !is_valid_amount(category.baseline) {
            return Err(ReferenceDataError::InvalidBaseline {
                name: category.name.clone(),
                value: category.baseline,
            });
        }
    }
    if !categories.iter().map(|c| c.baseline).sum::<f64>().is_finite() {
        return Err(ReferenceDataError::NonFiniteTotal("baselines"));
    }
    Ok(())
}

/// Check each definition against `baseline` and return them in
/// `ScenarioKind::ALL` order. The max reductions must have a finite sum.
pub(super) fn order_scenarios(
    definitions: Vec<ScenarioDefinition>,
    baseline: &Baseline,
) -> Result<Vec<ScenarioDefinition>, ReferenceDataError> {
    let mut slots: Vec<Option<ScenarioDefinition>> = vec![None; ScenarioKind::ALL.len()];

    for def in definitions {
        if !is_valid_amount(def.max_reduction) {
            return Err(ReferenceDataError::InvalidReduction {
                kind: def.kind,
                value: def.max_reduction,
            });
        }
        if let Some(category) = &def.affected_category {
            if baseline.get(category).is_none() {
                return Err(ReferenceDataError::UnknownCategory {
                    kind: def.kind,
                    category: category.clone(),
                });
            }
        }

        let slot = &mut slots[def.kind.index()];
        if slot.is_some() {
            return Err(ReferenceDataError::DuplicateScenario(def.kind));
        }
        *slot = Some(def);
    }

    let max_total: f64 = slots.iter().flatten().map(|d| d.max_reduction).sum();
    if !max_total.is_finite() {
        return Err(ReferenceDataError::NonFiniteTotal("max reductions"));
    }

    ScenarioKind::ALL
        .iter()
        .zip(slots)
        .map(|(kind, slot)| slot.ok_or(ReferenceDataError::MissingScenario(*kind)))
        .collect()
}

/// Convert parsed TOML into validated reference data.
pub(super) fn from_config(
    config: ReferenceDataConfig,
) -> Result<ReferenceData, ReferenceDataError> {
    let categories = config
        .categories
        .into_iter()
        .map(|c| EmissionCategory::new(c.name, c.baseline))
        .collect();
    let baseline = Baseline::new(categories)?;

    let scenarios = config
        .scenarios
        .into_iter()
        .map(scenario_from_config)
        .collect::<Result<Vec<_>, _>>()?;

    ReferenceData::new(baseline, scenarios)
}

fn scenario_from_config(config: ScenarioConfig) -> Result<ScenarioDefinition, ReferenceDataError> {
    let default_percentage = match (config.kind.adjustable(), config.default_percentage) {
        (_, None) => Percentage::FULL,
        (None, Some(_)) => {
            return Err(ReferenceDataError::UnexpectedDefaultPercentage(config.kind));
        }
        (Some(_), Some(value)) => {
            // Config values are rejected rather than clamped like slider input
            if !(0.0..=100.0).contains(&value) {
                return Err(ReferenceDataError::InvalidDefaultPercentage {
                    kind: config.kind,
                    value,
                });
            }
            Percentage::new(value)
        }
    };

    Ok(ScenarioDefinition {
        kind: config.kind,
        name: config.name,
        description: config.description,
        affected_category: config.affected_category,
        max_reduction: config.max_reduction,
        cost: config.cost,
        timeline: config.timeline,
        default_percentage,
        adjustment_label: config.adjustment_label,
        adjustment_hint: config.adjustment_hint,
    })
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
