//! TOML loading for baseline emissions and the scenario catalog.
//!
//! Provides two loading methods:
//! - `default_reference_data()` - Parses the data compiled into the binary
//! - `load_reference_data(path)` - Loads replacement data from a file path

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::ReferenceDataError;

use super::types::{ReferenceData, ReferenceDataConfig};
use super::validation;

/// Default reference data embedded at compile time from
/// `scenario-core/config/reference_data.toml`.
const DEFAULT_REFERENCE_DATA: &str = include_str!("../../config/reference_data.toml");

impl ReferenceData {
    /// Parse and validate reference data from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceDataError> {
        let config: ReferenceDataConfig = toml::from_str(content)?;
        validation::from_config(config)
    }
}

/// Load reference data from a TOML file at the given path.
///
/// # Returns
/// * `Ok(ReferenceData)` - Validated baseline and scenario catalog
/// * `Err` - If the file cannot be read, is not valid TOML, or fails validation
pub fn load_reference_data(path: &Path) -> Result<ReferenceData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference data from {}", path.display()))?;
    let data = ReferenceData::from_toml_str(&content)
        .with_context(|| format!("Invalid reference data in {}", path.display()))?;

    info!(
        "Loaded reference data from {}: {} categories, {:.0} tCO2e baseline",
        path.display(),
        data.baseline.categories().len(),
        data.baseline.total_emissions()
    );
    Ok(data)
}

/// Get the reference data embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_reference_data() -> ReferenceData {
    ReferenceData::from_toml_str(DEFAULT_REFERENCE_DATA)
        .expect("embedded reference_data.toml must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::CostTier;
    use crate::scenario::{Percentage, ScenarioKind};

    #[test]
    fn test_default_reference_data_loads() {
        let data = default_reference_data();
        assert_eq!(data.baseline.categories().len(), 6);
        assert_eq!(data.baseline.total_emissions(), 29690.0);
        assert_eq!(data.scenarios.iter().count(), ScenarioKind::ALL.len());
    }

    #[test]
    fn test_default_categories_in_display_order() {
        let data = default_reference_data();
        let names: Vec<_> = data
            .baseline
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Purchased Goods",
                "Transportation",
                "Fuel & Energy",
                "Business Travel",
                "Waste",
                "Other"
            ]
        );
    }

    #[test]
    fn test_default_scenarios() {
        let data = default_reference_data();

        let supplier = data.scenarios.get(ScenarioKind::SupplierSwitch);
        assert_eq!(supplier.max_reduction, 2850.0);
        assert_eq!(supplier.affected_category.as_deref(), Some("Purchased Goods"));
        assert_eq!(supplier.default_percentage, Percentage::new(50.0));
        assert_eq!(supplier.cost, CostTier::Medium);
        assert!(supplier.adjustment_label.is_some());

        let transport = data.scenarios.get(ScenarioKind::TransportOptimize);
        assert_eq!(transport.max_reduction, 1450.0);
        assert_eq!(transport.default_percentage, Percentage::FULL);
        assert!(!transport.adjustable());

        let modal = data.scenarios.get(ScenarioKind::ModalShift);
        assert_eq!(modal.max_reduction, 1120.0);
        assert_eq!(modal.affected_category.as_deref(), Some("Transportation"));
        assert_eq!(modal.default_percentage, Percentage::new(30.0));

        let renewable = data.scenarios.get(ScenarioKind::RenewableEnergy);
        assert_eq!(renewable.max_reduction, 1890.0);
        assert_eq!(renewable.affected_category.as_deref(), Some("Fuel & Energy"));
        assert_eq!(renewable.cost, CostTier::High);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = ReferenceData::from_toml_str("categories = [");
        assert!(matches!(result, Err(ReferenceDataError::Parse(_))));
    }

    #[test]
    fn test_default_percentage_on_fixed_scenario_rejected() {
        let content = DEFAULT_REFERENCE_DATA.replace(
            "timeline = \"3-6 months\"",
            "timeline = \"3-6 months\"\ndefault_percentage = 40.0",
        );
        let result = ReferenceData::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(ReferenceDataError::UnexpectedDefaultPercentage(
                ScenarioKind::TransportOptimize
            ))
        ));
    }

    #[test]
    fn test_out_of_range_default_percentage_rejected() {
        let content = DEFAULT_REFERENCE_DATA.replace(
            "default_percentage = 50.0",
            "default_percentage = 120.0",
        );
        let result = ReferenceData::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(ReferenceDataError::InvalidDefaultPercentage { value, .. }) if value == 120.0
        ));
    }
}
