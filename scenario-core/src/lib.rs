//! Scope 3 what-if scenario modelling.
//!
//! Combines a baseline emissions breakdown with user-selected reduction
//! scenarios to project total and per-category emissions.
//!
//! # Example
//!
//! ```
//! use scope3_core::{
//!     default_reference_data, AdjustableScenario, Percentage, ScenarioImpactModel,
//!     ScenarioKind, SelectionState,
//! };
//!
//! let model = ScenarioImpactModel::new(default_reference_data());
//! let mut selection = SelectionState::new();
//! selection.toggle(ScenarioKind::SupplierSwitch);
//! selection.set_percentage(AdjustableScenario::SupplierSwitch, Percentage::new(50.0));
//!
//! assert_eq!(model.compute_reduction(&selection), 1425.0);
//! assert_eq!(model.compute_projected_total(&selection), 28265.0);
//! ```

mod error;
pub mod reference;
pub mod scenario;

pub use error::ReferenceDataError;
pub use reference::{
    default_reference_data, load_reference_data, Baseline, CostTier, EmissionCategory,
    ReferenceData, ScenarioCatalog, ScenarioDefinition,
};
pub use scenario::{
    AdjustableScenario, CategoryProjection, Percentage, RoadmapStep, ScenarioImpactModel,
    ScenarioKind, ScenarioReport, SelectionState,
};
