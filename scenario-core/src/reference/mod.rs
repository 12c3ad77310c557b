//! Baseline emissions and the scenario catalog.
//!
//! Reference data is immutable once loaded and is passed to
//! `ScenarioImpactModel::new` explicitly; nothing here is global.

mod loader;
mod types;
mod validation;

pub use loader::{default_reference_data, load_reference_data};
pub use types::*;
