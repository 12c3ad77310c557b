//! Selection state and the what-if impact model.

mod kind;
mod model;
mod report;
mod selection;

pub use kind::{AdjustableScenario, Percentage, ScenarioKind};
pub use model::ScenarioImpactModel;
pub use report::{CategoryProjection, RoadmapStep, ScenarioReport};
pub use selection::SelectionState;
