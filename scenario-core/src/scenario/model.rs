//! What-if impact calculation.
//!
//! `ScenarioImpactModel` turns a `SelectionState` into projected emissions.
//! Every method is a pure function of the reference data the model was built
//! with and the selection passed in; the model holds no mutable state.

use tracing::debug;

use crate::reference::{Baseline, ReferenceData, ScenarioCatalog};

use super::kind::{AdjustableScenario, Percentage, ScenarioKind};
use super::report::{CategoryProjection, RoadmapStep, ScenarioReport};
use super::selection::SelectionState;

/// Projection engine over immutable baseline and scenario data.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioImpactModel {
    reference: ReferenceData,
}

impl ScenarioImpactModel {
    /// Create a model over the given reference data
    /// (typically from `default_reference_data()` or `load_reference_data()`).
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    pub fn baseline(&self) -> &Baseline {
        &self.reference.baseline
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        &self.reference.scenarios
    }

    /// Slider value in effect for an adjustable scenario: the user's value if
    /// they moved the slider, otherwise the configured default.
    pub fn effective_percentage(
        &self,
        scenario: AdjustableScenario,
        selection: &SelectionState,
    ) -> Percentage {
        selection
            .percentage(scenario)
            .unwrap_or_else(|| self.scenarios().get(scenario.kind()).default_percentage)
    }

    /// Reduction contributed by one scenario. Zero when it is inactive.
    ///
    /// Never negative: `max_reduction` is validated non-negative and
    /// `Percentage` is confined to [0, 100].
    pub fn contribution(&self, kind: ScenarioKind, selection: &SelectionState) -> f64 {
        if !selection.is_active(kind) {
            return 0.0;
        }
        let def = self.scenarios().get(kind);
        match kind.adjustable() {
            Some(adjustable) => {
                def.max_reduction * self.effective_percentage(adjustable, selection).fraction()
            }
            None => def.max_reduction,
        }
    }

    /// Total reduction across all active scenarios. Zero for an empty selection.
    pub fn compute_reduction(&self, selection: &SelectionState) -> f64 {
        selection
            .active()
            .map(|kind| self.contribution(kind, selection))
            .sum()
    }

    /// Baseline total minus the reduction, floored at zero.
    pub fn compute_projected_total(&self, selection: &SelectionState) -> f64 {
        (self.baseline().total_emissions() - self.compute_reduction(selection)).max(0.0)
    }

    /// Per-category projection in baseline order.
    ///
    /// Each category is floored at zero on its own, so the projections can
    /// sum to more than `compute_projected_total` when a reduction overshoots
    /// its category. That divergence is accepted and not reconciled.
    pub fn compute_projected_by_category(
        &self,
        selection: &SelectionState,
    ) -> Vec<CategoryProjection> {
        self.baseline()
            .categories()
            .iter()
            .map(|category| {
                let reduction: f64 = selection
                    .active()
                    .filter(|&kind| {
                        self.scenarios().get(kind).affected_category.as_deref()
                            == Some(category.name.as_str())
                    })
                    .map(|kind| self.contribution(kind, selection))
                    .sum();

                CategoryProjection {
                    name: category.name.clone(),
                    baseline: category.baseline,
                    projected: (category.baseline - reduction).max(0.0),
                }
            })
            .collect()
    }

    /// Reduction as a percentage of the baseline total; 0 when the total is 0.
    pub fn compute_reduction_percentage(&self, selection: &SelectionState) -> f64 {
        let total = self.baseline().total_emissions();
        if total == 0.0 {
            return 0.0;
        }
        self.compute_reduction(selection) / total * 100.0
    }

    /// Active scenarios as numbered roadmap steps, in catalog order.
    pub fn roadmap(&self, selection: &SelectionState) -> Vec<RoadmapStep> {
        selection
            .active()
            .map(|kind| self.scenarios().get(kind))
            .enumerate()
            .map(|(i, def)| RoadmapStep {
                step: i + 1,
                kind: def.kind,
                name: def.name.clone(),
                timeline: def.timeline.clone(),
                reduction: self.contribution(def.kind, selection),
            })
            .collect()
    }

    /// Evaluate every derived value for the selection at once.
    pub fn evaluate(&self, selection: &SelectionState) -> ScenarioReport {
        let report = ScenarioReport {
            baseline_total: self.baseline().total_emissions(),
            projected_total: self.compute_projected_total(selection),
            reduction: self.compute_reduction(selection),
            reduction_percentage: self.compute_reduction_percentage(selection),
            categories: self.compute_projected_by_category(selection),
            roadmap: self.roadmap(selection),
        };

        debug!(
            active = report.roadmap.len(),
            reduction = report.reduction,
            projected_total = report.projected_total,
            "Evaluated scenario selection"
        );
        report
    }
}
