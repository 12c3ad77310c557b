use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::kind::{AdjustableScenario, Percentage, ScenarioKind};

/// The user's current what-if choices: which scenarios are active and any
/// slider values they have moved.
///
/// This is the only mutable state in the scenario page. It has a single
/// writer (the page's controls) and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    active: BTreeSet<ScenarioKind>,
    percentages: BTreeMap<AdjustableScenario, Percentage>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the scenario if inactive, deactivate it otherwise.
    /// Returns whether it is active afterwards. Slider values are kept.
    pub fn toggle(&mut self, kind: ScenarioKind) -> bool {
        let now_active = if self.active.remove(&kind) {
            false
        } else {
            self.active.insert(kind);
            true
        };
        debug!(scenario = %kind, active = now_active, "Toggled scenario");
        now_active
    }

    /// Overwrite the slider value for an adjustable scenario.
    pub fn set_percentage(&mut self, scenario: AdjustableScenario, value: Percentage) {
        debug!(scenario = %scenario, percentage = value.value(), "Set scenario percentage");
        self.percentages.insert(scenario, value);
    }

    /// Clear all active scenarios and slider values.
    pub fn reset(&mut self) {
        debug!(
            active = self.active.len(),
            overrides = self.percentages.len(),
            "Reset scenario selection"
        );
        self.active.clear();
        self.percentages.clear();
    }

    pub fn is_active(&self, kind: ScenarioKind) -> bool {
        self.active.contains(&kind)
    }

    /// Active scenarios in catalog order.
    pub fn active(&self) -> impl Iterator<Item = ScenarioKind> + '_ {
        self.active.iter().copied()
    }

    /// The slider value the user set, if any.
    pub fn percentage(&self, scenario: AdjustableScenario) -> Option<Percentage> {
        self.percentages.get(&scenario).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionState::new();
        assert!(selection.is_empty());
        assert_eq!(selection.active().count(), 0);
        assert_eq!(selection.percentage(AdjustableScenario::SupplierSwitch), None);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle(ScenarioKind::ModalShift));
        assert!(selection.is_active(ScenarioKind::ModalShift));
        assert!(!selection.toggle(ScenarioKind::ModalShift));
        assert!(!selection.is_active(ScenarioKind::ModalShift));
        assert_eq!(selection, SelectionState::new());
    }

    #[test]
    fn test_active_iterates_in_catalog_order() {
        let mut selection = SelectionState::new();
        selection.toggle(ScenarioKind::RenewableEnergy);
        selection.toggle(ScenarioKind::SupplierSwitch);
        selection.toggle(ScenarioKind::ModalShift);
        let active: Vec<_> = selection.active().collect();
        assert_eq!(
            active,
            vec![
                ScenarioKind::SupplierSwitch,
                ScenarioKind::ModalShift,
                ScenarioKind::RenewableEnergy
            ]
        );
    }

    #[test]
    fn test_toggle_keeps_percentage() {
        let mut selection = SelectionState::new();
        selection.toggle(ScenarioKind::SupplierSwitch);
        selection.set_percentage(AdjustableScenario::SupplierSwitch, Percentage::new(70.0));
        selection.toggle(ScenarioKind::SupplierSwitch);

        assert!(!selection.is_active(ScenarioKind::SupplierSwitch));
        assert_eq!(
            selection.percentage(AdjustableScenario::SupplierSwitch),
            Some(Percentage::new(70.0))
        );
    }

    #[test]
    fn test_set_percentage_overwrites() {
        let mut selection = SelectionState::new();
        selection.set_percentage(AdjustableScenario::ModalShift, Percentage::new(20.0));
        selection.set_percentage(AdjustableScenario::ModalShift, Percentage::new(90.0));
        assert_eq!(
            selection.percentage(AdjustableScenario::ModalShift),
            Some(Percentage::new(90.0))
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut selection = SelectionState::new();
        selection.toggle(ScenarioKind::SupplierSwitch);
        selection.toggle(ScenarioKind::RenewableEnergy);
        selection.set_percentage(AdjustableScenario::SupplierSwitch, Percentage::new(10.0));

        selection.reset();

        assert!(selection.is_empty());
        assert_eq!(selection.percentage(AdjustableScenario::SupplierSwitch), None);
        assert_eq!(selection, SelectionState::default());
    }
}
