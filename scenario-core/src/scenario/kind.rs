//! Closed set of reduction scenarios and the slider percentage type.
//!
//! Scenario identifiers are enums rather than strings so an unknown id can
//! never reach the model. Only the `AdjustableScenario` subset accepts a
//! percentage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every reduction scenario offered on the what-if page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    SupplierSwitch,
    TransportOptimize,
    ModalShift,
    RenewableEnergy,
}

impl ScenarioKind {
    /// All scenarios in catalog order.
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::SupplierSwitch,
        ScenarioKind::TransportOptimize,
        ScenarioKind::ModalShift,
        ScenarioKind::RenewableEnergy,
    ];

    /// Stable kebab-case identifier, e.g. "supplier-switch".
    pub fn id(self) -> &'static str {
        match self {
            ScenarioKind::SupplierSwitch => "supplier-switch",
            ScenarioKind::TransportOptimize => "transport-optimize",
            ScenarioKind::ModalShift => "modal-shift",
            ScenarioKind::RenewableEnergy => "renewable-energy",
        }
    }

    /// The adjustable view of this scenario, if a slider applies to it.
    pub fn adjustable(self) -> Option<AdjustableScenario> {
        match self {
            ScenarioKind::SupplierSwitch => Some(AdjustableScenario::SupplierSwitch),
            ScenarioKind::ModalShift => Some(AdjustableScenario::ModalShift),
            ScenarioKind::TransportOptimize | ScenarioKind::RenewableEnergy => None,
        }
    }

    /// Position in `ALL`.
    pub(crate) fn index(self) -> usize {
        match self {
            ScenarioKind::SupplierSwitch => 0,
            ScenarioKind::TransportOptimize => 1,
            ScenarioKind::ModalShift => 2,
            ScenarioKind::RenewableEnergy => 3,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Scenarios whose reduction is scaled by a user-controlled percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustableScenario {
    SupplierSwitch,
    ModalShift,
}

impl AdjustableScenario {
    /// Adjustable scenarios in catalog order.
    pub const ALL: [AdjustableScenario; 2] =
        [AdjustableScenario::SupplierSwitch, AdjustableScenario::ModalShift];

    pub fn kind(self) -> ScenarioKind {
        match self {
            AdjustableScenario::SupplierSwitch => ScenarioKind::SupplierSwitch,
            AdjustableScenario::ModalShift => ScenarioKind::ModalShift,
        }
    }
}

impl fmt::Display for AdjustableScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().id())
    }
}

/// A slider value, always within [0, 100].
///
/// Construction clamps, so the model never sees an out-of-range value.
/// NaN maps to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);
    pub const FULL: Percentage = Percentage(100.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The percentage as a multiplier in [0, 1].
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_deserialize_kebab_case() {
        let kind: ScenarioKind = serde_json::from_str(r#""transport-optimize""#).unwrap();
        assert_eq!(kind, ScenarioKind::TransportOptimize);

        let kind: ScenarioKind = serde_json::from_str(r#""renewable-energy""#).unwrap();
        assert_eq!(kind, ScenarioKind::RenewableEnergy);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<ScenarioKind, _> = serde_json::from_str(r#""carbon-capture""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_matches_serde_name() {
        for kind in ScenarioKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn test_index_follows_catalog_order() {
        for (i, kind) in ScenarioKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_adjustable_subset() {
        assert_eq!(
            ScenarioKind::SupplierSwitch.adjustable(),
            Some(AdjustableScenario::SupplierSwitch)
        );
        assert_eq!(
            ScenarioKind::ModalShift.adjustable(),
            Some(AdjustableScenario::ModalShift)
        );
        assert_eq!(ScenarioKind::TransportOptimize.adjustable(), None);
        assert_eq!(ScenarioKind::RenewableEnergy.adjustable(), None);

        for adj in AdjustableScenario::ALL {
            assert_eq!(adj.kind().adjustable(), Some(adj));
        }
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(Percentage::new(50.0).value(), 50.0);
        assert_eq!(Percentage::new(-10.0), Percentage::ZERO);
        assert_eq!(Percentage::new(150.0), Percentage::FULL);
        assert_eq!(Percentage::new(f64::NAN), Percentage::ZERO);
        assert_eq!(Percentage::new(f64::INFINITY), Percentage::FULL);
    }

    #[test]
    fn test_percentage_fraction() {
        assert_eq!(Percentage::new(50.0).fraction(), 0.5);
        assert_eq!(Percentage::FULL.fraction(), 1.0);
        assert_eq!(Percentage::ZERO.fraction(), 0.0);
    }
}
