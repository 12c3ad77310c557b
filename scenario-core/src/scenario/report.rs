//! Derived values handed to the rendering layer.
//!
//! All numbers are raw tCO2e or percent values. Rounding, thousands
//! separators and units are left to whoever displays them.

use serde::Serialize;

use super::kind::ScenarioKind;

/// Baseline and projected emissions for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProjection {
    pub name: String,
    pub baseline: f64,
    /// Baseline minus matching scenario reductions, floored at zero
    pub projected: f64,
}

/// One line of the implementation roadmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapStep {
    /// 1-based position in the roadmap
    pub step: usize,
    pub kind: ScenarioKind,
    pub name: String,
    pub timeline: String,
    /// Reduction this scenario contributes under the current selection
    pub reduction: f64,
}

/// Complete result of evaluating a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub baseline_total: f64,
    pub projected_total: f64,
    pub reduction: f64,
    pub reduction_percentage: f64,
    pub categories: Vec<CategoryProjection>,
    pub roadmap: Vec<RoadmapStep>,
}

impl ScenarioReport {
    /// Pretty-printed JSON for the "Export Analysis" action.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialize() {
        let report = ScenarioReport {
            baseline_total: 100.0,
            projected_total: 80.0,
            reduction: 20.0,
            reduction_percentage: 20.0,
            categories: vec![CategoryProjection {
                name: "Waste".to_string(),
                baseline: 100.0,
                projected: 80.0,
            }],
            roadmap: vec![RoadmapStep {
                step: 1,
                kind: ScenarioKind::TransportOptimize,
                name: "Optimize Transport Routes".to_string(),
                timeline: "3-6 months".to_string(),
                reduction: 20.0,
            }],
        };

        let json = report.to_json().unwrap();
        assert!(json.contains("\"projected_total\": 80.0"));
        assert!(json.contains("\"kind\": \"transport-optimize\""));
        assert!(json.contains("Waste"));
    }

    #[test]
    fn test_empty_report_serialize() {
        let report = ScenarioReport {
            baseline_total: 0.0,
            projected_total: 0.0,
            reduction: 0.0,
            reduction_percentage: 0.0,
            categories: vec![],
            roadmap: vec![],
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["roadmap"], serde_json::json!([]));
        assert_eq!(value["categories"], serde_json::json!([]));
    }
}
