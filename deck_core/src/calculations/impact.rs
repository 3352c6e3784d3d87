//! # Project Cost Comparison
//!
//! Scales the per-m³ cement cost comparison up to a whole project, as on the
//! business impact slide: a 2,000 m³ warehouse foundation poured with a
//! conservative mix versus a model-optimised one.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::impact::ImpactScenario;
//!
//! let summary = ImpactScenario::warehouse_foundation().summarize();
//! assert_eq!(summary.project_saving.round(), 21_600.0);
//! ```

use serde::{Deserialize, Serialize};

use super::strength::cement_cost_per_m3;

/// Cement and slag content of one mix option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixOption {
    pub cement_kg_m3: f64,
    pub slag_kg_m3: f64,
}

/// A project poured with either a baseline or an optimised mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactScenario {
    /// Project description
    pub label: String,
    /// Concrete volume (m³)
    pub volume_m3: f64,
    /// Conservative mix
    pub baseline: MixOption,
    /// Model-optimised mix
    pub optimised: MixOption,
}

/// Costs derived from an [`ImpactScenario`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Baseline cement cost (£/m³)
    pub baseline_cost_per_m3: f64,
    /// Optimised cement cost (£/m³)
    pub optimised_cost_per_m3: f64,
    /// Baseline cement cost for the whole project (£)
    pub baseline_total: f64,
    /// Optimised cement cost for the whole project (£)
    pub optimised_total: f64,
    /// Baseline minus optimised (£)
    pub project_saving: f64,
    /// Saving as a percentage of the baseline total
    pub reduction_percent: f64,
}

impl ImpactScenario {
    /// The commercial warehouse foundation used on the impact slide
    pub fn warehouse_foundation() -> Self {
        ImpactScenario {
            label: "Commercial warehouse foundation, C30-grade".to_string(),
            volume_m3: 2000.0,
            baseline: MixOption {
                cement_kg_m3: 400.0,
                slag_kg_m3: 0.0,
            },
            optimised: MixOption {
                cement_kg_m3: 310.0,
                slag_kg_m3: 100.0,
            },
        }
    }

    pub fn summarize(&self) -> ImpactSummary {
        let baseline_cost_per_m3 = cement_cost_per_m3(self.baseline.cement_kg_m3);
        let optimised_cost_per_m3 = cement_cost_per_m3(self.optimised.cement_kg_m3);
        let baseline_total = baseline_cost_per_m3 * self.volume_m3;
        let optimised_total = optimised_cost_per_m3 * self.volume_m3;
        let project_saving = baseline_total - optimised_total;

        let reduction_percent = if baseline_total > 0.0 {
            project_saving / baseline_total * 100.0
        } else {
            0.0
        };

        ImpactSummary {
            baseline_cost_per_m3,
            optimised_cost_per_m3,
            baseline_total,
            optimised_total,
            project_saving,
            reduction_percent,
        }
    }
}

/// Format whole pounds with thousands separators, e.g. `£96,000`
pub fn format_pounds_whole(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_costs() {
        let summary = ImpactScenario::warehouse_foundation().summarize();

        assert!((summary.baseline_cost_per_m3 - 48.0).abs() < 1e-9);
        assert!((summary.optimised_cost_per_m3 - 37.2).abs() < 1e-9);
        assert!((summary.baseline_total - 96_000.0).abs() < 1e-6);
        assert!((summary.optimised_total - 74_400.0).abs() < 1e-6);
        assert!((summary.project_saving - 21_600.0).abs() < 1e-6);
        assert!((summary.reduction_percent - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_baseline_has_no_percentage() {
        let mut scenario = ImpactScenario::warehouse_foundation();
        scenario.volume_m3 = 0.0;
        let summary = scenario.summarize();
        assert_eq!(summary.reduction_percent, 0.0);
        assert_eq!(summary.project_saving, 0.0);
    }

    #[test]
    fn test_format_pounds_whole() {
        assert_eq!(format_pounds_whole(96_000.0), "£96,000");
        assert_eq!(format_pounds_whole(21_599.999_999), "£21,600");
        assert_eq!(format_pounds_whole(480.0), "£480");
        assert_eq!(format_pounds_whole(1_234_567.0), "£1,234,567");
        assert_eq!(format_pounds_whole(-2_500.0), "-£2,500");
    }
}
