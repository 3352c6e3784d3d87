//! # Compressive Strength Estimate
//!
//! Evaluates the final multiple linear regression model for 28-day-style
//! compressive strength and the cement cost comparison shown on the
//! calculator slide.
//!
//! ```text
//! strength = 23.914
//!          + 0.0974 × cement
//!          − 2.545  × ln(superplasticizer)
//!          − 0.2374 × water
//!          + 9.759  × ln(age)
//!          + 0.0683 × slag
//! ```
//!
//! The coefficients are a fixed, fitted parameter set. They are reproduced
//! exactly and are not configurable.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::mix::MixInputs;
//! use deck_core::calculations::strength::{estimate, StrengthTier};
//!
//! let result = estimate(&MixInputs::default());
//! assert_eq!(result.tier, StrengthTier::MeetsTarget);
//! assert_eq!(result.strength_display(), "51.7");
//! assert_eq!(result.saving_display(), "+£6.00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::mix::MixInputs;

/// Model intercept (MPa)
pub const INTERCEPT_MPA: f64 = 23.914;
/// MPa per kg/m³ of cement
pub const CEMENT_COEFF: f64 = 0.0974;
/// MPa per unit ln(superplasticizer), subtracted
pub const SUPERPLASTICIZER_LN_COEFF: f64 = 2.545;
/// MPa per kg/m³ of water, subtracted
pub const WATER_COEFF: f64 = 0.2374;
/// MPa per unit ln(age)
pub const AGE_LN_COEFF: f64 = 9.759;
/// MPa per kg/m³ of slag
pub const SLAG_COEFF: f64 = 0.0683;

/// Cement content of the conservative reference mix (kg/m³)
pub const BASELINE_CEMENT_KG_M3: f64 = 400.0;
/// Cement price (£/kg)
pub const CEMENT_COST_PER_KG: f64 = 0.12;

/// Strength at or above which a mix meets C25/30 (MPa)
pub const TARGET_STRENGTH_MPA: f64 = 35.0;
/// Strength below which a mix is under the usual structural minimum (MPa)
pub const STRUCTURAL_THRESHOLD_MPA: f64 = 25.0;

/// Qualitative band for a predicted strength, ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthTier {
    BelowThreshold,
    Borderline,
    MeetsTarget,
}

impl StrengthTier {
    /// Classify a predicted strength (MPa)
    pub fn classify(strength_mpa: f64) -> Self {
        if strength_mpa >= TARGET_STRENGTH_MPA {
            StrengthTier::MeetsTarget
        } else if strength_mpa >= STRUCTURAL_THRESHOLD_MPA {
            StrengthTier::Borderline
        } else {
            StrengthTier::BelowThreshold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::MeetsTarget => "Meets C25/30 specification",
            StrengthTier::Borderline => "Borderline — verify target spec",
            StrengthTier::BelowThreshold => "Below typical structural threshold",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StrengthTier::MeetsTarget => "✅",
            StrengthTier::Borderline => "⚠️",
            StrengthTier::BelowThreshold => "❌",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// Output of one evaluation of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted compressive strength (MPa)
    pub predicted_strength_mpa: f64,
    /// Cement cost saved against the 400 kg/m³ baseline (£/m³, negative = extra cost)
    pub cost_saving_per_m3: f64,
    /// Qualitative band of the predicted strength
    pub tier: StrengthTier,
}

impl PredictionResult {
    /// Strength to one decimal place, e.g. `"51.7"`
    pub fn strength_display(&self) -> String {
        format!("{:.1}", self.predicted_strength_mpa)
    }

    /// Signed, currency-prefixed saving to two decimals, e.g. `"+£10.80"`
    pub fn saving_display(&self) -> String {
        format_signed_pounds(self.cost_saving_per_m3)
    }

    /// Whether the saving rounds to a positive amount
    pub fn is_saving(&self) -> bool {
        round_pence(self.cost_saving_per_m3) > 0.0
    }
}

/// Estimate strength, cost saving and tier for a mix.
///
/// Pure and total: no input makes it fail. Inputs are used as given; clamp
/// with [`MixInputs::clamped`] first if they did not come from a slider.
pub fn estimate(inputs: &MixInputs) -> PredictionResult {
    let predicted_strength_mpa = predicted_strength(inputs);
    PredictionResult {
        predicted_strength_mpa,
        cost_saving_per_m3: cost_saving(inputs.cement_kg_m3),
        tier: StrengthTier::classify(predicted_strength_mpa),
    }
}

/// Evaluate the regression formula (MPa).
///
/// Terms are summed in formula order so results match the published model
/// to the last bit.
pub fn predicted_strength(inputs: &MixInputs) -> f64 {
    INTERCEPT_MPA + CEMENT_COEFF * inputs.cement_kg_m3
        - SUPERPLASTICIZER_LN_COEFF * guarded_ln(inputs.superplasticizer_kg_m3)
        - WATER_COEFF * inputs.water_kg_m3
        + AGE_LN_COEFF * guarded_ln(inputs.age_days)
        + SLAG_COEFF * inputs.slag_kg_m3
}

/// Cement cost saved per m³ relative to the baseline mix (£)
pub fn cost_saving(cement_kg_m3: f64) -> f64 {
    (BASELINE_CEMENT_KG_M3 - cement_kg_m3) * CEMENT_COST_PER_KG
}

/// Cement cost of a mix per m³ (£)
pub fn cement_cost_per_m3(cement_kg_m3: f64) -> f64 {
    cement_kg_m3 * CEMENT_COST_PER_KG
}

/// ln(max(x, 1)). Zero, negative and NaN arguments contribute nothing.
fn guarded_ln(x: f64) -> f64 {
    x.max(1.0).ln()
}

fn round_pence(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a pound amount with an explicit sign, e.g. `+£10.80`, `-£6.00`, `£0.00`
pub fn format_signed_pounds(amount: f64) -> String {
    let rounded = round_pence(amount);
    if rounded > 0.0 {
        format!("+£{:.2}", rounded)
    } else if rounded < 0.0 {
        format!("-£{:.2}", rounded.abs())
    } else {
        "£0.00".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::mix::MixField;

    const TOLERANCE: f64 = 1e-6;

    fn mix(cement: f64, slag: f64, water: f64, sp: f64, age: f64) -> MixInputs {
        MixInputs {
            cement_kg_m3: cement,
            slag_kg_m3: slag,
            water_kg_m3: water,
            superplasticizer_kg_m3: sp,
            age_days: age,
        }
    }

    #[test]
    fn test_reference_mix() {
        let result = estimate(&mix(350.0, 100.0, 170.0, 8.0, 28.0));

        let reference = 23.914 + 0.0974 * 350.0 - 2.545 * 8.0_f64.ln() - 0.2374 * 170.0
            + 9.759 * 28.0_f64.ln()
            + 0.0683 * 100.0;
        assert!((result.predicted_strength_mpa - reference).abs() < TOLERANCE);
        assert!((result.predicted_strength_mpa - 51.702_805_09).abs() < TOLERANCE);
        assert_eq!(result.tier, StrengthTier::MeetsTarget);
    }

    #[test]
    fn test_zero_superplasticizer_is_guarded() {
        let with_zero = estimate(&mix(350.0, 100.0, 170.0, 0.0, 28.0));
        let term_dropped = 23.914 + 0.0974 * 350.0 - 0.2374 * 170.0 + 9.759 * 28.0_f64.ln() + 0.0683 * 100.0;

        assert!(with_zero.predicted_strength_mpa.is_finite());
        assert!((with_zero.predicted_strength_mpa - term_dropped).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_and_nan_age_are_guarded() {
        let zero_age = predicted_strength(&mix(350.0, 100.0, 170.0, 8.0, 0.0));
        let nan_age = predicted_strength(&mix(350.0, 100.0, 170.0, 8.0, f64::NAN));
        let one_day = predicted_strength(&mix(350.0, 100.0, 170.0, 8.0, 1.0));

        assert!(zero_age.is_finite());
        assert_eq!(zero_age, one_day);
        assert_eq!(nan_age, one_day);
    }

    #[test]
    fn test_estimate_is_pure() {
        let inputs = mix(287.0, 44.0, 201.0, 13.0, 90.0);
        let a = estimate(&inputs);
        let b = estimate(&inputs);
        assert_eq!(a.predicted_strength_mpa.to_bits(), b.predicted_strength_mpa.to_bits());
        assert_eq!(a.cost_saving_per_m3.to_bits(), b.cost_saving_per_m3.to_bits());
        assert_eq!(a.tier, b.tier);
    }

    #[test]
    fn test_baseline_cement_saves_nothing() {
        let result = estimate(&MixInputs::default().with(MixField::Cement, 400.0));
        assert_eq!(result.cost_saving_per_m3, 0.0);
        assert_eq!(result.saving_display(), "£0.00");
        assert!(!result.is_saving());
    }

    #[test]
    fn test_reduced_cement_saving() {
        let result = estimate(&MixInputs::default().with(MixField::Cement, 310.0));
        assert!((result.cost_saving_per_m3 - 10.80).abs() < 1e-9);
        assert_eq!(result.saving_display(), "+£10.80");
        assert!(result.is_saving());
    }

    #[test]
    fn test_extra_cement_costs_more() {
        let result = estimate(&MixInputs::default().with(MixField::Cement, 450.0));
        assert!((result.cost_saving_per_m3 + 6.0).abs() < 1e-9);
        assert_eq!(result.saving_display(), "-£6.00");
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StrengthTier::classify(35.0), StrengthTier::MeetsTarget);
        assert_eq!(StrengthTier::classify(34.999), StrengthTier::Borderline);
        assert_eq!(StrengthTier::classify(25.0), StrengthTier::Borderline);
        assert_eq!(StrengthTier::classify(24.999), StrengthTier::BelowThreshold);
        assert!(StrengthTier::BelowThreshold < StrengthTier::Borderline);
        assert!(StrengthTier::Borderline < StrengthTier::MeetsTarget);
    }

    #[test]
    fn test_tiers_from_mixes() {
        let borderline = estimate(&mix(300.0, 0.0, 190.0, 10.0, 14.0));
        assert!((borderline.predicted_strength_mpa - 27.922_481_42).abs() < TOLERANCE);
        assert_eq!(borderline.tier, StrengthTier::Borderline);

        let weak = estimate(&mix(200.0, 0.0, 200.0, 8.0, 7.0));
        assert_eq!(weak.tier, StrengthTier::BelowThreshold);
        assert_eq!(weak.strength_display(), "9.6");
    }

    #[test]
    fn test_range_extremes_stay_finite() {
        let weakest = estimate(&mix(100.0, 0.0, 250.0, 32.0, 1.0));
        let strongest = estimate(&mix(540.0, 360.0, 120.0, 1.0, 365.0));
        assert!((weakest.predicted_strength_mpa + 34.516_297_87).abs() < TOLERANCE);
        assert!((strongest.predicted_strength_mpa - 130.187_098_27).abs() < TOLERANCE);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(
            StrengthTier::Borderline.to_string(),
            "⚠️ Borderline — verify target spec"
        );
    }

    #[test]
    fn test_cement_cost_per_m3() {
        assert!((cement_cost_per_m3(400.0) - 48.0).abs() < 1e-9);
        assert!((cement_cost_per_m3(310.0) - 37.2).abs() < 1e-9);
    }
}
