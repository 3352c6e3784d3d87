//! # Concrete Mix Inputs
//!
//! The five adjustable parameters behind the calculator slide. Every field
//! has a fixed range that the input control enforces by clamping; there are
//! no cross-field constraints.
//!
//! | field | range | unit |
//! |---|---|---|
//! | cement | 100 – 540 | kg/m³ |
//! | slag | 0 – 360 | kg/m³ |
//! | water | 120 – 250 | kg/m³ |
//! | superplasticizer | 1 – 32 | kg/m³ |
//! | age | 1 – 365 | days |
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::mix::{MixField, MixInputs};
//!
//! let mut mix = MixInputs::default();
//! mix.set(MixField::Cement, 900.0);
//! assert_eq!(mix.cement_kg_m3, 540.0);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Mix parameters for one strength estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cement_kg_m3": 350.0,
///   "slag_kg_m3": 100.0,
///   "water_kg_m3": 170.0,
///   "superplasticizer_kg_m3": 8.0,
///   "age_days": 28.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixInputs {
    /// Cement content (kg/m³)
    pub cement_kg_m3: f64,
    /// Blast furnace slag content (kg/m³)
    pub slag_kg_m3: f64,
    /// Water content (kg/m³)
    pub water_kg_m3: f64,
    /// Superplasticizer content (kg/m³)
    pub superplasticizer_kg_m3: f64,
    /// Curing age at test (days)
    pub age_days: f64,
}

impl Default for MixInputs {
    /// The calculator's opening mix: a typical 28-day design.
    fn default() -> Self {
        MixInputs {
            cement_kg_m3: MixField::Cement.default_value(),
            slag_kg_m3: MixField::Slag.default_value(),
            water_kg_m3: MixField::Water.default_value(),
            superplasticizer_kg_m3: MixField::Superplasticizer.default_value(),
            age_days: MixField::Age.default_value(),
        }
    }
}

impl MixInputs {
    /// Read a single field
    pub fn get(&self, field: MixField) -> f64 {
        match field {
            MixField::Cement => self.cement_kg_m3,
            MixField::Slag => self.slag_kg_m3,
            MixField::Water => self.water_kg_m3,
            MixField::Superplasticizer => self.superplasticizer_kg_m3,
            MixField::Age => self.age_days,
        }
    }

    /// Write a single field, clamped to its range
    pub fn set(&mut self, field: MixField, value: f64) {
        let value = field.clamp(value);
        match field {
            MixField::Cement => self.cement_kg_m3 = value,
            MixField::Slag => self.slag_kg_m3 = value,
            MixField::Water => self.water_kg_m3 = value,
            MixField::Superplasticizer => self.superplasticizer_kg_m3 = value,
            MixField::Age => self.age_days = value,
        }
    }

    /// Builder-style variant of [`MixInputs::set`]
    pub fn with(mut self, field: MixField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Copy with every field clamped to its range.
    ///
    /// Useful for mixes that arrive from JSON rather than from a slider.
    pub fn clamped(&self) -> Self {
        MixField::ALL
            .iter()
            .fold(*self, |mix, &field| mix.with(field, self.get(field)))
    }

    /// Parse a typed value for `field`.
    ///
    /// Only syntax is checked here; range is enforced by clamping on `set`.
    pub fn parse_value(field: MixField, raw: &str) -> DeckResult<f64> {
        let trimmed = raw.trim();
        let value: f64 = trimmed.parse().map_err(|_| {
            DeckError::invalid_input(field.key(), trimmed, "Expected a number")
        })?;
        if !value.is_finite() {
            return Err(DeckError::invalid_input(field.key(), trimmed, "Value must be finite"));
        }
        Ok(value)
    }
}

/// One of the five calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixField {
    Cement,
    Slag,
    Water,
    Superplasticizer,
    Age,
}

impl MixField {
    /// All fields in slider order
    pub const ALL: [MixField; 5] = [
        MixField::Cement,
        MixField::Slag,
        MixField::Water,
        MixField::Superplasticizer,
        MixField::Age,
    ];

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MixField::Cement => "Cement",
            MixField::Slag => "Slag",
            MixField::Water => "Water",
            MixField::Superplasticizer => "Superplasticizer",
            MixField::Age => "Age",
        }
    }

    /// JSON key of the field in [`MixInputs`]
    pub fn key(&self) -> &'static str {
        match self {
            MixField::Cement => "cement_kg_m3",
            MixField::Slag => "slag_kg_m3",
            MixField::Water => "water_kg_m3",
            MixField::Superplasticizer => "superplasticizer_kg_m3",
            MixField::Age => "age_days",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MixField::Age => "days",
            _ => "kg/m³",
        }
    }

    pub fn min(&self) -> f64 {
        match self {
            MixField::Cement => 100.0,
            MixField::Slag => 0.0,
            MixField::Water => 120.0,
            MixField::Superplasticizer => 1.0,
            MixField::Age => 1.0,
        }
    }

    pub fn max(&self) -> f64 {
        match self {
            MixField::Cement => 540.0,
            MixField::Slag => 360.0,
            MixField::Water => 250.0,
            MixField::Superplasticizer => 32.0,
            MixField::Age => 365.0,
        }
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min()..=self.max()
    }

    /// Opening value on the calculator slide
    pub fn default_value(&self) -> f64 {
        match self {
            MixField::Cement => 350.0,
            MixField::Slag => 100.0,
            MixField::Water => 170.0,
            MixField::Superplasticizer => 8.0,
            MixField::Age => 28.0,
        }
    }

    /// Clamp a raw value into this field's range. NaN maps to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min();
        }
        value.clamp(self.min(), self.max())
    }

    /// Look up a field by JSON key or display name (case-insensitive)
    pub fn from_name(name: &str) -> DeckResult<Self> {
        let needle = name.trim();
        MixField::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(needle) || f.display_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DeckError::unknown_field(needle))
    }
}

impl fmt::Display for MixField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mix() {
        let mix = MixInputs::default();
        assert_eq!(mix.cement_kg_m3, 350.0);
        assert_eq!(mix.slag_kg_m3, 100.0);
        assert_eq!(mix.water_kg_m3, 170.0);
        assert_eq!(mix.superplasticizer_kg_m3, 8.0);
        assert_eq!(mix.age_days, 28.0);
    }

    #[test]
    fn test_defaults_inside_ranges() {
        for field in MixField::ALL {
            assert!(field.range().contains(&field.default_value()), "{field}");
        }
    }

    #[test]
    fn test_set_clamps_each_field_independently() {
        let mut mix = MixInputs::default();
        mix.set(MixField::Cement, 50.0);
        mix.set(MixField::Water, 400.0);
        mix.set(MixField::Age, 0.0);

        assert_eq!(mix.cement_kg_m3, 100.0);
        assert_eq!(mix.water_kg_m3, 250.0);
        assert_eq!(mix.age_days, 1.0);
        // untouched fields keep their values
        assert_eq!(mix.slag_kg_m3, 100.0);
        assert_eq!(mix.superplasticizer_kg_m3, 8.0);
    }

    #[test]
    fn test_clamp_nan_goes_to_minimum() {
        assert_eq!(MixField::Slag.clamp(f64::NAN), 0.0);
        assert_eq!(MixField::Superplasticizer.clamp(f64::NAN), 1.0);
    }

    #[test]
    fn test_clamped_copy() {
        let wild = MixInputs {
            cement_kg_m3: 1000.0,
            slag_kg_m3: -5.0,
            water_kg_m3: 170.0,
            superplasticizer_kg_m3: 0.0,
            age_days: 400.0,
        };
        let tame = wild.clamped();
        assert_eq!(tame.cement_kg_m3, 540.0);
        assert_eq!(tame.slag_kg_m3, 0.0);
        assert_eq!(tame.water_kg_m3, 170.0);
        assert_eq!(tame.superplasticizer_kg_m3, 1.0);
        assert_eq!(tame.age_days, 365.0);
    }

    #[test]
    fn test_get_matches_set() {
        let mix = MixInputs::default().with(MixField::Slag, 42.0);
        assert_eq!(mix.get(MixField::Slag), 42.0);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(MixInputs::parse_value(MixField::Age, " 56 ").unwrap(), 56.0);

        let err = MixInputs::parse_value(MixField::Age, "a month").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = MixInputs::parse_value(MixField::Cement, "inf").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(MixField::from_name("water_kg_m3").unwrap(), MixField::Water);
        assert_eq!(MixField::from_name("superplasticizer").unwrap(), MixField::Superplasticizer);
        assert_eq!(
            MixField::from_name("fly_ash").unwrap_err(),
            DeckError::unknown_field("fly_ash")
        );
    }

    #[test]
    fn test_serialization_keys() {
        let json = serde_json::to_value(MixInputs::default()).unwrap();
        for field in MixField::ALL {
            assert_eq!(json[field.key()].as_f64(), Some(field.default_value()));
        }
    }
}
