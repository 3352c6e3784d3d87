//! # Calculations
//!
//! The arithmetic behind the calculator and impact slides. Each calculation
//! follows the pattern:
//!
//! - an input type (JSON-serializable)
//! - a result type (JSON-serializable)
//! - a pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`mix`] - The five bounded mix inputs and their clamping rules
//! - [`strength`] - Regression estimate, cost saving and strength tier
//! - [`impact`] - Project-scale cement cost comparison

pub mod impact;
pub mod mix;
pub mod strength;

// Re-export commonly used types
pub use impact::{ImpactScenario, ImpactSummary};
pub use mix::{MixField, MixInputs};
pub use strength::{estimate, PredictionResult, StrengthTier};
