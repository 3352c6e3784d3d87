//! # deck_core - StrataForge Presentation Engine
//!
//! `deck_core` holds everything in the StrataForge concrete-strength deck
//! that is not drawing: the slide navigation state machine, the regression
//! estimate behind the live calculator, the slide catalog and its copy, and
//! the settings and logging shared by the front-ends.
//!
//! ## Design Philosophy
//!
//! - **Stateless calculations**: pure functions from input to result
//! - **Clock-driven navigation**: callers pass `Instant`s, nothing sleeps
//! - **JSON-First**: inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: structured error types at the edges
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::calculations::{estimate, MixInputs};
//!
//! let result = estimate(&MixInputs::default());
//! println!("{} MPa, {} per m³", result.strength_display(), result.saving_display());
//! ```
//!
//! ## Modules
//!
//! - [`navigator`] - Slide index state machine with fade transitions
//! - [`controls`] - Key bindings and navigation commands
//! - [`calculations`] - Mix inputs, strength estimate, impact comparison
//! - [`slides`] - Slide identities and labels
//! - [`content`] - Static slide copy
//! - [`settings`] - Optional JSON settings
//! - [`errors`] - Structured error types
//! - [`logging`] - Tracing subscriber setup

pub mod calculations;
pub mod content;
pub mod controls;
pub mod errors;
pub mod logging;
pub mod navigator;
pub mod settings;
pub mod slides;

// Re-export commonly used types at crate root for convenience
pub use calculations::{estimate, MixField, MixInputs, PredictionResult, StrengthTier};
pub use controls::{DeckKey, NavCommand};
pub use errors::{DeckError, DeckResult};
pub use navigator::{NavOutcome, SlideNavigator, TransitionTiming};
pub use settings::DeckSettings;
pub use slides::{SlideId, SLIDE_COUNT};
