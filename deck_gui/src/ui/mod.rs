//! UI module for the StrataForge deck
//!
//! # Layout
//! - `stage` - The slide area: heading block, fade overlay, dispatch to slide bodies
//! - `nav_bar` - Prev button, one dot per slide, Next button, position label
//!
//! # Slide Bodies
//! - `slide_text` - Tags, risk cards, objectives, method steps, takeaways
//! - `slide_model` - Formula with fit statistics, hypothesis test results
//! - `slide_calculator` - Mix sliders and live prediction
//! - `slide_impact` - Project cost comparison
//!
//! # Shared Components
//! - `shared/palette` - Colours
//! - `shared/blocks` - Badge, panel, stat card, formula block
//! - `shared/divider` - Accent bar

pub mod nav_bar;
pub mod stage;

pub mod slide_calculator;
pub mod slide_impact;
pub mod slide_model;
pub mod slide_text;

pub mod shared;
