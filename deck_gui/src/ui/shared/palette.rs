//! Deck colours
//!
//! A dark stage with warm amber highlights. Accents from slide content map
//! onto the fixed set below.

use iced::Color;

use deck_core::content::Accent;
use deck_core::StrengthTier;

pub const BACKGROUND: Color = Color::from_rgb(0.047, 0.047, 0.047);
pub const TEXT: Color = Color::from_rgb(0.980, 0.980, 0.976);
pub const FORMULA_TEXT: Color = Color::from_rgb(0.961, 0.851, 0.565);

pub const AMBER: Color = Color::from_rgb(0.961, 0.620, 0.043);
pub const RED: Color = Color::from_rgb(0.937, 0.267, 0.267);
pub const GREEN: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const INDIGO: Color = Color::from_rgb(0.388, 0.400, 0.945);
pub const BLUE: Color = Color::from_rgb(0.231, 0.510, 0.965);
pub const PURPLE: Color = Color::from_rgb(0.659, 0.333, 0.969);

/// White at `alpha`, used for muted text and hairlines
pub fn white(alpha: f32) -> Color {
    Color { a: alpha, ..Color::WHITE }
}

/// `color` at `alpha`
pub fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub fn accent(accent: Accent) -> Color {
    match accent {
        Accent::Amber => AMBER,
        Accent::Red => RED,
        Accent::Green => GREEN,
        Accent::Indigo => INDIGO,
        Accent::Blue => BLUE,
        Accent::Purple => PURPLE,
    }
}

pub fn tier(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::MeetsTarget => GREEN,
        StrengthTier::Borderline => AMBER,
        StrengthTier::BelowThreshold => RED,
    }
}
