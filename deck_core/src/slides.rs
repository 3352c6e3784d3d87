//! # Slide Catalog
//!
//! The fixed, ordered list of slides. The navigator only needs the count;
//! front-ends use [`SlideId`] to pick what to render and to label the dot
//! buttons and the footer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Number of slides in the deck
pub const SLIDE_COUNT: usize = SlideId::ALL.len();

/// Identity of each slide, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideId {
    Title,
    Problem,
    Objectives,
    Data,
    Model,
    FlyAsh,
    Calculator,
    Impact,
    Summary,
}

impl SlideId {
    /// All slides in order
    pub const ALL: [SlideId; 9] = [
        SlideId::Title,
        SlideId::Problem,
        SlideId::Objectives,
        SlideId::Data,
        SlideId::Model,
        SlideId::FlyAsh,
        SlideId::Calculator,
        SlideId::Impact,
        SlideId::Summary,
    ];

    /// Slide at `index`
    pub fn from_index(index: usize) -> DeckResult<Self> {
        SlideId::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DeckError::slide_out_of_range(index, SLIDE_COUNT))
    }

    /// Position of this slide in the deck
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Short human label (dot tooltip, footer)
    pub fn label(&self) -> &'static str {
        match self {
            SlideId::Title => "Title",
            SlideId::Problem => "The Problem",
            SlideId::Objectives => "Objectives",
            SlideId::Data => "Data & Method",
            SlideId::Model => "The Model",
            SlideId::FlyAsh => "Fly Ash Finding",
            SlideId::Calculator => "Live Calculator",
            SlideId::Impact => "Business Impact",
            SlideId::Summary => "Summary",
        }
    }

    /// Footer text, e.g. `"7 / 9 — Live Calculator"`
    pub fn position_label(&self) -> String {
        format!("{} / {} — {}", self.index() + 1, SLIDE_COUNT, self.label())
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_slides() {
        assert_eq!(SLIDE_COUNT, 9);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, slide) in SlideId::ALL.iter().enumerate() {
            assert_eq!(slide.index(), i);
            assert_eq!(SlideId::from_index(i).unwrap(), *slide);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(
            SlideId::from_index(9).unwrap_err(),
            DeckError::slide_out_of_range(9, 9)
        );
    }

    #[test]
    fn test_position_label() {
        assert_eq!(SlideId::Title.position_label(), "1 / 9 — Title");
        assert_eq!(SlideId::Calculator.position_label(), "7 / 9 — Live Calculator");
    }

    #[test]
    fn test_serialized_id() {
        assert_eq!(serde_json::to_string(&SlideId::FlyAsh).unwrap(), "\"fly_ash\"");
    }
}
