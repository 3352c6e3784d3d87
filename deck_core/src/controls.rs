//! # Navigation Controls
//!
//! Maps keys and buttons to navigator commands so every front-end shares the
//! same bindings: ArrowRight and Space go forward, ArrowLeft goes back.

use std::time::Instant;

use crate::navigator::{NavOutcome, SlideNavigator};

/// Keys the deck reacts to, independent of any windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKey {
    ArrowRight,
    ArrowLeft,
    Space,
}

/// A navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    Next,
    Prev,
    GoTo(usize),
}

impl NavCommand {
    /// Binding for a key press
    pub fn for_key(key: DeckKey) -> Self {
        match key {
            DeckKey::ArrowRight | DeckKey::Space => NavCommand::Next,
            DeckKey::ArrowLeft => NavCommand::Prev,
        }
    }

    /// Apply this command to a navigator
    pub fn apply(self, nav: &mut SlideNavigator, now: Instant) -> NavOutcome {
        match self {
            NavCommand::Next => nav.next(now),
            NavCommand::Prev => nav.prev(now),
            NavCommand::GoTo(index) => nav.go_to(index, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::TransitionTiming;

    #[test]
    fn test_key_bindings() {
        assert_eq!(NavCommand::for_key(DeckKey::ArrowRight), NavCommand::Next);
        assert_eq!(NavCommand::for_key(DeckKey::Space), NavCommand::Next);
        assert_eq!(NavCommand::for_key(DeckKey::ArrowLeft), NavCommand::Prev);
    }

    #[test]
    fn test_apply_commands() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::new(3, TransitionTiming::instant());

        assert_eq!(
            NavCommand::for_key(DeckKey::Space).apply(&mut nav, t0),
            NavOutcome::Started { from: 3, to: 4 }
        );
        nav.advance(t0);

        assert_eq!(
            NavCommand::Prev.apply(&mut nav, t0),
            NavOutcome::Started { from: 4, to: 3 }
        );
        nav.advance(t0);

        assert!(NavCommand::GoTo(8).apply(&mut nav, t0).accepted());
        nav.advance(t0);
        assert_eq!(nav.current(), 8);
    }
}
