//! # Slide Navigator
//!
//! Bounded, sequential traversal of the deck with a two-step fade between
//! slides. The navigator is a clock-driven state machine: callers pass the
//! current [`Instant`] into every request and call [`SlideNavigator::advance`]
//! from a timer while [`SlideNavigator::is_transitioning`] is true. Nothing
//! here blocks or spawns.
//!
//! ## States
//!
//! ```text
//! Idle(i) --go_to(j), j != i--> Leaving(i -> j)
//! Leaving(i -> j)  --fade_out elapsed--> Entering(j)
//! Entering(j)      --fade_in elapsed-->  Idle(j)
//! ```
//!
//! `Leaving` and `Entering` together are the transitioning state. A request
//! that arrives during either is dropped, not queued.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use deck_core::navigator::{NavOutcome, SlideNavigator};
//!
//! let start = Instant::now();
//! let mut nav = SlideNavigator::default();
//!
//! assert_eq!(nav.next(start), NavOutcome::Started { from: 0, to: 1 });
//! assert_eq!(nav.next(start), NavOutcome::Busy);
//!
//! nav.advance(start + Duration::from_millis(250));
//! assert_eq!(nav.current(), 1);
//! assert!(!nav.is_transitioning());
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::slides::SLIDE_COUNT;

/// Delays of the two transition steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    /// Time the outgoing slide takes to fade out before the index swaps (ms)
    pub fade_out_ms: u64,
    /// Time after the swap before new requests are accepted again (ms)
    pub fade_in_ms: u64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        TransitionTiming {
            fade_out_ms: 200,
            fade_in_ms: 50,
        }
    }
}

impl TransitionTiming {
    /// Zero-length transitions; the swap happens on the next `advance`.
    pub fn instant() -> Self {
        TransitionTiming {
            fade_out_ms: 0,
            fade_in_ms: 0,
        }
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

/// Where the navigator is in its transition cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resting on the current slide
    Idle,
    /// Fading the current slide out; `to` becomes current when this ends
    Leaving { to: usize, since: Instant },
    /// Fading the (already swapped) current slide in
    Entering { since: Instant },
}

/// What happened to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A transition from `from` to `to` is now in flight
    Started { from: usize, to: usize },
    /// The target is the current slide (includes `next` on the last slide
    /// and `prev` on the first)
    AlreadyThere,
    /// Dropped because another transition is in flight
    Busy,
    /// Dropped because the index is outside the deck
    OutOfRange,
}

impl NavOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, NavOutcome::Started { .. })
    }
}

/// Slide index state machine with a single in-flight transition slot.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    current: usize,
    count: usize,
    phase: Phase,
    timing: TransitionTiming,
}

impl Default for SlideNavigator {
    fn default() -> Self {
        SlideNavigator {
            current: 0,
            count: SLIDE_COUNT,
            phase: Phase::Idle,
            timing: TransitionTiming::default(),
        }
    }
}

impl SlideNavigator {
    /// Navigator over the standard deck, starting at `start` (clamped).
    pub fn new(start: usize, timing: TransitionTiming) -> Self {
        SlideNavigator {
            current: start.min(SLIDE_COUNT - 1),
            count: SLIDE_COUNT,
            phase: Phase::Idle,
            timing,
        }
    }

    /// Navigator over a deck of any non-zero size
    pub fn with_slide_count(count: usize, timing: TransitionTiming) -> DeckResult<Self> {
        if count == 0 {
            return Err(DeckError::invalid_input("slide_count", "0", "A deck needs at least one slide"));
        }
        Ok(SlideNavigator {
            current: 0,
            count,
            phase: Phase::Idle,
            timing,
        })
    }

    /// Index of the slide being shown
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Request a move to `target`.
    pub fn go_to(&mut self, target: usize, now: Instant) -> NavOutcome {
        if self.is_transitioning() {
            tracing::debug!(requested = target, current = self.current, "navigation dropped: transition in flight");
            return NavOutcome::Busy;
        }
        if target >= self.count {
            tracing::debug!(requested = target, count = self.count, "navigation dropped: index out of range");
            return NavOutcome::OutOfRange;
        }
        if target == self.current {
            return NavOutcome::AlreadyThere;
        }

        let from = self.current;
        self.phase = Phase::Leaving { to: target, since: now };
        tracing::debug!(from, to = target, "slide transition started");
        NavOutcome::Started { from, to: target }
    }

    /// Move one slide forward; no-op on the last slide
    pub fn next(&mut self, now: Instant) -> NavOutcome {
        let target = (self.current + 1).min(self.count - 1);
        self.go_to(target, now)
    }

    /// Move one slide back; no-op on the first slide
    pub fn prev(&mut self, now: Instant) -> NavOutcome {
        let target = self.current.saturating_sub(1);
        self.go_to(target, now)
    }

    /// Drive the transition forward to `now`.
    ///
    /// Returns true if the phase or index changed. Both steps can complete in
    /// one call if enough time has passed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Phase::Leaving { to, since } = self.phase {
            let swap_at = since + self.timing.fade_out();
            if now < swap_at {
                return false;
            }
            self.current = to;
            self.phase = Phase::Entering { since: swap_at };
            changed = true;
        }

        if let Phase::Entering { since } = self.phase {
            if now >= since + self.timing.fade_in() {
                self.phase = Phase::Idle;
                tracing::debug!(current = self.current, "slide transition finished");
                changed = true;
            }
        }

        changed
    }

    /// Opacity of the slide stage at `now`, from 0.0 (hidden) to 1.0.
    ///
    /// Falls linearly while leaving and rises while entering.
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Leaving { since, .. } => 1.0 - progress(since, now, self.timing.fade_out()),
            Phase::Entering { since } => progress(since, now, self.timing.fade_in()),
        }
    }
}

fn progress(since: Instant, now: Instant, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Issue a request and let it run to completion
    fn settle(nav: &mut SlideNavigator, now: Instant) -> Instant {
        let done = now + ms(1_000);
        nav.advance(done);
        done
    }

    #[test]
    fn test_go_to_every_index() {
        for target in 0..SLIDE_COUNT {
            for start in 0..SLIDE_COUNT {
                let t0 = Instant::now();
                let mut nav = SlideNavigator::new(start, TransitionTiming::default());
                nav.go_to(target, t0);
                settle(&mut nav, t0);
                assert_eq!(nav.current(), target, "from {start} to {target}");
                assert!(!nav.is_transitioning());
            }
        }
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::new(4, TransitionTiming::default());
        assert_eq!(nav.go_to(4, t0), NavOutcome::AlreadyThere);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn test_boundaries_do_not_wrap() {
        let t0 = Instant::now();
        let mut first = SlideNavigator::default();
        assert_eq!(first.prev(t0), NavOutcome::AlreadyThere);
        assert_eq!(first.current(), 0);
        assert!(!first.is_transitioning());

        let mut last = SlideNavigator::new(SLIDE_COUNT - 1, TransitionTiming::default());
        assert!(last.is_last());
        assert_eq!(last.next(t0), NavOutcome::AlreadyThere);
        assert_eq!(last.current(), SLIDE_COUNT - 1);
        assert!(!last.is_transitioning());
    }

    #[test]
    fn test_request_during_transition_is_dropped() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::default();

        assert!(nav.go_to(5, t0).accepted());
        assert_eq!(nav.go_to(2, t0 + ms(100)), NavOutcome::Busy);

        // still dropped after the swap, during the fade-in
        nav.advance(t0 + ms(210));
        assert_eq!(nav.current(), 5);
        assert!(nav.is_transitioning());
        assert_eq!(nav.next(t0 + ms(220)), NavOutcome::Busy);

        settle(&mut nav, t0);
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn test_two_step_timing() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::default();
        nav.next(t0);

        assert!(!nav.advance(t0 + ms(199)));
        assert_eq!(nav.current(), 0);

        assert!(nav.advance(t0 + ms(200)));
        assert_eq!(nav.current(), 1);
        assert!(matches!(nav.phase(), Phase::Entering { .. }));

        assert!(!nav.advance(t0 + ms(249)));
        assert!(nav.is_transitioning());

        assert!(nav.advance(t0 + ms(250)));
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn test_late_tick_completes_both_steps() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::default();
        nav.go_to(8, t0);
        assert!(nav.advance(t0 + ms(5_000)));
        assert_eq!(nav.current(), 8);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_instant_timing() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::new(0, TransitionTiming::instant());
        nav.next(t0);
        assert!(nav.advance(t0));
        assert_eq!(nav.current(), 1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::default();
        assert_eq!(nav.go_to(SLIDE_COUNT, t0), NavOutcome::OutOfRange);
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_start_index_is_clamped() {
        let nav = SlideNavigator::new(42, TransitionTiming::default());
        assert_eq!(nav.current(), SLIDE_COUNT - 1);
    }

    #[test]
    fn test_sequential_walk() {
        let mut now = Instant::now();
        let mut nav = SlideNavigator::default();
        for expected in 1..SLIDE_COUNT {
            assert!(nav.next(now).accepted());
            now = settle(&mut nav, now);
            assert_eq!(nav.current(), expected);
        }
        assert_eq!(nav.next(now), NavOutcome::AlreadyThere);

        for expected in (0..SLIDE_COUNT - 1).rev() {
            assert!(nav.prev(now).accepted());
            now = settle(&mut nav, now);
            assert_eq!(nav.current(), expected);
        }
        assert!(nav.is_first());
    }

    #[test]
    fn test_visibility_curve() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::default();
        assert_eq!(nav.visibility(t0), 1.0);

        nav.next(t0);
        assert!((nav.visibility(t0 + ms(100)) - 0.5).abs() < 1e-3);
        assert_eq!(nav.visibility(t0 + ms(300)), 0.0);

        nav.advance(t0 + ms(200));
        assert_eq!(nav.visibility(t0 + ms(200)), 0.0);
        assert!((nav.visibility(t0 + ms(225)) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_custom_slide_count() {
        let t0 = Instant::now();
        let mut nav = SlideNavigator::with_slide_count(2, TransitionTiming::instant()).unwrap();
        nav.next(t0);
        nav.advance(t0);
        assert!(nav.is_last());
        assert_eq!(nav.next(t0), NavOutcome::AlreadyThere);

        let err = SlideNavigator::with_slide_count(0, TransitionTiming::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_timing_deserializes_with_defaults() {
        let timing: TransitionTiming = serde_json::from_str(r#"{ "fade_out_ms": 120 }"#).unwrap();
        assert_eq!(timing.fade_out_ms, 120);
        assert_eq!(timing.fade_in_ms, 50);
    }
}
