//! Discrete-path integration tests: tap disambiguation end to end.
//!
//! A fake timer host holds the pending auto-disarm timer and delivers (or
//! drops) its expiry on demand, standing in for the platform's one-shot
//! delayed callback.

use tilt_deck::{
    CardId, Navigator, PointerClass, Rect, Surface, TapOutcome, TiltConfig, TiltController,
    TimerHost, TimerToken, Visual,
};

#[derive(Default)]
struct RecordingSurface {
    paints: Vec<(CardId, Visual)>,
}

impl Surface for RecordingSurface {
    fn paint(&mut self, card: CardId, visual: &Visual) {
        self.paints.push((card, *visual));
    }
}

/// Timer host that keeps at most the latest pending timer, like a browser
/// holding a `setTimeout` handle.
#[derive(Default)]
struct FakeTimers {
    pending: Option<(CardId, TimerToken, u64)>,
    cancelled: Vec<(CardId, TimerToken)>,
}

impl FakeTimers {
    /// Deliver the pending expiry to the controller, as the platform
    /// would when the timeout elapses.
    fn fire(&mut self, deck: &mut TiltController, surface: &mut RecordingSurface) -> bool {
        let (card, token, _) = self.pending.take().expect("no pending timer");
        deck.handle_timeout(card, token, surface)
    }
}

impl TimerHost for FakeTimers {
    fn start(&mut self, card: CardId, token: TimerToken, duration_ms: u64) {
        self.pending = Some((card, token, duration_ms));
    }

    fn cancel(&mut self, card: CardId, token: TimerToken) {
        self.cancelled.push((card, token));
        if self.pending.map(|(c, t, _)| (c, t)) == Some((card, token)) {
            self.pending = None;
        }
    }
}

#[derive(Default)]
struct RecordingNavigator {
    opened: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn open(&mut self, target: &str) {
        self.opened.push(target.to_string());
    }
}

struct Fixture {
    deck: TiltController,
    surface: RecordingSurface,
    timers: FakeTimers,
    nav: RecordingNavigator,
}

impl Fixture {
    fn new() -> (Self, CardId, CardId) {
        let mut deck = TiltController::new(TiltConfig::new());
        let a = deck.add_card(Rect::new(0.0, 0.0, 200.0, 100.0), Some("https://x".into()));
        let b = deck.add_card(Rect::new(0.0, 120.0, 200.0, 100.0), Some("https://y".into()));
        let fixture = Self {
            deck,
            surface: RecordingSurface::default(),
            timers: FakeTimers::default(),
            nav: RecordingNavigator::default(),
        };
        (fixture, a, b)
    }

    fn tap(&mut self, card: CardId, class: PointerClass) -> TapOutcome {
        self.deck.tap(
            card,
            class,
            &mut self.timers,
            &mut self.nav,
            &mut self.surface,
        )
    }
}

// =============================================================================
// Coarse pointer: the two-stage flow
// =============================================================================

/// First tap arms and suppresses navigation; second tap navigates; a third
/// tap finds a fresh idle state and re-arms.
#[test]
fn test_arm_confirm_rearm_cycle() {
    let (mut fx, a, _b) = Fixture::new();

    let first = fx.tap(a, PointerClass::Coarse);
    assert_eq!(first, TapOutcome::Armed { released: None });
    assert!(first.suppresses_default());
    assert!(fx.nav.opened.is_empty());
    assert!(fx.deck.visual(a).armed);
    assert_eq!(fx.deck.armed_card(), Some(a));
    // The highlight was painted, not just recorded.
    assert!(fx.surface.paints.iter().any(|(c, v)| *c == a && v.armed));

    let second = fx.tap(a, PointerClass::Coarse);
    assert_eq!(second, TapOutcome::Navigated);
    assert!(!second.suppresses_default());
    assert_eq!(fx.nav.opened, vec!["https://x"]);
    assert!(!fx.deck.visual(a).armed);
    assert_eq!(fx.deck.armed_card(), None);

    let third = fx.tap(a, PointerClass::Coarse);
    assert_eq!(third, TapOutcome::Armed { released: None });
    assert_eq!(fx.nav.opened.len(), 1);
}

/// The arm timeout disarms with no navigation and clears the highlight.
#[test]
fn test_timeout_disarms_and_clears_highlight() {
    let (mut fx, a, _b) = Fixture::new();

    fx.tap(a, PointerClass::Coarse);
    assert!(fx.deck.visual(a).armed);
    assert_eq!(fx.timers.pending.unwrap().2, 2000);

    assert!(fx.timers.fire(&mut fx.deck, &mut fx.surface));

    assert_eq!(fx.deck.armed_card(), None);
    assert!(!fx.deck.visual(a).armed);
    assert!(fx.nav.opened.is_empty());

    // Back to idle: the next tap arms rather than navigating.
    assert_eq!(fx.tap(a, PointerClass::Coarse), TapOutcome::Armed { released: None });
}

/// Arming B while A is armed cancels A's timer, clears A's highlight, and
/// gives B a fresh timer; a later tap on A starts a new cycle.
#[test]
fn test_rearm_moves_the_armed_singleton() {
    let (mut fx, a, b) = Fixture::new();

    fx.tap(a, PointerClass::Coarse);
    let token_a = fx.timers.pending.unwrap().1;

    let outcome = fx.tap(b, PointerClass::Coarse);
    assert_eq!(outcome, TapOutcome::Armed { released: Some(a) });
    assert_eq!(fx.deck.armed_card(), Some(b));
    assert!(!fx.deck.visual(a).armed);
    assert!(fx.deck.visual(b).armed);
    assert_eq!(fx.timers.cancelled, vec![(a, token_a)]);
    assert_ne!(fx.timers.pending.unwrap().1, token_a);

    // Not A's second tap: A re-arms instead of navigating.
    let outcome = fx.tap(a, PointerClass::Coarse);
    assert_eq!(outcome, TapOutcome::Armed { released: Some(b) });
    assert!(fx.nav.opened.is_empty());
}

/// At most one card is armed at any time, whatever the tap sequence.
#[test]
fn test_at_most_one_armed_card() {
    let (mut fx, a, b) = Fixture::new();

    fx.tap(a, PointerClass::Coarse);
    fx.tap(b, PointerClass::Coarse);
    fx.tap(a, PointerClass::Coarse);

    let cards = [a, b];
    let armed: Vec<_> = cards
        .iter()
        .filter(|&&c| fx.deck.visual(c).armed)
        .collect();
    assert_eq!(armed.len(), 1);
    assert_eq!(fx.deck.armed_card(), Some(a));
}

/// A stale expiry (platform dropped the cancellation) degrades to a no-op
/// instead of disarming the newly armed card.
#[test]
fn test_stale_timer_is_harmless() {
    let (mut fx, a, b) = Fixture::new();

    fx.tap(a, PointerClass::Coarse);
    let stale = fx.timers.pending.unwrap();
    fx.tap(b, PointerClass::Coarse);

    // Re-inject A's timer as if the cancel never happened.
    let handled = fx.deck.handle_timeout(stale.0, stale.1, &mut fx.surface);

    assert!(!handled);
    assert_eq!(fx.deck.armed_card(), Some(b));
    assert!(fx.deck.visual(b).armed);
}

// =============================================================================
// Fine pointer: the machine is bypassed
// =============================================================================

/// A fine-pointer click navigates immediately, no arming stage.
#[test]
fn test_fine_click_navigates_immediately() {
    let (mut fx, a, _b) = Fixture::new();

    let outcome = fx.tap(a, PointerClass::Fine);

    assert_eq!(outcome, TapOutcome::Navigated);
    assert_eq!(fx.nav.opened, vec!["https://x"]);
    assert_eq!(fx.deck.armed_card(), None);
    assert!(fx.timers.pending.is_none());
}

/// The capability check happens per tap: a coarse tap can arm a card and
/// a fine click on the same grid still navigates directly.
#[test]
fn test_mixed_pointer_classes_per_tap() {
    let (mut fx, a, b) = Fixture::new();

    fx.tap(a, PointerClass::Coarse);
    let outcome = fx.tap(b, PointerClass::Fine);

    assert_eq!(outcome, TapOutcome::Navigated);
    assert_eq!(fx.nav.opened, vec!["https://y"]);
    // The fine click bypassed the machine: A stays armed.
    assert_eq!(fx.deck.armed_card(), Some(a));
}

// =============================================================================
// Decorative cards
// =============================================================================

/// Taps on a card without a navigation target are no-ops, not errors.
#[test]
fn test_decorative_card_taps_are_noops() {
    let (mut fx, _a, _b) = Fixture::new();
    let plain = fx.deck.add_card(Rect::new(0.0, 240.0, 200.0, 100.0), None);

    assert_eq!(fx.tap(plain, PointerClass::Coarse), TapOutcome::Ignored);
    assert_eq!(fx.tap(plain, PointerClass::Fine), TapOutcome::Ignored);
    assert!(fx.nav.opened.is_empty());
    assert!(fx.timers.pending.is_none());
}

/// Tapping a decorative card while another card is armed releases it.
#[test]
fn test_decorative_tap_releases_armed_card() {
    let (mut fx, a, _b) = Fixture::new();
    let plain = fx.deck.add_card(Rect::new(0.0, 240.0, 200.0, 100.0), None);

    fx.tap(a, PointerClass::Coarse);
    let outcome = fx.tap(plain, PointerClass::Coarse);

    assert_eq!(outcome, TapOutcome::Released(a));
    assert!(!fx.deck.visual(a).armed);
    assert_eq!(fx.deck.armed_card(), None);
    assert!(fx.timers.pending.is_none());
}
