//! Wiring of the two input paths over one card collection.
//!
//! The controller owns the cards, the coalescing scheduler, the renderer
//! state, and the tap disambiguator. Hosts drive it from a single event
//! queue:
//!
//! - device events go to [`TiltController::handle_input`];
//! - the display-frame callback calls [`TiltController::on_frame`];
//! - clicks/taps go to [`TiltController::tap`];
//! - auto-disarm expiries come back through
//!   [`TiltController::handle_timeout`].
//!
//! Everything runs to completion on that one queue; there is no interior
//! locking and no interleaving between a tap transition and the next
//! frame's visual update.

use crate::arming::{Navigator, PointerClass, TapDisambiguator, TapOutcome, TimerHost, TimerToken};
use crate::core::{Card, CardId, Rect, TiltConfig};
use crate::frame::FrameScheduler;
use crate::geometry::compute_rotation;
use crate::input::{normalize, InputSignal, RawInput};
use crate::render::{Surface, TiltRenderer, Visual};

/// Controller for one grid of tilt-reactive cards.
///
/// ```
/// use tilt_deck::{CardId, RawInput, Rect, Surface, TiltConfig, TiltController, Visual};
///
/// struct NoopSurface;
/// impl Surface for NoopSurface {
///     fn paint(&mut self, _card: CardId, _visual: &Visual) {}
/// }
///
/// let mut deck = TiltController::new(TiltConfig::new());
/// let card = deck.add_card(Rect::new(0.0, 0.0, 200.0, 100.0), Some("https://x".into()));
///
/// let mut surface = NoopSurface;
/// deck.handle_input(&RawInput::PointerMove { card, x: 50.0, y: 25.0 }, &mut surface);
/// deck.on_frame(&mut surface);
/// assert!(deck.visual(card).raised);
/// ```
#[derive(Clone, Debug)]
pub struct TiltController {
    config: TiltConfig,
    cards: Vec<Card>,
    scheduler: FrameScheduler,
    renderer: TiltRenderer,
    disambiguator: TapDisambiguator,
}

impl TiltController {
    /// Create a controller with no cards.
    #[must_use]
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
            scheduler: FrameScheduler::new(),
            renderer: TiltRenderer::new(),
            disambiguator: TapDisambiguator::new(),
        }
    }

    /// Register a card and get its handle.
    ///
    /// `target` is the navigation destination; `None` for decorative cards.
    pub fn add_card(&mut self, bounds: Rect, target: Option<String>) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push(Card::new(id, bounds, target));
        id
    }

    /// Look up a card by handle.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    /// Refresh a card's bounding rectangle after a layout change.
    /// Unknown handles are ignored.
    pub fn set_bounds(&mut self, id: CardId, bounds: Rect) {
        if let Some(card) = self.cards.get_mut(id.raw() as usize) {
            card.bounds = bounds;
        }
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Current visual state of a card.
    #[must_use]
    pub fn visual(&self, id: CardId) -> Visual {
        self.renderer.visual(id)
    }

    /// The currently armed card, if any.
    #[must_use]
    pub fn armed_card(&self) -> Option<CardId> {
        self.disambiguator.armed_card()
    }

    /// Continuous input path.
    ///
    /// Samples are clamped against the overshoot limit and coalesced for
    /// the next frame. Reset signals bypass the scheduler (there is
    /// exactly one reset per gesture, nothing to coalesce) and also
    /// discard any rotation still pending for the card, so a sample
    /// recorded just before the leave/end cannot repaint it afterwards.
    pub fn handle_input<S: Surface>(&mut self, input: &RawInput, surface: &mut S) {
        if let RawInput::TouchEnd { .. } = input {
            if !self.config.reset_on_release {
                // Variant behavior: the tilt persists after touch release
                // until the next interaction.
                return;
            }
        }

        match normalize(input) {
            Some(InputSignal::Sample(sample)) => {
                let Some(card) = self.cards.get(sample.card.raw() as usize) else {
                    return;
                };
                let rotation = compute_rotation(&sample, card.bounds, self.config.max_degrees)
                    .clamped(self.config.overshoot_limit());
                self.scheduler.schedule(sample.card, rotation);
            }
            Some(InputSignal::Reset(card)) => {
                self.scheduler.cancel(card);
                self.renderer.reset(card, surface);
            }
            None => {}
        }
    }

    /// Display-frame callback: apply every coalesced rotation once.
    pub fn on_frame<S: Surface>(&mut self, surface: &mut S) {
        for (card, rotation) in self.scheduler.take_frame() {
            self.renderer.apply(card, rotation, &self.config, surface);
        }
    }

    /// Discrete input path: a click or tap on a card.
    ///
    /// `class` is the device capability at tap time. Coarse pointers run
    /// the two-stage arm/navigate machine; fine pointers navigate
    /// immediately. Affordance changes are painted before this returns.
    pub fn tap<S: Surface, T: TimerHost, N: Navigator>(
        &mut self,
        card: CardId,
        class: PointerClass,
        timers: &mut T,
        navigator: &mut N,
        surface: &mut S,
    ) -> TapOutcome {
        let Some(target) = self.cards.get(card.raw() as usize).map(|c| c.target.as_deref())
        else {
            return TapOutcome::Ignored;
        };

        let outcome = self.disambiguator.tap(
            card,
            target,
            class,
            self.config.arm_timeout_ms,
            timers,
            navigator,
        );

        match outcome {
            TapOutcome::Armed { released } => {
                if let Some(previous) = released {
                    self.renderer.set_armed(previous, false, surface);
                }
                self.renderer.set_armed(card, true, surface);
            }
            TapOutcome::Navigated => {
                self.renderer.set_armed(card, false, surface);
            }
            TapOutcome::Released(previous) => {
                self.renderer.set_armed(previous, false, surface);
            }
            TapOutcome::Ignored => {}
        }

        outcome
    }

    /// Auto-disarm expiry delivered by the host.
    ///
    /// Returns `true` if the card was still armed and is now cleared; a
    /// stale delivery (the card was disarmed by a faster synchronous path)
    /// is a no-op and returns `false`.
    pub fn handle_timeout<S: Surface>(
        &mut self,
        card: CardId,
        token: TimerToken,
        surface: &mut S,
    ) -> bool {
        match self.disambiguator.handle_timeout(card, token) {
            Some(card) => {
                self.renderer.set_armed(card, false, surface);
                true
            }
            None => false,
        }
    }
}
