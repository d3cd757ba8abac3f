//! The two-stage "arm then navigate" tap state machine.
//!
//! On a coarse-pointer device a tap is the only discoverability signal for
//! the tilt effect, so the first tap on a linked card previews it (arms the
//! card with a visible highlight) and only a second tap within the timeout
//! window navigates. Fine-pointer devices already preview continuously on
//! hover, so a click navigates immediately and this machine is bypassed.
//!
//! States: `Idle` (no card armed) and `Armed(card, token)`: exactly one
//! card armed across the whole collection, with a live auto-disarm timer.
//! Arming any card first disarms all others, and the stale timer is
//! cancelled synchronously before any other transition.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

use super::timer::{TimerHost, TimerToken};

/// Pointer capability at the moment of a tap.
///
/// A capability query, not a mode switch: hosts query the device per tap
/// (e.g. a `pointer: coarse` media query) and pass the result in, which
/// keeps both code paths unit-testable without a real device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerClass {
    /// Mouse-like: reports continuous position without contact.
    Fine,
    /// Touch-like: no stable hover state.
    Coarse,
}

/// Abstract "open target in new context" operation supplied by the host.
pub trait Navigator {
    /// Open a navigation target.
    fn open(&mut self, target: &str);
}

/// What a tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Decorative card (no navigation target): nothing happened.
    Ignored,

    /// The card's target was opened.
    Navigated,

    /// The card entered the armed state. `released` names the previously
    /// armed card, if a different one had to be disarmed first.
    Armed { released: Option<CardId> },

    /// The armed card was released without a replacement (a tap on a
    /// decorative card while another card was armed).
    Released(CardId),
}

impl TapOutcome {
    /// Whether the tap's default action (navigation) was consumed.
    ///
    /// Only the arming tap suppresses its default; the confirming tap and
    /// fine-pointer clicks navigate normally.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        matches!(self, TapOutcome::Armed { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct ArmedCard {
    card: CardId,
    token: TimerToken,
}

/// Per-collection tap state machine.
///
/// Holds the single "currently armed card" reference for the whole deck
/// (enforced procedurally: disarm all others before arming), plus the
/// token generation counter for stale-expiry detection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TapDisambiguator {
    armed: Option<ArmedCard>,
    next_token: u64,
}

impl TapDisambiguator {
    /// Create an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently armed card, if any.
    #[must_use]
    pub fn armed_card(&self) -> Option<CardId> {
        self.armed.map(|a| a.card)
    }

    /// Token of the pending auto-disarm timer, if any. Exposed for hosts
    /// that route expiry deliveries themselves.
    #[must_use]
    pub fn armed_token(&self) -> Option<TimerToken> {
        self.armed.map(|a| a.token)
    }

    /// Feed one tap through the machine.
    ///
    /// `target` is the tapped card's navigation target (`None` marks a
    /// decorative card). Any pending timer is cancelled synchronously
    /// before the rest of the transition, so it can never fire against a
    /// card this tap already disarmed.
    pub fn tap<T: TimerHost, N: Navigator>(
        &mut self,
        card: CardId,
        target: Option<&str>,
        class: PointerClass,
        timeout_ms: u64,
        timers: &mut T,
        navigator: &mut N,
    ) -> TapOutcome {
        // Hover already previews the tilt on fine pointers; commit now.
        if class == PointerClass::Fine {
            return match target {
                Some(t) => {
                    navigator.open(t);
                    TapOutcome::Navigated
                }
                None => TapOutcome::Ignored,
            };
        }

        // Second tap on the armed card: confirm and navigate.
        if let Some(armed) = self.armed {
            if armed.card == card {
                timers.cancel(armed.card, armed.token);
                self.armed = None;
                return match target {
                    Some(t) => {
                        navigator.open(t);
                        TapOutcome::Navigated
                    }
                    // Armed cards carry targets; degrade to a release if
                    // the host mutated the card underneath us.
                    None => TapOutcome::Released(card),
                };
            }
        }

        // Another card was armed: release it first.
        let released = self.disarm(timers);

        match target {
            Some(_) => {
                let token = self.fresh_token();
                timers.start(card, token, timeout_ms);
                self.armed = Some(ArmedCard { card, token });
                TapOutcome::Armed { released }
            }
            None => match released {
                Some(previous) => TapOutcome::Released(previous),
                None => TapOutcome::Ignored,
            },
        }
    }

    /// Timer expiry delivered by the host.
    ///
    /// Returns the card to un-highlight, or `None` when the delivery is
    /// stale, i.e. the card was already disarmed by a faster synchronous path
    /// (second tap, or re-arming another card).
    pub fn handle_timeout(&mut self, card: CardId, token: TimerToken) -> Option<CardId> {
        match self.armed {
            Some(armed) if armed.card == card && armed.token == token => {
                self.armed = None;
                Some(card)
            }
            _ => None,
        }
    }

    fn disarm<T: TimerHost>(&mut self, timers: &mut T) -> Option<CardId> {
        let armed = self.armed.take()?;
        timers.cancel(armed.card, armed.token);
        Some(armed.card)
    }

    fn fresh_token(&mut self) -> TimerToken {
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;
        token
    }
}
