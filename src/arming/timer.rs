//! Host timer seam for the auto-disarm countdown.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Generation token for a pending auto-disarm timer.
///
/// Every arm gets a fresh token. The host hands the token back when the
/// timer fires; a delivery whose token no longer matches the armed card is
/// stale and degrades to a no-op instead of clearing someone else's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl TimerToken {
    /// Create a token.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// One-shot delayed callback owned by the host.
///
/// `start` schedules a single expiry which the host later feeds back via
/// `TiltController::handle_timeout` with the same card and token. `cancel`
/// is best-effort: even when a platform drops the cancellation, the token
/// re-check keeps the stale expiry harmless.
pub trait TimerHost {
    /// Schedule a one-shot timer.
    fn start(&mut self, card: CardId, token: TimerToken, duration_ms: u64);

    /// Cancel a previously started timer.
    fn cancel(&mut self, card: CardId, token: TimerToken);
}
