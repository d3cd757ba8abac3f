//! Coalescing of rapid input into at most one visual update per frame.
//!
//! Pointer events arrive faster than the display refreshes. The scheduler
//! records the latest desired rotation per card and the host drains the
//! whole batch exactly once from its display-frame callback. Intermediate
//! samples between two frames are superseded, never queued.

use rustc_hash::FxHashMap;

use crate::core::CardId;
use crate::geometry::Rotation;

/// Last-write-wins rotation buffer, drained once per display frame.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    pending: FxHashMap<CardId, Rotation>,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the desired rotation for a card.
    ///
    /// Replaces any rotation already pending for the card.
    pub fn schedule(&mut self, card: CardId, rotation: Rotation) {
        self.pending.insert(card, rotation);
    }

    /// Discard a pending rotation.
    ///
    /// The reset path uses this so a sample scheduled just before a
    /// leave/end event cannot repaint the card after its reset.
    pub fn cancel(&mut self, card: CardId) {
        self.pending.remove(&card);
    }

    /// Drain everything scheduled since the last drain.
    ///
    /// Call at most once per display refresh interval. Each card appears
    /// at most once, carrying the latest rotation observed. Entries are
    /// ordered by card ID so hosts and tests see a stable order.
    pub fn take_frame(&mut self) -> Vec<(CardId, Rotation)> {
        let mut batch: Vec<_> = self.pending.drain().collect();
        batch.sort_by_key(|(card, _)| card.raw());
        batch
    }

    /// Number of cards with a pending rotation.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting for the next frame.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
