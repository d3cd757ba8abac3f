//! Application of rotations and resets through the host surface.
//!
//! The renderer owns the authoritative per-card [`Visual`] and forwards
//! changes to the host's [`Surface`]. Every operation is idempotent: an
//! operation that leaves the stored visual unchanged never repaints, so
//! duplicate resets or samples (hybrid mouse+touch devices fire both
//! families for one interaction) are unobservable.

use rustc_hash::FxHashMap;

use crate::core::{CardId, TiltConfig};
use crate::geometry::Rotation;

use super::visual::{Shadow, Visual};

/// Host paint seam.
///
/// Called whenever a card's visual state actually changes. Implementations
/// must not block; everything here runs inside a single frame callback.
pub trait Surface {
    /// Paint one card with the given visual state.
    fn paint(&mut self, card: CardId, visual: &Visual);
}

/// Owns per-card visual state and the neutral-reset path.
#[derive(Clone, Debug, Default)]
pub struct TiltRenderer {
    visuals: FxHashMap<CardId, Visual>,
}

impl TiltRenderer {
    /// Create a renderer with every card at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visual for a card. Cards never painted are at rest.
    #[must_use]
    pub fn visual(&self, card: CardId) -> Visual {
        self.visuals.get(&card).copied().unwrap_or(Visual::NEUTRAL)
    }

    /// Apply a tilt rotation plus the elevation cues: scale-up,
    /// directional shadow, z-order lift. The armed highlight is left
    /// as-is so an armed card keeps its affordance while tilting.
    pub fn apply<S: Surface>(
        &mut self,
        card: CardId,
        rotation: Rotation,
        config: &TiltConfig,
        surface: &mut S,
    ) {
        let next = Visual {
            rotate_x: rotation.rotate_x,
            rotate_y: rotation.rotate_y,
            scale: config.scale,
            shadow: Some(Shadow::for_rotation(rotation, config.shadow_blur)),
            raised: true,
            armed: self.visual(card).armed,
        };
        self.commit(card, next, surface);
    }

    /// Restore the neutral visual: rotation (0,0), scale 1, no shadow,
    /// no z-order lift, armed highlight cleared.
    pub fn reset<S: Surface>(&mut self, card: CardId, surface: &mut S) {
        self.commit(card, Visual::NEUTRAL, surface);
    }

    /// Toggle the armed highlight without disturbing the tilt.
    pub fn set_armed<S: Surface>(&mut self, card: CardId, armed: bool, surface: &mut S) {
        let mut next = self.visual(card);
        next.armed = armed;
        self.commit(card, next, surface);
    }

    fn commit<S: Surface>(&mut self, card: CardId, next: Visual, surface: &mut S) {
        if self.visual(card) == next {
            return;
        }
        self.visuals.insert(card, next);
        surface.paint(card, &next);
    }
}
