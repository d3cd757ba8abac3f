//! Per-card visual descriptors.
//!
//! The engine computes these; how they are painted (CSS transforms, a
//! retained-mode canvas, ...) is the host's business.

use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;

/// Directional shadow cue.
///
/// The offset is `(-rotate_y, rotate_x)` so the shadow falls opposite the
/// simulated light source as the card tilts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
}

impl Shadow {
    /// Shadow matching a tilt rotation.
    #[must_use]
    pub fn for_rotation(rotation: Rotation, blur: f32) -> Self {
        Self {
            offset_x: -rotation.rotate_y,
            offset_y: rotation.rotate_x,
            blur,
        }
    }
}

/// Everything the host needs to paint one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    /// Tilt around the horizontal axis, degrees.
    pub rotate_x: f32,

    /// Tilt around the vertical axis, degrees.
    pub rotate_y: f32,

    /// Uniform scale factor; above 1 conveys elevation while tilted.
    pub scale: f32,

    /// Directional shadow, absent at rest.
    pub shadow: Option<Shadow>,

    /// Lift the card above its neighbors (z-order) while tilted.
    pub raised: bool,

    /// Armed highlight from the two-stage tap flow.
    pub armed: bool,
}

impl Visual {
    /// The rest state: no tilt, no scale-up, no shadow, no highlight.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        shadow: None,
        raised: false,
        armed: false,
    };

    /// Whether this is the rest state.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
