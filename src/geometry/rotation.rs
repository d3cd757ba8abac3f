//! The pointer-to-rotation transform.
//!
//! The tilt maps the pointer's offset from the card center to a pair of
//! rotation angles:
//!
//! - Pointer right of center tilts the right edge away from the viewer
//!   (positive `rotate_y`); left of center tilts it toward the viewer.
//! - Pointer above center tilts the top edge away (positive `rotate_x`);
//!   below center tilts it toward the viewer.
//!
//! The transform is pure and total: degenerate bounds produce the neutral
//! rotation rather than NaN, and samples outside the bounds (fast motion
//! can place the last sample beyond the rectangle) extrapolate naturally;
//! callers bound the result with [`Rotation::clamped`].

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::input::PointerSample;

/// A 3D tilt rotation, both axes in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation around the horizontal axis (up/down tilt).
    pub rotate_x: f32,

    /// Rotation around the vertical axis (left/right tilt).
    pub rotate_y: f32,
}

impl Rotation {
    /// The rest position: no tilt on either axis.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Create a rotation.
    #[must_use]
    pub const fn new(rotate_x: f32, rotate_y: f32) -> Self {
        Self { rotate_x, rotate_y }
    }

    /// Whether this is the rest position.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }

    /// Clamp both axes to `±limit` degrees.
    #[must_use]
    pub fn clamped(self, limit: f32) -> Self {
        Self {
            rotate_x: self.rotate_x.clamp(-limit, limit),
            rotate_y: self.rotate_y.clamp(-limit, limit),
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.rotate_x, self.rotate_y)
    }
}

/// Compute the tilt for a pointer position over a card.
///
/// Pure function of its inputs; never raises. A degenerate rectangle
/// (zero or negative width/height, e.g. a card not yet laid out) yields
/// [`Rotation::NEUTRAL`].
///
/// ```
/// use tilt_deck::{compute_rotation, CardId, PointerSample, Rect};
///
/// let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
///
/// // Pointer at the geometric center: no tilt.
/// let center = PointerSample { card: CardId::new(0), x: 100.0, y: 50.0 };
/// assert!(compute_rotation(&center, bounds, 10.0).is_neutral());
///
/// // Pointer at the top-left corner: top edge away, left edge toward.
/// let corner = PointerSample { card: CardId::new(0), x: 0.0, y: 0.0 };
/// let rotation = compute_rotation(&corner, bounds, 10.0);
/// assert_eq!(rotation.rotate_x, 10.0);
/// assert_eq!(rotation.rotate_y, -10.0);
/// ```
#[must_use]
pub fn compute_rotation(sample: &PointerSample, bounds: Rect, max_degrees: f32) -> Rotation {
    if bounds.is_degenerate() {
        return Rotation::NEUTRAL;
    }

    let mid_x = bounds.width / 2.0;
    let mid_y = bounds.height / 2.0;

    let rel_x = sample.x - bounds.left;
    let rel_y = sample.y - bounds.top;

    Rotation {
        rotate_x: ((mid_y - rel_y) / mid_y) * max_degrees,
        rotate_y: ((rel_x - mid_x) / mid_x) * max_degrees,
    }
}
