//! Card identification and geometry.
//!
//! Every interactive surface in the grid has a `CardId` handle. Handles are
//! passed explicitly through event dispatch instead of being captured in
//! per-card closures, which keeps the tap state machine's transition table
//! testable independent of any UI toolkit.
//!
//! ## Usage
//!
//! ```
//! use tilt_deck::{Card, CardId, Rect};
//!
//! let bounds = Rect::new(40.0, 120.0, 200.0, 100.0);
//! let card = Card::new(CardId::new(0), bounds, Some("https://example.com".into()));
//!
//! assert!(card.is_interactive());
//! assert!(!card.bounds.is_degenerate());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in the deck.
///
/// Allocated densely by the controller in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Axis-aligned bounding rectangle in page coordinates.
///
/// Mutable over a card's lifetime: the host refreshes it whenever layout
/// changes (resize, reflow, scroll-dependent positioning).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A card not yet laid out reports zero (or negative) size.
    ///
    /// The tilt math treats a degenerate rectangle as "no rotation"
    /// instead of dividing by zero.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Geometric center of the rectangle, in page coordinates.
    #[must_use]
    pub fn center(self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A visual surface in the grid.
///
/// The navigation target is a URL-like string; `None` marks a decorative,
/// non-interactive card. Rotation and armed state are transient and live
/// in the renderer and disambiguator, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Handle for this card.
    pub id: CardId,

    /// Bounding rectangle; updated by the host as layout changes.
    pub bounds: Rect,

    /// Navigation target. `None` for decorative cards.
    pub target: Option<String>,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, bounds: Rect, target: Option<String>) -> Self {
        Self { id, bounds, target }
    }

    /// Whether tapping this card can ever navigate.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.target.is_some()
    }
}
