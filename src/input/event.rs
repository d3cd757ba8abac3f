//! Device events and their normalized forms.
//!
//! Every event carries the handle of the card it originated on plus page
//! space coordinates; the engine never inspects the host's widget tree
//! itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// A single touch contact point in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub x: f32,
    pub y: f32,
}

impl Contact {
    /// Create a contact point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A raw device event as delivered by the host toolkit.
///
/// Two device families feed the same pipeline:
/// - continuous (fine) pointers report motion and a leave event;
/// - discrete (coarse) pointers report touch drags and a final release.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    /// Fine-pointer motion over a card.
    PointerMove { card: CardId, x: f32, y: f32 },

    /// The fine pointer left the card.
    PointerLeave { card: CardId },

    /// Touch drag over a card. Only the first contact drives the tilt;
    /// contacts beyond the first are ignored.
    /// SmallVec keeps the common one- or two-finger case off the heap.
    TouchMove {
        card: CardId,
        contacts: SmallVec<[Contact; 2]>,
    },

    /// The last touch contact lifted off the card.
    TouchEnd { card: CardId },
}

impl RawInput {
    /// The card this event originated on.
    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            RawInput::PointerMove { card, .. }
            | RawInput::PointerLeave { card }
            | RawInput::TouchMove { card, .. }
            | RawInput::TouchEnd { card } => *card,
        }
    }
}

/// A normalized pointer position, tagged with the originating card.
///
/// Ephemeral: produced and consumed within a single event-to-render
/// cycle, never retained.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub card: CardId,
    pub x: f32,
    pub y: f32,
}

/// What an input event means to the tilt pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputSignal {
    /// Drive the tilt toward this pointer position.
    Sample(PointerSample),

    /// Return the card to its neutral visual.
    Reset(CardId),
}
