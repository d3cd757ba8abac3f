//! Normalization of device-specific events.
//!
//! Downstream code never sees device families: mouse motion and the first
//! touch contact both become a [`PointerSample`]; pointer-leave and
//! touch-end both become a reset signal. Hybrid devices that fire both
//! families for one interaction are harmless because duplicate samples
//! and resets are idempotent at the renderer.

use super::event::{InputSignal, PointerSample, RawInput};

/// Normalize one raw event into a pipeline signal.
///
/// Returns `None` for events with nothing to say (a touch-move with no
/// active contacts).
///
/// ```
/// use tilt_deck::{normalize, CardId, InputSignal, RawInput};
///
/// let card = CardId::new(0);
/// let signal = normalize(&RawInput::PointerLeave { card });
/// assert_eq!(signal, Some(InputSignal::Reset(card)));
/// ```
#[must_use]
pub fn normalize(input: &RawInput) -> Option<InputSignal> {
    match input {
        RawInput::PointerMove { card, x, y } => Some(InputSignal::Sample(PointerSample {
            card: *card,
            x: *x,
            y: *y,
        })),
        RawInput::PointerLeave { card } => Some(InputSignal::Reset(*card)),
        RawInput::TouchMove { card, contacts } => {
            // First contact only; extra fingers are ignored.
            contacts.first().map(|contact| {
                InputSignal::Sample(PointerSample {
                    card: *card,
                    x: contact.x,
                    y: contact.y,
                })
            })
        }
        RawInput::TouchEnd { card } => Some(InputSignal::Reset(*card)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;
    use crate::input::Contact;
    use smallvec::smallvec;

    #[test]
    fn test_pointer_move_is_sample() {
        let card = CardId::new(0);
        let signal = normalize(&RawInput::PointerMove { card, x: 12.0, y: 34.0 });

        assert_eq!(
            signal,
            Some(InputSignal::Sample(PointerSample { card, x: 12.0, y: 34.0 }))
        );
    }

    #[test]
    fn test_pointer_leave_is_reset() {
        let card = CardId::new(1);
        assert_eq!(
            normalize(&RawInput::PointerLeave { card }),
            Some(InputSignal::Reset(card))
        );
    }

    #[test]
    fn test_touch_move_uses_first_contact_only() {
        let card = CardId::new(2);
        let signal = normalize(&RawInput::TouchMove {
            card,
            contacts: smallvec![Contact::new(5.0, 6.0), Contact::new(99.0, 99.0)],
        });

        assert_eq!(
            signal,
            Some(InputSignal::Sample(PointerSample { card, x: 5.0, y: 6.0 }))
        );
    }

    #[test]
    fn test_touch_move_without_contacts_is_silent() {
        let card = CardId::new(2);
        let signal = normalize(&RawInput::TouchMove {
            card,
            contacts: smallvec![],
        });

        assert_eq!(signal, None);
    }

    #[test]
    fn test_touch_end_is_reset() {
        let card = CardId::new(3);
        assert_eq!(
            normalize(&RawInput::TouchEnd { card }),
            Some(InputSignal::Reset(card))
        );
    }

    #[test]
    fn test_mouse_and_touch_agree() {
        // A hybrid device firing both families for the same position
        // yields the same sample either way.
        let card = CardId::new(4);
        let mouse = normalize(&RawInput::PointerMove { card, x: 7.0, y: 8.0 });
        let touch = normalize(&RawInput::TouchMove {
            card,
            contacts: smallvec![Contact::new(7.0, 8.0)],
        });

        assert_eq!(mouse, touch);
    }
}
