//! # tilt-deck
//!
//! A host-agnostic engine for a pointer-reactive 3D tilt illusion on a grid
//! of interactive cards, including the coarse-pointer "arm then navigate"
//! two-stage tap behavior.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The crate computes rotations, visuals, and
//!    navigation decisions. Event dispatch, painting, timers, and the
//!    actual navigation belong to the host, reached through the
//!    `Surface`, `TimerHost`, and `Navigator` traits.
//!
//! 2. **Explicit Handles**: Cards are addressed by `CardId`, never by
//!    closure capture, so the tap state machine is testable without a
//!    UI toolkit.
//!
//! 3. **Configuration Over Convention**: Every tunable (tilt range,
//!    overshoot clamp, scale, shadow, arm timeout) lives in `TiltConfig`.
//!
//! ## Architecture
//!
//! Two input paths share only the card's identity and its reset:
//!
//! - **Continuous**: raw event → input multiplexer → geometry engine →
//!   frame scheduler → tilt renderer. Samples are coalesced to at most
//!   one visual update per display frame, last write wins.
//!
//! - **Discrete**: tap → tap disambiguator → (arm card | navigate).
//!   Coarse pointers preview on the first tap and commit on the second;
//!   fine pointers commit immediately because hover already previews.
//!
//! ## Modules
//!
//! - `core`: card handles, bounding rectangles, configuration
//! - `geometry`: pointer position → rotation transform
//! - `input`: normalization of mouse and touch events into one stream
//! - `frame`: per-frame coalescing of rotation updates
//! - `render`: per-card visual state and the host paint seam
//! - `arming`: the coarse-pointer two-stage tap state machine
//! - `controller`: the deck controller wiring everything together

pub mod core;
pub mod geometry;
pub mod input;
pub mod frame;
pub mod render;
pub mod arming;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{Card, CardId, Rect, TiltConfig};

pub use crate::geometry::{compute_rotation, Rotation};

pub use crate::input::{normalize, Contact, InputSignal, PointerSample, RawInput};

pub use crate::frame::FrameScheduler;

pub use crate::render::{Shadow, Surface, TiltRenderer, Visual};

pub use crate::arming::{
    Navigator, PointerClass, TapDisambiguator, TapOutcome, TimerHost, TimerToken,
};

pub use crate::controller::TiltController;
