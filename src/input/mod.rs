//! Input multiplexer: mouse and touch events normalized into one stream.

pub mod event;
pub mod mux;

pub use event::{Contact, InputSignal, PointerSample, RawInput};
pub use mux::normalize;
