//! Tap disambiguation: the coarse-pointer "arm then navigate" machine.

pub mod machine;
pub mod timer;

pub use machine::{Navigator, PointerClass, TapDisambiguator, TapOutcome};
pub use timer::{TimerHost, TimerToken};
