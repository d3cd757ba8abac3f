//! Core types: card handles, bounding rectangles, configuration.
//!
//! Cards are owned by the host page; the engine never creates or destroys
//! them, only mutates their transient visual state. Tunables live in
//! `TiltConfig` rather than being hardcoded.

pub mod card;
pub mod config;

pub use card::{Card, CardId, Rect};
pub use config::TiltConfig;
