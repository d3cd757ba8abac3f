//! Geometry engine: pointer position → tilt rotation.

pub mod rotation;

pub use rotation::{compute_rotation, Rotation};
