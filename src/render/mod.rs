//! Tilt renderer: per-card visual state and the host paint seam.

pub mod renderer;
pub mod visual;

pub use renderer::{Surface, TiltRenderer};
pub use visual::{Shadow, Visual};
