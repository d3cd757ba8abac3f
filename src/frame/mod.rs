//! Frame scheduler: per-frame coalescing of rotation updates.

pub mod scheduler;

pub use scheduler::FrameScheduler;
