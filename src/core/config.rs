//! Engine configuration.
//!
//! Hosts configure the engine at startup. Defaults match the classic
//! project-card tilt: ±10° rotation, 1.02 scale-up, a 20px shadow blur,
//! and a 2 second auto-disarm window for the two-stage tap.

use serde::{Deserialize, Serialize};

/// Tunables for the tilt effect and the tap disambiguation.
///
/// Built with the usual chaining style:
///
/// ```
/// use tilt_deck::TiltConfig;
///
/// let config = TiltConfig::new()
///     .with_max_degrees(8.0)
///     .with_arm_timeout_ms(1500);
///
/// assert_eq!(config.max_degrees, 8.0);
/// assert_eq!(config.overshoot_limit(), 12.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Maximum rotation magnitude per axis, in degrees, for pointer
    /// positions inside the card bounds.
    pub max_degrees: f32,

    /// Overshoot policy: samples recorded outside the bounds (fast motion)
    /// are clamped to `max_degrees * overshoot_clamp` per axis, so a
    /// runaway sample never produces a visually extreme flip.
    pub overshoot_clamp: f32,

    /// Uniform scale-up while tilted, conveying elevation.
    pub scale: f32,

    /// Blur radius of the directional shadow, in pixels.
    pub shadow_blur: f32,

    /// How long an armed card waits for its confirming tap before
    /// automatically disarming, in milliseconds.
    pub arm_timeout_ms: u64,

    /// Whether releasing a touch returns the card to neutral.
    ///
    /// `false` is the documented variant where the tilt persists after
    /// touch release until the next interaction.
    pub reset_on_release: bool,
}

impl TiltConfig {
    /// Create a configuration with the default tunables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_degrees: 10.0,
            overshoot_clamp: 1.5,
            scale: 1.02,
            shadow_blur: 20.0,
            arm_timeout_ms: 2000,
            reset_on_release: true,
        }
    }

    /// Set the maximum rotation magnitude.
    #[must_use]
    pub fn with_max_degrees(mut self, degrees: f32) -> Self {
        assert!(degrees > 0.0, "max_degrees must be positive");
        self.max_degrees = degrees;
        self
    }

    /// Set the overshoot clamp factor (≥ 1.0).
    #[must_use]
    pub fn with_overshoot_clamp(mut self, factor: f32) -> Self {
        assert!(factor >= 1.0, "overshoot_clamp must be at least 1.0");
        self.overshoot_clamp = factor;
        self
    }

    /// Set the elevation scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        assert!(scale > 0.0, "scale must be positive");
        self.scale = scale;
        self
    }

    /// Set the shadow blur radius.
    #[must_use]
    pub fn with_shadow_blur(mut self, blur: f32) -> Self {
        self.shadow_blur = blur;
        self
    }

    /// Set the auto-disarm window.
    #[must_use]
    pub fn with_arm_timeout_ms(mut self, ms: u64) -> Self {
        assert!(ms > 0, "arm_timeout_ms must be positive");
        self.arm_timeout_ms = ms;
        self
    }

    /// Keep the tilt after touch release instead of resetting.
    #[must_use]
    pub fn persist_on_release(mut self) -> Self {
        self.reset_on_release = false;
        self
    }

    /// Absolute per-axis rotation bound after the overshoot clamp.
    #[must_use]
    pub fn overshoot_limit(&self) -> f32 {
        self.max_degrees * self.overshoot_clamp
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::new()
    }
}
