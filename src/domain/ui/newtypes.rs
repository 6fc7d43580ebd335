// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Time Scale Bounds
// =============================================================================

/// Animation time scale bounds (0.25× to 4×).
pub mod time_scale_bounds {
    /// Fastest allowed multiplier.
    pub const MIN: f32 = 0.25;
    /// Slowest allowed multiplier.
    pub const MAX: f32 = 4.0;
    /// Default multiplier (tweens play at their nominal speed).
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// TimeScale
// =============================================================================

/// Multiplier applied to every tween duration and delay.
///
/// Values above 1.0 slow animations down, values below speed them up.
/// Construction clamps into the valid range, and non-finite input falls
/// back to the default.
///
/// # Example
///
/// ```
/// use reaction_picker::domain::ui::TimeScale;
/// use std::time::Duration;
///
/// let slow = TimeScale::new(2.0);
/// assert_eq!(slow.apply(Duration::from_millis(100)), Duration::from_millis(200));
///
/// // Values outside range are clamped
/// assert_eq!(TimeScale::new(100.0).value(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale(f32);

impl TimeScale {
    /// Creates a new time scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(time_scale_bounds::MIN, time_scale_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales a nominal duration.
    #[must_use]
    pub fn apply(self, duration: Duration) -> Duration {
        // Nanosecond arithmetic keeps round multipliers exact.
        #[allow(clippy::cast_precision_loss)]
        let nanos = duration.as_nanos() as f64 * f64::from(self.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Duration::from_nanos(nanos.round() as u64)
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self(time_scale_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(TimeScale::new(0.0).value(), time_scale_bounds::MIN);
        assert_eq!(TimeScale::new(10.0).value(), time_scale_bounds::MAX);
    }

    #[test]
    fn new_rejects_non_finite() {
        assert_eq!(TimeScale::new(f32::NAN), TimeScale::default());
        assert_eq!(TimeScale::new(f32::INFINITY), TimeScale::default());
    }

    #[test]
    fn apply_scales_duration() {
        let half = TimeScale::new(0.5);
        assert_eq!(
            half.apply(Duration::from_millis(300)),
            Duration::from_millis(150)
        );
        assert_eq!(
            TimeScale::default().apply(Duration::from_millis(300)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(TimeScale::new(time_scale_bounds::MIN).value(), 0.25);
        assert_eq!(TimeScale::new(time_scale_bounds::MAX).value(), 4.0);
    }
}
