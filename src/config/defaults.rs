// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use crate::domain::ui::newtypes::time_scale_bounds;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default animation time scale (nominal speed).
pub const DEFAULT_TIME_SCALE: f32 = time_scale_bounds::DEFAULT;

/// Fastest allowed animation time scale.
pub const MIN_TIME_SCALE: f32 = time_scale_bounds::MIN;

/// Slowest allowed animation time scale.
pub const MAX_TIME_SCALE: f32 = time_scale_bounds::MAX;

/// Animations play unless the user opts out.
pub const DEFAULT_REDUCED_MOTION: bool = false;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS yields a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIME_SCALE > 0.0);
    assert!(MIN_TIME_SCALE <= DEFAULT_TIME_SCALE);
    assert!(DEFAULT_TIME_SCALE <= MAX_TIME_SCALE);
};
