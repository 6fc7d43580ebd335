// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`picker`] - Reaction picker state machine, geometry and canvas
//! - [`motion`] - Animator seam and the frame-sampled [`motion::Timeline`]
//! - [`icons`] - Embedded reaction SVGs
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod icons;
pub mod motion;
pub mod picker;
pub mod theming;
