// SPDX-License-Identifier: MPL-2.0
//! Declarative tween descriptions and the animator seam.
//!
//! Widgets never interpolate anything themselves: they describe *what* a
//! handle should look like at the end of a tween and hand that description
//! to an [`Animator`]. The production animator is the frame-sampled
//! [`Timeline`]; tests substitute a recorder.
//!
//! # Example
//!
//! ```
//! use reaction_picker::ui::motion::{Animator, Ease, Target, Timeline, Tween};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut timeline = Timeline::new(start);
//! timeline.to(
//!     Target::Panel,
//!     Tween::new(Duration::from_millis(100)).opacity(0.0).ease(Ease::Linear),
//! );
//!
//! timeline.advance(start + Duration::from_millis(50));
//! assert!((timeline.sample(Target::Panel).opacity - 0.5).abs() < 1e-3);
//! ```

mod timeline;

pub use timeline::Timeline;

use std::time::Duration;

/// Handle a tween is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The hover-revealed row of reaction icons.
    Panel,
    /// The always-visible trigger button.
    Trigger,
    /// A reaction icon, by panel index.
    Icon(usize),
}

/// Continuous properties that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    Scale,
    X,
    Y,
    Width,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Opacity,
        Property::Scale,
        Property::X,
        Property::Y,
        Property::Width,
    ];
}

/// Easing curves.
///
/// `Power1Out` is the implicit curve of a tween that names none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A set of optional visual properties.
///
/// Used both as the end state of a tween and as the explicit start state
/// of a `from_to` tween. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub visible: Option<bool>,
    pub layer: Option<u8>,
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    #[must_use]
    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    #[must_use]
    pub fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    #[must_use]
    pub fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    #[must_use]
    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    #[must_use]
    pub fn visible(mut self, value: bool) -> Self {
        self.visible = Some(value);
        self
    }

    #[must_use]
    pub fn layer(mut self, value: u8) -> Self {
        self.layer = Some(value);
        self
    }

    /// Value of a continuous property, if set.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<f32> {
        match property {
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Width => self.width,
        }
    }
}

/// When and how a tween plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
    /// Extra cycles after the first one.
    pub repeat: u32,
    /// Reverse direction on every odd cycle.
    pub yoyo: bool,
}

impl Timing {
    /// Number of cycles played in total.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.repeat.saturating_add(1)
    }

    /// Time from tween start until the last cycle ends, delay included.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration * self.cycles()
    }

    /// Whether the tween finishes on its start value.
    #[must_use]
    pub fn ends_reversed(&self) -> bool {
        self.yoyo && self.repeat % 2 == 1
    }
}

/// A tween: target properties plus timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub props: Props,
    pub timing: Timing,
}

impl Tween {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            props: Props::default(),
            timing: Timing {
                duration,
                delay: Duration::ZERO,
                ease: Ease::default(),
                repeat: 0,
                yoyo: false,
            },
        }
    }

    #[must_use]
    pub fn opacity(mut self, value: f32) -> Self {
        self.props = self.props.opacity(value);
        self
    }

    #[must_use]
    pub fn scale(mut self, value: f32) -> Self {
        self.props = self.props.scale(value);
        self
    }

    #[must_use]
    pub fn x(mut self, value: f32) -> Self {
        self.props = self.props.x(value);
        self
    }

    #[must_use]
    pub fn y(mut self, value: f32) -> Self {
        self.props = self.props.y(value);
        self
    }

    #[must_use]
    pub fn width(mut self, value: f32) -> Self {
        self.props = self.props.width(value);
        self
    }

    #[must_use]
    pub fn visible(mut self, value: bool) -> Self {
        self.props = self.props.visible(value);
        self
    }

    #[must_use]
    pub fn layer(mut self, value: u8) -> Self {
        self.props = self.props.layer(value);
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.timing.ease = ease;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.timing.delay = delay;
        self
    }

    #[must_use]
    pub fn repeat(mut self, repeat: u32) -> Self {
        self.timing.repeat = repeat;
        self
    }

    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.timing.yoyo = true;
        self
    }
}

/// Sampled visual state of one handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub visible: bool,
    pub layer: u8,
}

impl Visual {
    #[must_use]
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Width => self.width,
        }
    }

    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::Scale => self.scale = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Width => self.width = value,
        }
    }

    /// Overwrites every field set in `props`.
    pub fn apply(&mut self, props: &Props) {
        for property in Property::ALL {
            if let Some(value) = props.get(property) {
                self.set(property, value);
            }
        }
        if let Some(visible) = props.visible {
            self.visible = visible;
        }
        if let Some(layer) = props.layer {
            self.layer = layer;
        }
    }

    /// Whether the handle can currently be seen (and hit).
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visible && self.opacity > 0.0
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            visible: true,
            layer: 0,
        }
    }
}

/// Capability to play tweens on widget handles.
///
/// Calls are fire-and-forget: a tween addressed to a property that is
/// already animating takes over from its current value.
pub trait Animator {
    /// Applies `props` immediately, cancelling tweens on those properties.
    fn set(&mut self, target: Target, props: Props);

    /// Tweens from the current values to `tween.props`.
    fn to(&mut self, target: Target, tween: Tween);

    /// Jumps to `from`, then tweens to `tween.props`.
    fn from_to(&mut self, target: Target, from: Props, tween: Tween);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_pin_endpoints() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_eases_lead_linear() {
        assert!(Ease::Power1Out.apply(0.5) > Ease::Linear.apply(0.5));
        assert!(Ease::Power2Out.apply(0.5) > Ease::Power1Out.apply(0.5));
    }

    #[test]
    fn timing_counts_cycles() {
        let tween = Tween::new(Duration::from_millis(200)).yoyo().repeat(1);
        assert_eq!(tween.timing.cycles(), 2);
        assert_eq!(tween.timing.total(), Duration::from_millis(400));
        assert!(tween.timing.ends_reversed());
    }

    #[test]
    fn visual_apply_only_touches_set_fields() {
        let mut visual = Visual::default();
        visual.apply(&Props::new().x(4.0).visible(false));
        assert_eq!(visual.x, 4.0);
        assert_eq!(visual.scale, 1.0);
        assert!(!visual.visible);
        assert!(!visual.is_shown());
    }
}
