// SPDX-License-Identifier: MPL-2.0
//! Frame-sampled tween tracks.

use super::{Animator, Ease, Property, Props, Target, Timing, Tween, Visual};
use crate::domain::ui::TimeScale;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Interpolation of one continuous property.
#[derive(Debug, Clone, Copy)]
struct Track {
    from: f32,
    to: f32,
    start: Instant,
    timing: Timing,
}

impl Track {
    fn end_value(&self) -> f32 {
        if self.timing.ends_reversed() {
            self.from
        } else {
            self.to
        }
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.timing.total()
    }

    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.timing.delay {
            return self.from;
        }
        if self.is_finished(now) || self.timing.duration.is_zero() {
            return self.end_value();
        }

        let running = (elapsed - self.timing.delay).as_secs_f32();
        let cycle_len = self.timing.duration.as_secs_f32();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cycle = (running / cycle_len).floor() as u32;
        let local = (running - cycle as f32 * cycle_len) / cycle_len;
        let progress = if self.timing.yoyo && cycle % 2 == 1 {
            1.0 - local
        } else {
            local
        };

        self.from + (self.to - self.from) * self.timing.ease.apply(progress)
    }
}

/// Discrete value switching at a fixed instant.
#[derive(Debug, Clone, Copy)]
struct Step<T> {
    value: T,
    at: Instant,
}

/// [`Animator`] that keeps one track per (target, property) and is sampled
/// once per frame.
///
/// The timeline owns its clock: callers move it forward with
/// [`advance`](Self::advance) before issuing tweens or sampling, so a
/// tween always starts at the last observed instant.
#[derive(Debug, Clone)]
pub struct Timeline {
    now: Instant,
    time_scale: TimeScale,
    reduced_motion: bool,
    base: HashMap<Target, Visual>,
    tracks: HashMap<(Target, Property), Track>,
    visibility: HashMap<Target, Step<bool>>,
    layers: HashMap<Target, Step<u8>>,
}

impl Timeline {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            time_scale: TimeScale::default(),
            reduced_motion: false,
            base: HashMap::new(),
            tracks: HashMap::new(),
            visibility: HashMap::new(),
            layers: HashMap::new(),
        }
    }

    /// Stretches or compresses every tween issued from now on.
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: TimeScale) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Makes every tween issued from now on land instantly.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// The last instant the timeline was advanced to.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward and commits everything that has finished.
    ///
    /// Instants earlier than the current clock are ignored.
    pub fn advance(&mut self, now: Instant) {
        if now < self.now {
            return;
        }
        self.now = now;

        let finished: Vec<_> = self
            .tracks
            .iter()
            .filter(|(_, track)| track.is_finished(now))
            .map(|(key, track)| (*key, track.end_value()))
            .collect();
        for ((target, property), value) in finished {
            self.tracks.remove(&(target, property));
            self.base.entry(target).or_default().set(property, value);
        }

        let shown: Vec<_> = self
            .visibility
            .iter()
            .filter(|(_, step)| step.at <= now)
            .map(|(target, step)| (*target, step.value))
            .collect();
        for (target, visible) in shown {
            self.visibility.remove(&target);
            self.base.entry(target).or_default().visible = visible;
        }

        let raised: Vec<_> = self
            .layers
            .iter()
            .filter(|(_, step)| step.at <= now)
            .map(|(target, step)| (*target, step.value))
            .collect();
        for (target, layer) in raised {
            self.layers.remove(&target);
            self.base.entry(target).or_default().layer = layer;
        }
    }

    /// Whether any track or pending switch is still live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tracks.is_empty() || !self.visibility.is_empty() || !self.layers.is_empty()
    }

    /// Visual state of `target` at the current clock.
    #[must_use]
    pub fn sample(&self, target: Target) -> Visual {
        let mut visual = self.base.get(&target).copied().unwrap_or_default();
        for property in Property::ALL {
            if let Some(track) = self.tracks.get(&(target, property)) {
                visual.set(property, track.value_at(self.now));
            }
        }
        if let Some(step) = self.visibility.get(&target) {
            if step.at <= self.now {
                visual.visible = step.value;
            }
        }
        if let Some(step) = self.layers.get(&target) {
            if step.at <= self.now {
                visual.layer = step.value;
            }
        }
        visual
    }

    fn scaled(&self, timing: Timing) -> Timing {
        if self.reduced_motion {
            Timing {
                duration: Duration::ZERO,
                delay: Duration::ZERO,
                ease: Ease::Linear,
                ..timing
            }
        } else {
            Timing {
                duration: self.time_scale.apply(timing.duration),
                delay: self.time_scale.apply(timing.delay),
                ..timing
            }
        }
    }

    fn start(&mut self, target: Target, from: Visual, tween: Tween) {
        let timing = self.scaled(tween.timing);
        let now = self.now;

        for property in Property::ALL {
            if let Some(to) = tween.props.get(property) {
                self.tracks.insert(
                    (target, property),
                    Track {
                        from: from.get(property),
                        to,
                        start: now,
                        timing,
                    },
                );
            }
        }

        if let Some(visible) = tween.props.visible {
            let at = if visible {
                now + timing.delay
            } else {
                now + timing.total()
            };
            self.visibility.insert(target, Step { value: visible, at });
        }
        if let Some(layer) = tween.props.layer {
            self.layers.insert(
                target,
                Step {
                    value: layer,
                    at: now + timing.delay,
                },
            );
        }

        // Zero-length tweens land immediately.
        self.advance(now);
    }
}

impl Animator for Timeline {
    fn set(&mut self, target: Target, props: Props) {
        for property in Property::ALL {
            if props.get(property).is_some() {
                self.tracks.remove(&(target, property));
            }
        }
        if props.visible.is_some() {
            self.visibility.remove(&target);
        }
        if props.layer.is_some() {
            self.layers.remove(&target);
        }
        self.base.entry(target).or_default().apply(&props);
    }

    fn to(&mut self, target: Target, tween: Tween) {
        let from = self.sample(target);
        self.start(target, from, tween);
    }

    fn from_to(&mut self, target: Target, from: Props, tween: Tween) {
        let mut start = self.sample(target);
        start.apply(&Props {
            visible: None,
            layer: None,
            ..from
        });
        self.start(target, start, tween);
    }
}
