// SPDX-License-Identifier: MPL-2.0
//! Reaction picker: a trigger button that expands into a row of reaction
//! icons on hover.
//!
//! The picker owns two pieces of interaction state, the hover flag and the
//! selected reaction, plus the panel visibility that clicks can override
//! while the pointer is still inside. Every visual consequence is issued as
//! a tween through an [`Animator`], so the state machine runs unchanged
//! against the live [`Timeline`](crate::ui::motion::Timeline) or a test
//! recorder.
//!
//! Pointer input arrives as zone transitions from the canvas
//! ([`Message::PointerMoved`]) and is decomposed here into hover enter and
//! leave, icon hover enter and leave.

pub mod canvas;
pub mod labels;
pub mod layout;

use crate::domain::reaction::{self, Reaction};
use crate::ui::design_tokens::{motion, sizing};
use crate::ui::motion::{Animator, Ease, Props, Target, Tween};

/// Region of the widget under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Outside,
    Trigger,
    /// Panel background between icons.
    Panel,
    Icon(usize),
}

impl Zone {
    /// Whether the zone belongs to the hover area.
    #[must_use]
    pub fn is_inside(self) -> bool {
        !matches!(self, Zone::Outside)
    }
}

/// Default pointer behaviors the widget swallows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    ContextMenu,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PointerMoved { from: Zone, to: Zone },
    TriggerPressed,
    ReactionPressed(Reaction),
    PointerGuarded { zone: Zone, guard: Guard },
}

/// Outcome the host may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectionChanged(Option<Reaction>),
}

/// Interaction state of one picker instance.
#[derive(Debug, Clone, Default)]
pub struct ReactionPicker {
    hovering: bool,
    selected: Option<Reaction>,
    panel_open: bool,
    magnified: Option<usize>,
    /// Zone last reported by the canvas.
    zone: Zone,
}

impl ReactionPicker {
    /// Creates a picker in its initial state: not hovered, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts every handle in its resting pose without tweening.
    pub fn install(&self, animator: &mut impl Animator) {
        animator.set(
            Target::Panel,
            Props::new()
                .opacity(0.0)
                .visible(false)
                .width(sizing::PANEL_WIDTH),
        );
        animator.set(Target::Trigger, Props::new().scale(1.0));
        for index in 0..Reaction::COUNT {
            animator.set(
                Target::Icon(index),
                Props::new()
                    .scale(1.0)
                    .x(0.0)
                    .y(0.0)
                    .opacity(1.0)
                    .layer(motion::LAYER_BASE),
            );
        }
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn selected(&self) -> Option<Reaction> {
        self.selected
    }

    /// Whether the panel is meant to be shown (and its icons clickable).
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    #[must_use]
    pub fn pointer_zone(&self) -> Zone {
        self.zone
    }

    /// Index of the icon currently under the pointer.
    #[must_use]
    pub fn magnified(&self) -> Option<usize> {
        self.magnified
    }

    pub fn update(&mut self, message: Message, animator: &mut impl Animator) -> Option<Event> {
        match message {
            Message::PointerMoved { from, to } => {
                self.pointer_moved(from, to, animator);
                None
            }
            Message::TriggerPressed => self.click_trigger(),
            Message::ReactionPressed(reaction) => self.click_reaction(reaction, animator),
            Message::PointerGuarded { zone, guard } => {
                tracing::trace!(?zone, ?guard, "suppressed default pointer behavior");
                None
            }
        }
    }

    /// Decomposes a zone transition into hover operations.
    pub fn pointer_moved(&mut self, from: Zone, to: Zone, animator: &mut impl Animator) {
        if from == to {
            return;
        }
        self.zone = to;
        if matches!(from, Zone::Icon(_)) {
            self.icon_hover_leave(animator);
        }
        if !from.is_inside() && to.is_inside() {
            self.hover_enter(animator);
        }
        if from.is_inside() && !to.is_inside() {
            self.hover_leave(animator);
        }
        if let Zone::Icon(index) = to {
            self.icon_hover_enter(index, animator);
        }
    }

    /// Reveals the panel and plays the staggered icon entrance.
    pub fn hover_enter(&mut self, animator: &mut impl Animator) {
        tracing::debug!("pointer entered reaction picker");
        self.hovering = true;
        self.panel_open = true;

        animator.to(
            Target::Panel,
            Tween::new(motion::PANEL_SHOW).opacity(1.0).visible(true),
        );

        for index in 0..Reaction::COUNT {
            let stagger = motion::ENTRANCE_STAGGER * u32::try_from(index).unwrap_or(u32::MAX);
            animator.from_to(
                Target::Icon(index),
                Props::new()
                    .scale(motion::ENTRANCE_FROM_SCALE)
                    .y(motion::ENTRANCE_FROM_Y)
                    .opacity(0.0),
                Tween::new(motion::ENTRANCE)
                    .scale(1.0)
                    .y(0.0)
                    .opacity(1.0)
                    .delay(stagger)
                    .ease(Ease::Power2Out),
            );
        }
    }

    /// Hides the panel.
    pub fn hover_leave(&mut self, animator: &mut impl Animator) {
        tracing::debug!("pointer left reaction picker");
        self.hovering = false;
        self.magnified = None;
        self.hide_panel(animator);
    }

    /// Magnifies icon `index` and pushes its neighbours aside.
    ///
    /// Icons before `index` move left, icons after it move right; the
    /// magnified icon keeps its horizontal position. Out-of-range indices
    /// are ignored.
    pub fn icon_hover_enter(&mut self, index: usize, animator: &mut impl Animator) {
        if index >= Reaction::COUNT {
            return;
        }
        self.magnified = Some(index);
        self.panel_open = true;

        animator.to(
            Target::Icon(index),
            Tween::new(motion::MAGNIFY)
                .scale(motion::MAGNIFY_SCALE)
                .y(motion::MAGNIFY_LIFT)
                .layer(motion::LAYER_RAISED),
        );

        animator.to(
            Target::Panel,
            Tween::new(motion::PANEL_WIDEN)
                .opacity(1.0)
                .visible(true)
                .width(sizing::PANEL_WIDTH_EXPANDED)
                .ease(Ease::Power2Out),
        );

        for other in (0..Reaction::COUNT).filter(|&other| other != index) {
            animator.to(
                Target::Icon(other),
                Tween::new(motion::MAGNIFY)
                    .x(displacement(index, other))
                    .ease(Ease::Power2Out),
            );
        }
    }

    /// Returns every icon to its resting pose.
    pub fn icon_hover_leave(&mut self, animator: &mut impl Animator) {
        self.magnified = None;
        for index in 0..Reaction::COUNT {
            animator.to(
                Target::Icon(index),
                Tween::new(motion::MAGNIFY)
                    .scale(1.0)
                    .x(0.0)
                    .y(0.0)
                    .layer(motion::LAYER_BASE)
                    .ease(Ease::Power2Out),
            );
        }
    }

    /// Toggles `reaction` and hides the panel.
    ///
    /// The panel hides in both directions of the toggle.
    pub fn click_reaction(
        &mut self,
        reaction: Reaction,
        animator: &mut impl Animator,
    ) -> Option<Event> {
        let next = reaction::toggle(self.selected, reaction);
        self.select(next, animator);
        self.hide_panel(animator);
        Some(Event::SelectionChanged(next))
    }

    /// Clears the selection, if any. The panel is left alone.
    pub fn click_trigger(&mut self) -> Option<Event> {
        self.selected?;
        tracing::debug!("trigger cleared reaction");
        self.selected = None;
        Some(Event::SelectionChanged(None))
    }

    fn select(&mut self, next: Option<Reaction>, animator: &mut impl Animator) {
        let previous = std::mem::replace(&mut self.selected, next);
        tracing::debug!(?previous, ?next, "reaction selection changed");

        if next.is_some() && next != previous {
            // Always bounce from rest so a retrigger mid-flight still lands on 1.0.
            animator.from_to(
                Target::Trigger,
                Props::new().scale(1.0),
                Tween::new(motion::EMPHASIS)
                    .scale(motion::EMPHASIS_SCALE)
                    .yoyo()
                    .repeat(motion::EMPHASIS_REPEAT),
            );
        }
    }

    fn hide_panel(&mut self, animator: &mut impl Animator) {
        self.panel_open = false;
        animator.to(
            Target::Panel,
            Tween::new(motion::PANEL_HIDE).opacity(0.0).visible(false),
        );
    }
}

/// Horizontal offset of icon `other` while icon `magnified` is hovered.
#[must_use]
pub fn displacement(magnified: usize, other: usize) -> f32 {
    let magnitude = motion::DISPLACEMENT_DISTANCE * motion::DISPLACEMENT_FACTOR;
    match other.cmp(&magnified) {
        std::cmp::Ordering::Less => -magnitude,
        std::cmp::Ordering::Greater => magnitude,
        std::cmp::Ordering::Equal => 0.0,
    }
}
