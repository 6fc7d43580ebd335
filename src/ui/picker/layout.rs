// SPDX-License-Identifier: MPL-2.0
//! Picker geometry and hit testing.
//!
//! Everything here is a pure function of the canvas size and the sampled
//! [`Scene`]: the trigger sits below the panel, the panel is anchored to the
//! right of the trigger, and icon slots are spread evenly across the panel's
//! current width. Scale is applied around each handle's centre.

use super::Zone;
use crate::domain::reaction::Reaction;
use crate::ui::design_tokens::sizing;
use crate::ui::motion::{Target, Timeline, Visual};
use iced::{Point, Rectangle, Size};

/// Visual state of every picker handle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub trigger: Visual,
    pub panel: Visual,
    pub icons: [Visual; Reaction::COUNT],
}

impl Scene {
    #[must_use]
    pub fn sample(timeline: &Timeline) -> Self {
        Self {
            trigger: timeline.sample(Target::Trigger),
            panel: timeline.sample(Target::Panel),
            icons: std::array::from_fn(|index| timeline.sample(Target::Icon(index))),
        }
    }
}

/// Resolved rectangles of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Trigger at rest; used for hit testing.
    pub trigger: Rectangle,
    /// Trigger with its current scale; used for drawing.
    pub trigger_drawn: Rectangle,
    pub panel: Rectangle,
    pub panel_shown: bool,
    pub icons: [Rectangle; Reaction::COUNT],
    /// Icon indices in paint order, lowest layer first.
    pub paint_order: [usize; Reaction::COUNT],
}

impl Layout {
    /// Places the composition in the middle of a canvas of `size`.
    #[must_use]
    pub fn compute(size: Size, scene: &Scene) -> Self {
        let trigger_origin = Point::new(
            size.width / 2.0 - sizing::PANEL_ANCHOR_X,
            size.height / 2.0
                - (sizing::ICON - sizing::PANEL_OFFSET_Y - sizing::PANEL_HEIGHT) / 2.0,
        );
        let trigger = Rectangle::new(trigger_origin, Size::new(sizing::ICON, sizing::ICON));
        let trigger_drawn = scaled(trigger, scene.trigger.scale);

        let panel_width = scene.panel.width.max(sizing::PANEL_HEIGHT);
        let panel = Rectangle::new(
            Point::new(
                trigger.x + sizing::PANEL_ANCHOR_X - panel_width / 2.0,
                trigger.y - sizing::PANEL_OFFSET_Y - sizing::PANEL_HEIGHT,
            ),
            Size::new(panel_width, sizing::PANEL_HEIGHT),
        );

        let icons = std::array::from_fn(|index| {
            let visual = &scene.icons[index];
            let slot = Rectangle::new(
                Point::new(
                    slot_left(panel, index) + visual.x,
                    panel.y + sizing::PANEL_PADDING + visual.y,
                ),
                Size::new(sizing::ICON, sizing::ICON),
            );
            scaled(slot, visual.scale)
        });

        let mut paint_order: [usize; Reaction::COUNT] = std::array::from_fn(|index| index);
        paint_order.sort_by_key(|&index| scene.icons[index].layer);

        Self {
            trigger,
            trigger_drawn,
            panel,
            panel_shown: scene.panel.is_shown(),
            icons,
            paint_order,
        }
    }

    /// Zone under `point`.
    ///
    /// A hidden panel does not capture the pointer. Overlapping icons are
    /// resolved in favour of the one painted last.
    #[must_use]
    pub fn zone_at(&self, point: Option<Point>) -> Zone {
        let Some(point) = point else {
            return Zone::Outside;
        };

        if self.panel_shown {
            for &index in self.paint_order.iter().rev() {
                if self.icons[index].contains(point) {
                    return Zone::Icon(index);
                }
            }
            if self.panel.contains(point) {
                return Zone::Panel;
            }
        }

        if self.trigger.contains(point) {
            Zone::Trigger
        } else {
            Zone::Outside
        }
    }
}

/// Left edge of icon slot `index`, spreading slots across the panel.
fn slot_left(panel: Rectangle, index: usize) -> f32 {
    let inner = panel.width - 2.0 * sizing::PANEL_PADDING;
    #[allow(clippy::cast_precision_loss)]
    let step = (inner - sizing::ICON) / (Reaction::COUNT - 1) as f32;
    #[allow(clippy::cast_precision_loss)]
    let offset = step * index as f32;
    panel.x + sizing::PANEL_PADDING + offset
}

/// `rect` scaled around its centre.
fn scaled(rect: Rectangle, scale: f32) -> Rectangle {
    let scale = scale.max(0.0);
    let center = rect.center();
    let size = Size::new(rect.width * scale, rect.height * scale);
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
