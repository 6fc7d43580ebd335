// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the picker and routing pointer input.
//!
//! The program is rebuilt every frame from a sampled [`Scene`]; it keeps
//! only the pointer bookkeeping (current zone, pending press) in its
//! canvas state. Zone changes are published as [`Message::PointerMoved`],
//! clicks as [`Message::TriggerPressed`] / [`Message::ReactionPressed`].
//! Right presses and drags over the trigger or an icon are captured so the
//! host never sees them.

use super::layout::{Layout, Scene};
use super::{Guard, Message, Zone};
use crate::domain::reaction::Reaction;
use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::advanced::svg::Svg;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

/// Average glyph advance relative to font size, used to centre labels.
const GLYPH_WIDTH_RATIO: f32 = 0.58;

/// Snapshot of everything the canvas needs for one frame.
pub struct PickerCanvas {
    pub scene: Scene,
    pub selected: Option<Reaction>,
    pub panel_open: bool,
    pub magnified: Option<usize>,
    /// Display names in panel order.
    pub labels: [String; Reaction::COUNT],
    pub colors: ColorScheme,
}

/// Pointer bookkeeping kept by the canvas between events.
#[derive(Debug, Default)]
pub struct PointerState {
    zone: Zone,
    pressed: Option<Zone>,
    drag_reported: bool,
}

/// Zones whose default pointer behaviors are swallowed.
fn is_guarded(zone: Zone) -> bool {
    matches!(zone, Zone::Trigger | Zone::Icon(_))
}

impl PickerCanvas {
    fn is_clickable(&self, zone: Zone) -> bool {
        match zone {
            Zone::Trigger => true,
            Zone::Icon(_) => self.panel_open,
            Zone::Outside | Zone::Panel => false,
        }
    }

    fn click(&self, zone: Zone) -> Option<Message> {
        match zone {
            Zone::Trigger => Some(Message::TriggerPressed),
            Zone::Icon(index) if self.panel_open => {
                Reaction::from_index(index).map(Message::ReactionPressed)
            }
            _ => None,
        }
    }

    fn draw_trigger(&self, frame: &mut Frame, layout: &Layout) {
        if layout.trigger_drawn.width <= 0.0 {
            return;
        }
        frame.draw_svg(layout.trigger_drawn, Svg::new(icons::trigger(self.selected)));
    }

    fn draw_panel(&self, frame: &mut Frame, layout: &Layout) {
        let alpha = self.scene.panel.opacity.clamp(0.0, 1.0);
        let panel = layout.panel;
        let pill = panel.height / 2.0;

        for ring in (1..=shadow::PANEL_RINGS).rev() {
            let grow = f32::from(ring) * shadow::PANEL_SPREAD;
            let ring_path = Path::rounded_rectangle(
                Point::new(panel.x - grow, panel.y - grow + shadow::PANEL_OFFSET_Y),
                Size::new(panel.width + 2.0 * grow, panel.height + 2.0 * grow),
                (pill + grow).into(),
            );
            frame.fill(
                &ring_path,
                Color {
                    a: self.colors.panel_shadow.a * alpha / f32::from(shadow::PANEL_RINGS),
                    ..self.colors.panel_shadow
                },
            );
        }

        let surface = Path::rounded_rectangle(panel.position(), panel.size(), pill.into());
        frame.fill(
            &surface,
            Color {
                a: self.colors.panel_surface.a * alpha,
                ..self.colors.panel_surface
            },
        );

        for &index in &layout.paint_order {
            let Some(reaction) = Reaction::from_index(index) else {
                continue;
            };
            let bounds = layout.icons[index];
            let opacity = (self.scene.icons[index].opacity * alpha).clamp(0.0, 1.0);
            if bounds.width <= 0.0 || opacity <= 0.0 {
                continue;
            }
            frame.draw_svg(bounds, Svg::new(icons::reaction(reaction)).opacity(opacity));
        }

        if let Some(index) = self.magnified.filter(|_| self.panel_open) {
            self.draw_label(frame, layout.icons[index], &self.labels[index], alpha);
        }
    }

    /// Bubble with the reaction's name above its icon.
    fn draw_label(&self, frame: &mut Frame, icon: Rectangle, label: &str, alpha: f32) {
        let size = typography::BODY_SM;
        #[allow(clippy::cast_precision_loss)]
        let text_width = label.chars().count() as f32 * size * GLYPH_WIDTH_RATIO;
        let bubble = Size::new(text_width + 2.0 * spacing::XS, size + 2.0 * spacing::XXS);
        let origin = Point::new(
            icon.center_x() - bubble.width / 2.0,
            icon.y - spacing::XS - bubble.height,
        );

        frame.fill(
            &Path::rounded_rectangle(origin, bubble, radius::SM.into()),
            Color {
                a: alpha,
                ..self.colors.label_background
            },
        );
        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position: Point::new(origin.x + spacing::XS, origin.y + spacing::XXS),
            color: Color {
                a: alpha,
                ..self.colors.label_text
            },
            size: size.into(),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for PickerCanvas {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let layout = Layout::compute(bounds.size(), &self.scene);

        match event {
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.pressed = None;
                if state.zone != Zone::Outside {
                    let from = std::mem::replace(&mut state.zone, Zone::Outside);
                    return Some(Action::publish(Message::PointerMoved {
                        from,
                        to: Zone::Outside,
                    }));
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let zone = layout.zone_at(cursor.position_in(bounds));
                if zone != state.zone {
                    let from = std::mem::replace(&mut state.zone, zone);
                    return Some(Action::publish(Message::PointerMoved { from, to: zone }));
                }
                if state.pressed == Some(zone) && is_guarded(zone) && !state.drag_reported {
                    state.drag_reported = true;
                    return Some(
                        Action::publish(Message::PointerGuarded {
                            zone,
                            guard: Guard::Drag,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let zone = layout.zone_at(cursor.position_in(bounds));
                if is_guarded(zone) {
                    state.pressed = Some(zone);
                    state.drag_reported = false;
                    return Some(Action::capture());
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let zone = layout.zone_at(cursor.position_in(bounds));
                if state.pressed.take() == Some(zone) {
                    if let Some(message) = self.click(zone) {
                        return Some(Action::publish(message).and_capture());
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                let zone = layout.zone_at(cursor.position_in(bounds));
                if is_guarded(zone) {
                    return Some(
                        Action::publish(Message::PointerGuarded {
                            zone,
                            guard: Guard::ContextMenu,
                        })
                        .and_capture(),
                    );
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layout = Layout::compute(bounds.size(), &self.scene);
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_trigger(&mut frame, &layout);
        if layout.panel_shown {
            self.draw_panel(&mut frame, &layout);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let layout = Layout::compute(bounds.size(), &self.scene);
        if self.is_clickable(layout.zone_at(cursor.position_in(bounds))) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
