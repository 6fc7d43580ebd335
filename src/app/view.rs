// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The picker canvas fills the window; the trigger label sits underneath as
//! a caption, then the description of the image under the pointer, then the
//! config warning when start-up had one.

use super::Message;
use crate::domain::reaction::Reaction;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::Timeline;
use crate::ui::picker::canvas::PickerCanvas;
use crate::ui::picker::layout::Scene;
use crate::ui::picker::{self, labels, ReactionPicker, Zone};
use crate::ui::theming::ColorScheme;
use iced::widget::{canvas, container, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub picker: &'a ReactionPicker,
    pub timeline: &'a Timeline,
    pub colors: &'a ColorScheme,
    /// Fluent key of the start-up warning, if any.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selected = ctx.picker.selected();
    let program = PickerCanvas {
        scene: Scene::sample(ctx.timeline),
        selected,
        panel_open: ctx.picker.is_panel_open(),
        magnified: ctx.picker.magnified(),
        labels: Reaction::ALL.map(|reaction| labels::reaction(ctx.i18n, reaction)),
        colors: ctx.colors.clone(),
    };

    let widget: Element<'_, Message> = Element::<'_, picker::Message>::from(
        canvas(program)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .map(Message::Picker);

    let caption = Text::new(labels::trigger(ctx.i18n, selected))
        .size(typography::BODY)
        .color(if selected.is_some() {
            ctx.colors.text_primary
        } else {
            ctx.colors.text_secondary
        });

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(widget)
        .push(caption);

    if let Some(description) = pointer_description(ctx.i18n, ctx.picker) {
        column = column.push(
            Text::new(description)
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary),
        );
    }

    if let Some(key) = ctx.warning {
        column = column.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(ctx.colors.warning),
        );
    }

    let background = ctx.colors.surface_background;
    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}

/// Alt text of the image under the pointer, if any.
fn pointer_description(i18n: &I18n, picker: &ReactionPicker) -> Option<String> {
    match picker.pointer_zone() {
        Zone::Trigger => Some(labels::trigger_alt(i18n, picker.selected())),
        Zone::Icon(index) if picker.is_panel_open() => {
            Reaction::from_index(index).map(|reaction| labels::reaction_alt(i18n, reaction))
        }
        Zone::Icon(_) | Zone::Panel | Zone::Outside => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Instant;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn description_follows_pointer() {
        let i18n = english();
        let mut timeline = Timeline::new(Instant::now());
        let mut picker = ReactionPicker::new();
        assert_eq!(pointer_description(&i18n, &picker), None);

        picker.pointer_moved(Zone::Outside, Zone::Trigger, &mut timeline);
        assert_eq!(
            pointer_description(&i18n, &picker).as_deref(),
            Some("like icon")
        );

        picker.pointer_moved(Zone::Trigger, Zone::Icon(3), &mut timeline);
        assert_eq!(
            pointer_description(&i18n, &picker).as_deref(),
            Some("Love reaction")
        );

        picker.pointer_moved(Zone::Icon(3), Zone::Panel, &mut timeline);
        assert_eq!(pointer_description(&i18n, &picker), None);
    }

    #[test]
    fn trigger_description_names_selection() {
        let i18n = english();
        let mut timeline = Timeline::new(Instant::now());
        let mut picker = ReactionPicker::new();
        picker.pointer_moved(Zone::Outside, Zone::Icon(1), &mut timeline);
        picker.click_reaction(Reaction::Celebrate, &mut timeline);

        // The panel closed on click, so the icon under the pointer is not described.
        assert_eq!(pointer_description(&i18n, &picker), None);

        picker.pointer_moved(Zone::Icon(1), Zone::Trigger, &mut timeline);
        assert_eq!(
            pointer_description(&i18n, &picker).as_deref(),
            Some("Celebrate icon")
        );
    }
}
