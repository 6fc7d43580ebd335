// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the reaction picker.
//!
//! The `App` struct owns the picker state machine and the timeline that
//! animates it, advances the timeline on every message, and turns timeline
//! activity into a frame subscription.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::domain::reaction::Reaction;
use crate::i18n::fluent::I18n;
use crate::ui::motion::Timeline;
use crate::ui::picker::{self, labels, ReactionPicker};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    picker: ReactionPicker,
    timeline: Timeline,
    theme_mode: ThemeMode,
    /// Resolved once at start-up; `System` mode would otherwise query the
    /// desktop on every frame.
    theme: Theme,
    colors: ColorScheme,
    /// Fluent key of a non-fatal start-up problem.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("picker", &self.picker)
            .field("theme_mode", &self.theme_mode)
            .field("animating", &self.timeline.is_animating())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 440;
pub const MIN_WINDOW_HEIGHT: u32 = 280;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, resolves the locale and theme, and puts the picker
    /// in its resting pose.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        let mut timeline = Timeline::new(Instant::now())
            .with_time_scale(config.animation.time_scale())
            .with_reduced_motion(config.animation.reduced_motion());
        let picker = ReactionPicker::new();
        picker.install(&mut timeline);

        tracing::debug!(
            locale = %i18n.current_locale(),
            ?theme_mode,
            time_scale = config.animation.time_scale().value(),
            "application started"
        );

        let app = App {
            i18n,
            picker,
            timeline,
            theme_mode,
            theme: theme_mode.iced_theme(),
            colors: theme_mode.colors(),
            config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr("window-title"),
            labels::group(&self.i18n)
        )
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(self.timeline.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.timeline.advance(now),
            Message::Picker(message) => {
                self.timeline.advance(Instant::now());
                if let Some(picker::Event::SelectionChanged(selection)) =
                    self.picker.update(message, &mut self.timeline)
                {
                    tracing::info!(
                        reaction = selection.map_or("none", Reaction::id),
                        "reaction changed"
                    );
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            picker: &self.picker,
            timeline: &self.timeline,
            colors: &self.colors,
            warning: self.config_warning.as_deref(),
        })
    }
}
