// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::picker;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Picker(picker::Message),
    /// Animation frame while the timeline has live tracks.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override; wins over `settings.toml`.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `REACTION_PICKER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
