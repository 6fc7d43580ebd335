// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Window background behind the widget.
    pub surface_background: Color,
    /// Pill behind the reaction icons.
    pub panel_surface: Color,
    pub panel_shadow: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Bubble above a magnified icon.
    pub label_background: Color,
    pub label_text: Color,

    pub warning: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_background: palette::GRAY_100,
            panel_surface: palette::WHITE,
            panel_shadow: Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            label_background: palette::GRAY_900,
            label_text: palette::WHITE,

            warning: palette::PRIMARY_600,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_background: palette::GRAY_900,
            panel_surface: palette::GRAY_800,
            panel_shadow: Color {
                a: opacity::SHADOW_DARK,
                ..palette::BLACK
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            label_background: palette::WHITE,
            label_text: palette::GRAY_900,

            warning: palette::PRIMARY_400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to light on detection error; the widget mimics a light page
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Colors for the effective theme.
    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Built-in Iced theme for the effective theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.panel_surface.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.panel_surface.r < 0.2); // Close to black
    }

    #[test]
    fn label_contrasts_with_its_bubble() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let contrast = (scheme.label_background.r - scheme.label_text.r).abs();
            assert!(contrast > 0.5);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
