// SPDX-License-Identifier: MPL-2.0
//! `reaction_picker` is a hover-to-expand reaction picker built with the Iced
//! GUI framework.
//!
//! A "Like" trigger expands into a row of six reactions on hover. The
//! interaction state machine lives in [`ui::picker`] and drives its visuals
//! through the [`ui::motion::Animator`] seam; [`app`] hosts it in a window
//! with Fluent localization and user preferences.

#![doc(html_root_url = "https://docs.rs/reaction_picker/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
