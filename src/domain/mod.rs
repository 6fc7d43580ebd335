// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`reaction`]: The closed [`Reaction`](reaction::Reaction) set and the
//!   selection [`toggle`](reaction::toggle) rule
//! - [`ui`]: UI value objects ([`TimeScale`](ui::TimeScale))

pub mod reaction;
pub mod ui;
