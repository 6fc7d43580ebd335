// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons for the trigger and the reaction panel.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every frame reuses the same handle (and the
//! renderer's rasterization cache keyed on it).
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! frame.draw_svg(bounds, Svg::new(icons::trigger(selected)));
//! ```

use crate::domain::reaction::Reaction;
use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory(source::$name()))
                .clone()
        }
    };
}

/// Raw SVG sources, kept separate from handles for validation.
pub mod source {
    macro_rules! define_source {
        ($name:ident, $filename:literal) => {
            pub fn $name() -> &'static [u8] {
                include_bytes!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/assets/reactions/",
                    $filename
                ))
            }
        };
    }

    define_source!(like_outline, "like.svg");
    define_source!(like, "liked.svg");
    define_source!(celebrate, "celebrate.svg");
    define_source!(support, "support.svg");
    define_source!(love, "love.svg");
    define_source!(insightful, "insightful.svg");
    define_source!(funny, "funny.svg");
}

define_icon!(
    like_outline,
    "Neutral thumbs-up outline shown on the trigger when nothing is selected."
);
define_icon!(like, "Filled thumbs-up on a blue disc.");
define_icon!(celebrate, "Star burst on a green disc.");
define_icon!(support, "Cupped hands holding a heart on a purple disc.");
define_icon!(love, "Heart on a red disc.");
define_icon!(insightful, "Light bulb on a yellow disc.");
define_icon!(funny, "Laughing face on a teal disc.");

/// Icon of a reaction, as shown in the panel and on the trigger.
#[must_use]
pub fn reaction(reaction: Reaction) -> Handle {
    match reaction {
        Reaction::Like => like(),
        Reaction::Celebrate => celebrate(),
        Reaction::Support => support(),
        Reaction::Love => love(),
        Reaction::Insightful => insightful(),
        Reaction::Funny => funny(),
    }
}

/// Icon the trigger shows for the current selection.
#[must_use]
pub fn trigger(selected: Option<Reaction>) -> Handle {
    selected.map_or_else(like_outline, reaction)
}

/// Raw source of a reaction's icon.
#[must_use]
pub fn reaction_source(reaction: Reaction) -> &'static [u8] {
    match reaction {
        Reaction::Like => source::like(),
        Reaction::Celebrate => source::celebrate(),
        Reaction::Support => source::support(),
        Reaction::Love => source::love(),
        Reaction::Insightful => source::insightful(),
        Reaction::Funny => source::funny(),
    }
}
