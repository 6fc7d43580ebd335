// SPDX-License-Identifier: MPL-2.0
//! Localized labels describing the picker's elements and state.

use crate::domain::reaction::Reaction;
use crate::i18n::fluent::I18n;

/// Label of the whole widget.
pub fn group(i18n: &I18n) -> String {
    i18n.tr("group-label")
}

/// Display name of a reaction ("Like", "Celebrate", …).
pub fn reaction(i18n: &I18n, reaction: Reaction) -> String {
    i18n.tr(reaction.i18n_key())
}

/// Description of a panel icon's image.
pub fn reaction_alt(i18n: &I18n, value: Reaction) -> String {
    i18n.tr_with_args("reaction-alt", &[("label", reaction(i18n, value).as_str())])
}

/// Action or state of the trigger button.
pub fn trigger(i18n: &I18n, selected: Option<Reaction>) -> String {
    match selected {
        Some(value) => i18n.tr_with_args(
            "trigger-label-reacted",
            &[("reaction", reaction(i18n, value).as_str())],
        ),
        None => i18n.tr("trigger-label-idle"),
    }
}

/// Description of the trigger's image.
pub fn trigger_alt(i18n: &I18n, selected: Option<Reaction>) -> String {
    match selected {
        Some(value) => i18n.tr_with_args(
            "trigger-alt-reacted",
            &[("reaction", reaction(i18n, value).as_str())],
        ),
        None => i18n.tr("trigger-alt-idle"),
    }
}
