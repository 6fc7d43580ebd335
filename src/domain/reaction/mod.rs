// SPDX-License-Identifier: MPL-2.0
//! Reaction domain types.
//!
//! The reaction set is closed: six variants, defined once, in the order the
//! panel displays them. "No reaction" is expressed as `Option::None` rather
//! than as a seventh variant, so every `Reaction` value is a real choice.

use std::fmt;

/// One of the predefined emotive responses a user may attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Like,
    Celebrate,
    Support,
    Love,
    Insightful,
    Funny,
}

impl Reaction {
    /// All reactions in panel display order.
    pub const ALL: [Reaction; 6] = [
        Reaction::Like,
        Reaction::Celebrate,
        Reaction::Support,
        Reaction::Love,
        Reaction::Insightful,
        Reaction::Funny,
    ];

    /// Number of reactions shown in the panel.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable lowercase identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Celebrate => "celebrate",
            Reaction::Support => "support",
            Reaction::Love => "love",
            Reaction::Insightful => "insightful",
            Reaction::Funny => "funny",
        }
    }

    /// Position of this reaction in the panel.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Reaction::Like => 0,
            Reaction::Celebrate => 1,
            Reaction::Support => 2,
            Reaction::Love => 3,
            Reaction::Insightful => 4,
            Reaction::Funny => 5,
        }
    }

    /// Reaction displayed at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Fluent key of the reaction's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Reaction::Like => "reaction-like",
            Reaction::Celebrate => "reaction-celebrate",
            Reaction::Support => "reaction-support",
            Reaction::Love => "reaction-love",
            Reaction::Insightful => "reaction-insightful",
            Reaction::Funny => "reaction-funny",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Applies a click on `clicked` to the current selection.
///
/// Clicking the selected reaction again clears it; any other click
/// replaces the selection.
#[must_use]
pub fn toggle(current: Option<Reaction>, clicked: Reaction) -> Option<Reaction> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_matches_index() {
        for (position, reaction) in Reaction::ALL.iter().enumerate() {
            assert_eq!(reaction.index(), position);
            assert_eq!(Reaction::from_index(position), Some(*reaction));
        }
        assert_eq!(Reaction::from_index(Reaction::COUNT), None);
    }

    #[test]
    fn toggle_selects_from_absent() {
        for reaction in Reaction::ALL {
            assert_eq!(toggle(None, reaction), Some(reaction));
        }
    }

    #[test]
    fn toggle_twice_returns_to_absent() {
        for reaction in Reaction::ALL {
            let once = toggle(None, reaction);
            assert_eq!(toggle(once, reaction), None);
        }
    }

    #[test]
    fn toggle_replaces_other_reaction() {
        assert_eq!(
            toggle(Some(Reaction::Love), Reaction::Funny),
            Some(Reaction::Funny)
        );
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = Reaction::ALL.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Reaction::COUNT);
    }
}
