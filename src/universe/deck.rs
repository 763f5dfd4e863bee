//! Decks: ordered sequences of known and unknown slots.
//!
//! A deck is a sequence of `DeckItem`s. Index 0 is the top of the deck.
//! Each slot either names a concrete card or points into an uncertainty
//! group. The deck id doubles as its human-facing name.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::CardId;
use super::group::GroupId;

/// One slot in a deck's ordered sequence.
///
/// Serializes in the save-file shape: `{"type":"card","cardId":…}` or
/// `{"type":"group","groupId":…}`. Every match over this enum must stay
/// exhaustive; there is deliberately no catch-all arm anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeckItem {
    /// A resolved, face-known card.
    #[serde(rename_all = "camelCase")]
    Card {
        /// The card occupying this slot.
        card_id: CardId,
    },

    /// One slot of a shuffled region. The card here is one of the
    /// referenced group's members, which one being unknown.
    #[serde(rename_all = "camelCase")]
    Group {
        /// The uncertainty group this slot draws from.
        group_id: GroupId,
    },
}

impl DeckItem {
    /// Shorthand for a concrete card slot.
    #[must_use]
    pub const fn card(card_id: CardId) -> Self {
        Self::Card { card_id }
    }

    /// Shorthand for an unknown slot backed by a group.
    #[must_use]
    pub const fn group(group_id: GroupId) -> Self {
        Self::Group { group_id }
    }
}

/// An ordered deck of known and unknown slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Unique identifier, also the display name.
    pub id: String,

    /// Slots from top (index 0) to bottom.
    pub items: Vector<DeckItem>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vector::new(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deck has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Resolve a possibly-negative slice start against a deck of `len` items.
///
/// Negative indices count from the end, JS-splice style: `-1` is the last
/// item. Returns `None` when the resolved index falls outside `0..=len`
/// (`len` itself is legal only for empty slices).
pub(crate) fn resolve_start(len: usize, index: i64) -> Option<usize> {
    let resolved = if index < 0 {
        len as i64 + index
    } else {
        index
    };
    usize::try_from(resolved).ok().filter(|&i| i <= len)
}

/// Resolve a slice length starting at `start` in a deck of `len` items.
///
/// `-1` means "everything from `start` to the end". Returns `None` when
/// the deck does not hold exactly that many items at that position.
pub(crate) fn resolve_count(len: usize, start: usize, count: i64) -> Option<usize> {
    let resolved = if count == -1 {
        len - start
    } else {
        usize::try_from(count).ok()?
    };
    (start + resolved <= len).then_some(resolved)
}

/// Resolve a possibly-negative insertion point against `len` items.
///
/// Negative values are offsets from one past the end, so `-1` appends and
/// `-2` inserts before the current last item.
pub(crate) fn resolve_insert(len: usize, index: i64) -> Option<usize> {
    let resolved = if index < 0 {
        len as i64 + 1 + index
    } else {
        index
    };
    usize::try_from(resolved).ok().filter(|&i| i <= len)
}
