//! The action vocabulary.
//!
//! Every mutation of a `Universe` is described by a plain data value. No
//! action carries closures or handles, so a recorded action log is itself
//! a valid persistence and audit format.
//!
//! Undo, redo, and history bookkeeping are not universe actions; they
//! live one layer up in [`crate::history::HistoryAction`].

use serde::{Deserialize, Serialize};

use crate::universe::{CardId, Universe};

/// One universe mutation, as data.
///
/// Serializes with a `"type"` tag, matching the deck-item convention:
/// `{"type":"createDeck","deckId":"main"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Mint one fresh card per name and insert them into a deck.
    #[serde(rename_all = "camelCase")]
    CreateCards {
        /// Deck receiving the new cards.
        deck_id: String,
        /// Insertion slot; `None` appends. Past-the-end clamps to append.
        index: Option<usize>,
        /// One card per entry; repeated names mint distinct cards.
        names: Vec<String>,
    },

    /// Remove cards from existence, cascading into groups and decks.
    #[serde(rename_all = "camelCase")]
    DestroyCards {
        /// Ids to destroy. Unknown ids are ignored.
        card_ids: Vec<CardId>,
    },

    /// Append a new empty deck.
    #[serde(rename_all = "camelCase")]
    CreateDeck {
        /// Id (and display name) of the deck.
        deck_id: String,
    },

    /// Move a run of consecutive slots between decks (or within one).
    ///
    /// Indices follow splice conventions: negative `from_index` counts
    /// from the end, `count == -1` means "through the end", and negative
    /// `to_index` offsets from one past the end so `-1` appends.
    #[serde(rename_all = "camelCase")]
    MoveCard {
        /// Source deck.
        from_deck_id: String,
        /// First slot of the run in the source deck.
        from_index: i64,
        /// Destination deck (may equal the source).
        to_deck_id: String,
        /// Insertion point in the destination, resolved after removal.
        to_index: i64,
        /// Run length, or `-1` for everything from `from_index` on.
        count: i64,
    },

    /// Re-randomize a whole deck into a single fresh uncertainty group.
    #[serde(rename_all = "camelCase")]
    ShuffleDeck {
        /// Deck to shuffle.
        deck_id: String,
    },

    /// Resolve one unknown slot to a concrete card, by name.
    #[serde(rename_all = "camelCase")]
    RevealCard {
        /// Deck holding the slot.
        deck_id: String,
        /// Slot index; must currently be a group item.
        index: usize,
        /// Name the card turned out to be.
        name: String,
    },

    /// Replace the universe with the canonical empty one.
    Reset,

    /// Replace the universe wholesale with a supplied snapshot.
    #[serde(rename_all = "camelCase")]
    Load {
        /// The already-validated snapshot to adopt.
        universe: Universe,
    },
}
