//! Pure reducers: `(Universe, Action) -> Universe`.
//!
//! The root [`reduce`] dispatches on action kind to one sub-reducer per
//! operation. Every sub-reducer is total: structurally impossible actions
//! (missing deck, bad slice, reveal mismatch, entangled shuffle) return
//! the prior snapshot unchanged and log a warning, since a UI can race a
//! dispatch against state it hasn't observed yet. Nothing in this layer
//! retries or partially applies — each action either yields a complete
//! invariant-preserving snapshot or the input value.

pub mod cards;
pub mod decks;
pub mod groups;
pub mod snapshot;

use crate::action::Action;
use crate::history::Reduce;
use crate::universe::Universe;

/// Apply one action to a universe, producing the next snapshot.
#[must_use]
pub fn reduce(universe: &Universe, action: &Action) -> Universe {
    match action {
        Action::CreateCards {
            deck_id,
            index,
            names,
        } => cards::create_cards(universe, deck_id, *index, names),
        Action::DestroyCards { card_ids } => cards::destroy_cards(universe, card_ids),
        Action::CreateDeck { deck_id } => decks::create_deck(universe, deck_id),
        Action::MoveCard {
            from_deck_id,
            from_index,
            to_deck_id,
            to_index,
            count,
        } => decks::move_card(
            universe,
            from_deck_id,
            *from_index,
            to_deck_id,
            *to_index,
            *count,
        ),
        Action::ShuffleDeck { deck_id } => decks::shuffle_deck(universe, deck_id),
        Action::RevealCard {
            deck_id,
            index,
            name,
        } => groups::reveal_card(universe, deck_id, *index, name),
        Action::Reset => snapshot::reset(universe),
        Action::Load { universe: loaded } => snapshot::load(universe, loaded),
    }
}

impl Reduce<Action> for Universe {
    fn reduce(&self, action: &Action) -> Self {
        reduce(self, action)
    }
}
