//! The `Universe`: aggregate of every card, deck, and group.
//!
//! This is the unit of snapshotting: reducers take a universe by
//! reference and hand back a new one, undo stores whole universes, and
//! the save layer serializes one. All collections are persistent, so
//! cloning a universe shares structure with its ancestor instead of
//! copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::deck::{Deck, DeckItem};
use super::group::{Group, GroupId};

/// Every card, deck, and uncertainty group in one value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    /// Flat registry of all cards, in creation order.
    pub cards: Vector<Card>,

    /// All decks, in creation order.
    pub decks: Vector<Deck>,

    /// All live uncertainty groups.
    pub groups: Vector<Group>,
}

impl Universe {
    /// The canonical empty universe.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    // === Lookups ===

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Get a card's name by id.
    #[must_use]
    pub fn card_name(&self, id: CardId) -> Option<&str> {
        self.card(id).map(|c| c.name.as_str())
    }

    /// Get a deck by id.
    #[must_use]
    pub fn deck(&self, id: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == id)
    }

    /// Get a deck's position in `decks` by id.
    #[must_use]
    pub fn deck_index(&self, id: &str) -> Option<usize> {
        self.decks.iter().position(|d| d.id == id)
    }

    /// Get a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Get a group's position in `groups` by id.
    #[must_use]
    pub fn group_index(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    // === Id allocation ===

    /// The next unused card id.
    ///
    /// Ids are minted as max-plus-one over the registry, so `load` needs
    /// no side channel to restore the allocator.
    #[must_use]
    pub fn next_card_id(&self) -> CardId {
        let max = self.cards.iter().map(|c| c.id.raw()).max();
        CardId::new(max.map_or(0, |m| m + 1))
    }

    /// The next unused group id.
    #[must_use]
    pub fn next_group_id(&self) -> GroupId {
        let max = self.groups.iter().map(|g| g.id.raw()).max();
        GroupId::new(max.map_or(0, |m| m + 1))
    }

    // === Queries ===

    /// The names a deck slot could reveal as.
    ///
    /// A concrete slot yields its single name; a group slot yields one
    /// entry per member, duplicates included. Dangling references yield
    /// nothing.
    #[must_use]
    pub fn possible_names(&self, item: &DeckItem) -> Vec<&str> {
        match item {
            DeckItem::Card { card_id } => self.card_name(*card_id).into_iter().collect(),
            DeckItem::Group { group_id } => match self.group(*group_id) {
                Some(group) => group
                    .card_ids
                    .iter()
                    .filter_map(|id| self.card_name(*id))
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// The multiset of card ids reachable from a deck, groups expanded to
    /// their full member sets.
    ///
    /// Shuffling a deck must preserve this multiset exactly.
    #[must_use]
    pub fn reachable_cards(&self, deck: &Deck) -> Vec<CardId> {
        let mut seen_groups = Vec::new();
        let mut out = Vec::new();
        for item in &deck.items {
            match item {
                DeckItem::Card { card_id } => out.push(*card_id),
                DeckItem::Group { group_id } => {
                    if seen_groups.contains(group_id) {
                        continue;
                    }
                    seen_groups.push(*group_id);
                    if let Some(group) = self.group(*group_id) {
                        out.extend(group.card_ids.iter().copied());
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }
}
