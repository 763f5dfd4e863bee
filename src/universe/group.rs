//! Uncertainty groups.
//!
//! A `Group` records "exactly these cards sit somewhere in a shuffled
//! region, in unknown order". Each deck slot covered by the region holds a
//! group reference instead of a card reference; the group's member set is
//! the pool those slots draw from.
//!
//! Invariants (maintained by the reducers, not re-checked here):
//! - every member id references an existing card
//! - a group with no members must not exist
//! - a group whose members all share one name carries no real uncertainty
//!   and must be collapsed into concrete card references

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::card::CardId;

/// Unique identifier for an uncertainty group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

impl GroupId {
    /// Create a group ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// A set of cards whose relative order within a shuffled region is unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier.
    pub id: GroupId,

    /// Member card ids. An ordered set keeps iteration deterministic;
    /// members are interchangeable wherever names collide anyway.
    pub card_ids: OrdSet<CardId>,
}

impl Group {
    /// Create a group from an id and its member cards.
    #[must_use]
    pub fn new(id: GroupId, card_ids: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            id,
            card_ids: card_ids.into_iter().collect(),
        }
    }

    /// Number of member cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    /// Whether the group has no members left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }

    /// Whether the group contains a given card.
    #[must_use]
    pub fn contains(&self, card_id: CardId) -> bool {
        self.card_ids.contains(&card_id)
    }
}
