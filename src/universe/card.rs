//! Card records.
//!
//! A `Card` is the unit of identity: an opaque id plus a display name.
//! Cards are never mutated after creation. Several cards may share a name
//! (a deck of city cards has many duplicates); identity is always by id,
//! never by name.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Ids are opaque: minted sequentially at creation and never reused while
/// the card exists. Nothing outside the save layer should interpret them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a card ID from a raw value.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An individually identified card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name. Duplicates across cards are legal and expected.
    pub name: String,
}

impl Card {
    /// Create a new card record.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_duplicate_names_distinct_identity() {
        let a = Card::new(CardId::new(1), "Madrid");
        let b = Card::new(CardId::new(2), "Madrid");

        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(7), "Cairo");
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
