//! Whole-universe replacement: reset and load.

use crate::universe::Universe;

/// Replace the universe with the canonical empty one.
#[must_use]
pub fn reset(_universe: &Universe) -> Universe {
    Universe::empty()
}

/// Replace the universe with a supplied snapshot.
///
/// The result shares no *mutable* structure with the caller's value —
/// every collection involved is persistent, so later derivations can
/// never alias writes back into the input. Referential integrity of the
/// snapshot is the transcoder's responsibility; load does not re-validate.
#[must_use]
pub fn load(_universe: &Universe, snapshot: &Universe) -> Universe {
    snapshot.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::cards::create_cards;
    use crate::reducer::decks::create_deck;

    #[test]
    fn test_reset_discards_everything() {
        let universe = create_deck(&Universe::empty(), "main");
        let universe = create_cards(&universe, "main", None, &["A".to_string()]);

        assert_eq!(reset(&universe), Universe::empty());
    }

    #[test]
    fn test_load_adopts_snapshot() {
        let current = create_deck(&Universe::empty(), "stale");
        let snapshot = create_deck(&Universe::empty(), "fresh");

        let next = load(&current, &snapshot);

        assert_eq!(next, snapshot);
        assert!(next.deck("stale").is_none());
    }

    #[test]
    fn test_loaded_state_diverges_independently() {
        let snapshot = create_deck(&Universe::empty(), "main");
        let loaded = load(&Universe::empty(), &snapshot);

        let mutated = create_cards(&loaded, "main", None, &["A".to_string()]);

        assert_eq!(snapshot.cards.len(), 0);
        assert_eq!(mutated.cards.len(), 1);
        assert_eq!(loaded, snapshot);
    }
}
