//! Card lifecycle: creation and destruction.

use im::Vector;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::universe::{Card, CardId, DeckItem, GroupId, Universe};

/// Mint one fresh card per name and splice them into a deck.
///
/// New cards land as concrete items at `index` (`None` appends; an index
/// past the end clamps to append) and are appended to the registry.
/// Unknown target deck is a no-op.
#[must_use]
pub fn create_cards(
    universe: &Universe,
    deck_id: &str,
    index: Option<usize>,
    names: &[String],
) -> Universe {
    let Some(deck_index) = universe.deck_index(deck_id) else {
        warn!("deck {deck_id:?} not found when creating cards");
        return universe.clone();
    };

    let mut next = universe.clone();
    let mut fresh = next.next_card_id().raw();
    let mut minted: SmallVec<[DeckItem; 8]> = SmallVec::new();
    for name in names {
        let card = Card::new(CardId::new(fresh), name.clone());
        fresh += 1;
        minted.push(DeckItem::card(card.id));
        next.cards.push_back(card);
    }

    let deck = &mut next.decks[deck_index];
    let at = index.map_or(deck.items.len(), |i| i.min(deck.items.len()));
    for (offset, item) in minted.into_iter().enumerate() {
        deck.items.insert(at + offset, item);
    }

    next
}

/// Destroy cards, cascading into groups and decks.
///
/// Every destroyed id is removed from the registry and from any group
/// that held it; a group left empty disappears. Decks lose the concrete
/// items of destroyed cards, and for each group that lost N members,
/// exactly N of that group's slots vanish (walking decks in order) — the
/// unknown region shrinks by the number of slots that became impossible.
///
/// Ids that don't exist are ignored; if none exist the action is a no-op.
#[must_use]
pub fn destroy_cards(universe: &Universe, card_ids: &[CardId]) -> Universe {
    let doomed: FxHashSet<CardId> = card_ids
        .iter()
        .copied()
        .filter(|&id| universe.card(id).is_some())
        .collect();

    if doomed.is_empty() {
        if !card_ids.is_empty() {
            warn!("none of the cards to destroy exist");
        }
        return universe.clone();
    }

    let mut next = universe.clone();

    next.cards = next
        .cards
        .iter()
        .filter(|card| !doomed.contains(&card.id))
        .cloned()
        .collect();

    // Shrink groups; remember how many slots each one owes back.
    let mut slots_owed: FxHashMap<GroupId, usize> = FxHashMap::default();
    let mut surviving = Vector::new();
    for group in &next.groups {
        let mut group = group.clone();
        let before = group.len();
        for id in &doomed {
            group.card_ids.remove(id);
        }
        let lost = before - group.len();
        if lost > 0 {
            slots_owed.insert(group.id, lost);
        }
        if !group.is_empty() {
            surviving.push_back(group);
        }
    }
    next.groups = surviving;

    for deck in next.decks.iter_mut() {
        let kept: Vector<DeckItem> = deck
            .items
            .iter()
            .filter(|item| match item {
                DeckItem::Card { card_id } => !doomed.contains(card_id),
                DeckItem::Group { group_id } => match slots_owed.get_mut(group_id) {
                    Some(owed) if *owed > 0 => {
                        *owed -= 1;
                        false
                    }
                    _ => true,
                },
            })
            .copied()
            .collect();
        deck.items = kept;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::{Deck, Group};

    fn universe_with_deck(id: &str) -> Universe {
        let mut universe = Universe::empty();
        universe.decks.push_back(Deck::new(id));
        universe
    }

    #[test]
    fn test_create_cards_appends_to_registry_and_deck() {
        let universe = universe_with_deck("main");
        let names = vec!["Lima".to_string(), "Lima".to_string(), "Oslo".to_string()];

        let next = create_cards(&universe, "main", None, &names);

        assert_eq!(next.cards.len(), 3);
        let deck = next.deck("main").unwrap();
        assert_eq!(deck.len(), 3);
        // distinct ids even for repeated names
        assert_ne!(next.cards[0].id, next.cards[1].id);
        assert_eq!(next.cards[0].name, "Lima");
        assert_eq!(next.cards[2].name, "Oslo");
    }

    #[test]
    fn test_create_cards_at_index_preserves_order() {
        let universe = universe_with_deck("main");
        let universe = create_cards(
            &universe,
            "main",
            None,
            &["A".to_string(), "D".to_string()],
        );

        let next = create_cards(
            &universe,
            "main",
            Some(1),
            &["B".to_string(), "C".to_string()],
        );

        let deck = next.deck("main").unwrap();
        let names: Vec<_> = deck
            .items
            .iter()
            .map(|item| match item {
                DeckItem::Card { card_id } => next.card_name(*card_id).unwrap(),
                DeckItem::Group { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_create_cards_index_past_end_appends() {
        let universe = universe_with_deck("main");
        let next = create_cards(&universe, "main", Some(100), &["A".to_string()]);

        assert_eq!(next.deck("main").unwrap().len(), 1);
    }

    #[test]
    fn test_create_cards_missing_deck_is_noop() {
        let universe = universe_with_deck("main");
        let next = create_cards(&universe, "other", None, &["A".to_string()]);

        assert_eq!(next, universe);
    }

    #[test]
    fn test_destroy_concrete_card() {
        let universe = universe_with_deck("main");
        let universe = create_cards(&universe, "main", None, &["A".to_string(), "B".to_string()]);
        let a = universe.cards[0].id;

        let next = destroy_cards(&universe, &[a]);

        assert_eq!(next.cards.len(), 1);
        assert!(next.card(a).is_none());
        assert_eq!(next.deck("main").unwrap().len(), 1);
    }

    #[test]
    fn test_destroy_unknown_ids_is_noop() {
        let universe = universe_with_deck("main");
        let universe = create_cards(&universe, "main", None, &["A".to_string()]);

        let next = destroy_cards(&universe, &[CardId::new(999)]);

        assert_eq!(next, universe);
    }

    #[test]
    fn test_destroy_cascades_into_groups_and_deck_slots() {
        // Deck of three slots all drawn from one group {A, A, B}.
        let mut universe = Universe::empty();
        for (i, name) in ["A", "A", "B"].iter().enumerate() {
            universe
                .cards
                .push_back(Card::new(CardId::new(i as u64), *name));
        }
        let gid = GroupId::new(0);
        universe.groups.push_back(Group::new(
            gid,
            [CardId::new(0), CardId::new(1), CardId::new(2)],
        ));
        let mut deck = Deck::new("main");
        for _ in 0..3 {
            deck.items.push_back(DeckItem::group(gid));
        }
        universe.decks.push_back(deck);

        let next = destroy_cards(&universe, &[CardId::new(0)]);

        // one member gone, one slot gone
        assert_eq!(next.group(gid).unwrap().len(), 2);
        assert_eq!(next.deck("main").unwrap().len(), 2);
    }

    #[test]
    fn test_destroy_sole_member_deletes_group_and_all_its_slots() {
        let mut universe = Universe::empty();
        universe.cards.push_back(Card::new(CardId::new(0), "A"));
        let gid = GroupId::new(0);
        universe.groups.push_back(Group::new(gid, [CardId::new(0)]));
        let mut deck = Deck::new("main");
        deck.items.push_back(DeckItem::group(gid));
        universe.decks.push_back(deck);

        let next = destroy_cards(&universe, &[CardId::new(0)]);

        assert!(next.groups.is_empty());
        assert!(next.deck("main").unwrap().is_empty());
        assert!(next.cards.is_empty());
    }

    #[test]
    fn test_destroy_partial_set_ignores_unknown() {
        let universe = universe_with_deck("main");
        let universe = create_cards(&universe, "main", None, &["A".to_string()]);
        let a = universe.cards[0].id;

        let next = destroy_cards(&universe, &[a, CardId::new(999)]);

        assert!(next.cards.is_empty());
    }
}
