//! Reveals: resolving unknown slots, and the singleton collapse that
//! keeps vacuous groups from lingering.

use im::Vector;
use log::warn;
use rustc_hash::FxHashMap;

use crate::universe::{CardId, DeckItem, Group, GroupId, Universe};

/// Resolve the unknown slot at `index` of a deck to a card named `name`.
///
/// Any group member with that name is acceptable — same-named members are
/// interchangeable by construction. The chosen id leaves the group's
/// member set and the slot becomes a concrete card item, after which any
/// group left with a single identity is collapsed away.
///
/// No-op when the deck or slot is missing, the slot is already revealed,
/// the group is gone, or no member carries the requested name.
#[must_use]
pub fn reveal_card(universe: &Universe, deck_id: &str, index: usize, name: &str) -> Universe {
    let Some(deck_index) = universe.deck_index(deck_id) else {
        warn!("deck {deck_id:?} not found when revealing");
        return universe.clone();
    };
    let Some(item) = universe.decks[deck_index].items.get(index) else {
        warn!("slot {index} not found in deck {deck_id:?} when revealing");
        return universe.clone();
    };
    let DeckItem::Group { group_id } = *item else {
        warn!("slot {index} of deck {deck_id:?} is already revealed");
        return universe.clone();
    };
    let Some(group_index) = universe.group_index(group_id) else {
        warn!("{group_id} referenced by deck {deck_id:?} does not exist");
        return universe.clone();
    };
    let Some(chosen) = universe.groups[group_index]
        .card_ids
        .iter()
        .copied()
        .find(|&id| universe.card_name(id) == Some(name))
    else {
        warn!("no card named {name:?} can be at slot {index} of deck {deck_id:?}");
        return universe.clone();
    };

    let mut next = universe.clone();
    next.groups[group_index].card_ids.remove(&chosen);
    if next.groups[group_index].is_empty() {
        next.groups.remove(group_index);
    }
    next.decks[deck_index].items.set(index, DeckItem::card(chosen));

    collapse_settled_groups(&mut next);
    next
}

/// Collapse every group whose remaining members share a single identity.
///
/// Such a group encodes no real uncertainty: each of its slots becomes a
/// concrete card item (members assigned arbitrarily, they are
/// interchangeable) and the group is deleted. Empty groups are likewise
/// deleted. Runs to a fixpoint; one pass settles everything in practice
/// since collapsing never grows another group.
pub(crate) fn collapse_settled_groups(universe: &mut Universe) {
    loop {
        let mut pools: FxHashMap<GroupId, Vec<CardId>> = FxHashMap::default();
        for group in &universe.groups {
            if is_settled(universe, group) {
                pools.insert(group.id, group.card_ids.iter().copied().collect());
            }
        }
        if pools.is_empty() {
            return;
        }

        for deck in universe.decks.iter_mut() {
            let touched = deck.items.iter().any(|item| {
                matches!(item, DeckItem::Group { group_id } if pools.contains_key(group_id))
            });
            if !touched {
                continue;
            }

            let mut items = Vector::new();
            for item in &deck.items {
                match item {
                    DeckItem::Card { .. } => items.push_back(*item),
                    DeckItem::Group { group_id } => match pools.get_mut(group_id) {
                        Some(pool) => {
                            // Slots beyond the member count reference an
                            // already-exhausted pool and simply vanish.
                            if let Some(card_id) = pool.pop() {
                                items.push_back(DeckItem::card(card_id));
                            }
                        }
                        None => items.push_back(*item),
                    },
                }
            }
            deck.items = items;
        }

        let settled: Vec<GroupId> = pools.keys().copied().collect();
        universe.groups = universe
            .groups
            .iter()
            .filter(|group| !settled.contains(&group.id))
            .cloned()
            .collect();
    }
}

/// Whether a group's members all resolve to one name (or none at all).
///
/// A member whose card record is missing keeps the group alive; collapse
/// must not guess at identities it cannot resolve.
fn is_settled(universe: &Universe, group: &Group) -> bool {
    let mut members = group.card_ids.iter();
    let Some(&first) = members.next() else {
        return true;
    };
    let Some(first_name) = universe.card_name(first) else {
        return false;
    };
    members.all(|&id| universe.card_name(id) == Some(first_name))
}
