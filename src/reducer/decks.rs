//! Deck operations: creation, slot movement, and shuffling.

use log::{debug, warn};

use crate::universe::deck::{resolve_count, resolve_insert, resolve_start};
use crate::universe::{Deck, DeckItem, Group, GroupId, Universe};

/// Append a new empty deck. A duplicate id is a no-op.
#[must_use]
pub fn create_deck(universe: &Universe, deck_id: &str) -> Universe {
    if universe.deck(deck_id).is_some() {
        warn!("deck {deck_id:?} already exists");
        return universe.clone();
    }

    let mut next = universe.clone();
    next.decks.push_back(Deck::new(deck_id));
    next
}

/// Move `count` consecutive slots between decks, preserving their order.
///
/// Splice conventions throughout: negative `from_index` counts from the
/// end, `count == -1` takes everything from `from_index` on, and negative
/// `to_index` offsets from one past the end (`-1` appends). The insertion
/// point resolves against the destination *after* removal, which matters
/// when source and destination are the same deck.
///
/// No-op when either deck is missing or the requested slice doesn't hold
/// exactly `count` items.
#[must_use]
pub fn move_card(
    universe: &Universe,
    from_deck_id: &str,
    from_index: i64,
    to_deck_id: &str,
    to_index: i64,
    count: i64,
) -> Universe {
    let Some(from) = universe.deck_index(from_deck_id) else {
        warn!("deck {from_deck_id:?} not found when moving cards");
        return universe.clone();
    };
    let Some(to) = universe.deck_index(to_deck_id) else {
        warn!("deck {to_deck_id:?} not found when moving cards");
        return universe.clone();
    };

    let from_len = universe.decks[from].len();
    let Some(start) = resolve_start(from_len, from_index) else {
        warn!("index {from_index} out of range for deck {from_deck_id:?}");
        return universe.clone();
    };
    let Some(taken) = resolve_count(from_len, start, count) else {
        warn!("deck {from_deck_id:?} has no {count}-item slice at {from_index}");
        return universe.clone();
    };

    let dest_len = if from == to {
        from_len - taken
    } else {
        universe.decks[to].len()
    };
    let Some(at) = resolve_insert(dest_len, to_index) else {
        warn!("index {to_index} out of range for deck {to_deck_id:?}");
        return universe.clone();
    };

    let mut next = universe.clone();
    let moved = next.decks[from].items.slice(start..start + taken);
    for (offset, item) in moved.into_iter().enumerate() {
        next.decks[to].items.insert(at + offset, item);
    }
    next
}

/// Re-randomize a deck: fold every slot into one fresh uncertainty group.
///
/// Collects the deck's concrete cards plus the full membership of every
/// group it references, deletes the consumed groups, and replaces the
/// deck's item sequence with one group slot per combined card. No
/// position mapping is tracked — the group abstraction makes position
/// meaningless until a reveal.
///
/// Preconditions (violations are no-ops):
/// - every referenced group must be wholly contained in this deck, slot
///   for member, so the shuffle cannot entangle state held elsewhere
/// - the combined cards must span at least two distinct names; a
///   single-identity deck has no uncertainty to encode
#[must_use]
pub fn shuffle_deck(universe: &Universe, deck_id: &str) -> Universe {
    let Some(deck_index) = universe.deck_index(deck_id) else {
        warn!("deck {deck_id:?} not found when shuffling");
        return universe.clone();
    };
    let deck = &universe.decks[deck_index];

    // Group slot counts in first-seen order, plus the concrete cards.
    let mut slot_counts: Vec<(GroupId, usize)> = Vec::new();
    let mut combined = Vec::new();
    for item in &deck.items {
        match item {
            DeckItem::Card { card_id } => combined.push(*card_id),
            DeckItem::Group { group_id } => {
                match slot_counts.iter_mut().find(|(id, _)| id == group_id) {
                    Some((_, slots)) => *slots += 1,
                    None => slot_counts.push((*group_id, 1)),
                }
            }
        }
    }

    for &(group_id, slots) in &slot_counts {
        let Some(group) = universe.group(group_id) else {
            warn!("cannot shuffle {deck_id:?}: {group_id} does not exist");
            return universe.clone();
        };
        if group.len() != slots {
            warn!(
                "cannot shuffle {deck_id:?}: {group_id} has cards elsewhere, \
                 entanglement is not supported"
            );
            return universe.clone();
        }
    }

    for &(group_id, _) in &slot_counts {
        if let Some(group) = universe.group(group_id) {
            combined.extend(group.card_ids.iter().copied());
        }
    }

    let mut names: Vec<&str> = combined
        .iter()
        .filter_map(|&id| universe.card_name(id))
        .collect();
    names.sort_unstable();
    names.dedup();
    if names.len() <= 1 {
        debug!("shuffling {deck_id:?} is vacuous, every card shares one identity");
        return universe.clone();
    }

    let fresh = universe.next_group_id();
    let mut next = universe.clone();
    let consumed: Vec<GroupId> = slot_counts.into_iter().map(|(id, _)| id).collect();
    next.groups = next
        .groups
        .iter()
        .filter(|group| !consumed.contains(&group.id))
        .cloned()
        .collect();

    let group = Group::new(fresh, combined);
    let slots = group.len();
    next.groups.push_back(group);
    next.decks[deck_index].items = std::iter::repeat(DeckItem::group(fresh)).take(slots).collect();
    next
}
