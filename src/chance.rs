//! Draw-probability engine.
//!
//! Answers: what is the probability that at least one of the next N
//! draws off the top of a deck resolves to a card with a given name?
//!
//! The walk treats each group as a shrinking pool. The first time a
//! group's slot is encountered it is sized from the universe's current
//! member set; every subsequent slot of the same group draws against one
//! fewer remaining card. The match count is never decremented — after a
//! hypothetical non-match it is still an upper-bound-consistent count,
//! and a hypothetical match already ended the "at least one" question.
//! All of this state is local to one call; the universe is never touched.

use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::universe::{Deck, DeckItem, GroupId, Universe};

/// A group's remaining pool during one probability walk.
struct ImaginedPool {
    /// Cards not yet hypothetically drawn from the group.
    total: usize,
    /// Members whose name matches the query.
    matching: usize,
}

/// Probability that a card named `name` appears within the next
/// `draw_count` draws from the top of `deck`.
///
/// Walks slots from index 0, stopping early with certainty the moment a
/// concrete slot carries the name. Unknown slots contribute their group's
/// conditional chance, accumulated as
/// `total = total + (1 - total) * chance`.
///
/// ## Errors
///
/// A negative `draw_count` is a caller bug and returns
/// [`EngineError::NegativeDrawCount`]. `draw_count == 0` is a valid
/// question with answer 0.
pub fn calculate_draw_chance(
    universe: &Universe,
    deck: &Deck,
    name: &str,
    draw_count: i64,
) -> Result<f64, EngineError> {
    if draw_count < 0 {
        return Err(EngineError::NegativeDrawCount(draw_count));
    }
    if draw_count == 0 {
        return Ok(0.0);
    }

    let mut pools: FxHashMap<GroupId, ImaginedPool> = FxHashMap::default();
    let mut total_chance = 0.0_f64;

    let draws = deck.items.len().min(draw_count as usize);
    for item in deck.items.iter().take(draws) {
        let group_id = match item {
            DeckItem::Card { card_id } => {
                if universe.card_name(*card_id) == Some(name) {
                    return Ok(1.0);
                }
                continue;
            }
            DeckItem::Group { group_id } => *group_id,
        };

        let pool = pools.entry(group_id).or_insert_with(|| {
            match universe.group(group_id) {
                Some(group) => ImaginedPool {
                    total: group.len(),
                    matching: group
                        .card_ids
                        .iter()
                        .filter(|&&id| universe.card_name(id) == Some(name))
                        .count(),
                },
                // Dangling reference: an empty pool contributes nothing.
                None => ImaginedPool {
                    total: 0,
                    matching: 0,
                },
            }
        });

        if pool.total == 0 {
            continue;
        }
        let chance = pool.matching as f64 / pool.total as f64;
        total_chance += (1.0 - total_chance) * chance;
        pool.total -= 1;
    }

    Ok(total_chance)
}
