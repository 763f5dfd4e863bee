//! Entity model: cards, uncertainty groups, decks, and their aggregate.
//!
//! ## Key Types
//!
//! - `CardId`, `Card`: individually identified cards (names may repeat)
//! - `GroupId`, `Group`: a shuffled region's member pool
//! - `Deck`, `DeckItem`: ordered slots, each known or unknown
//! - `Universe`: the whole state value that reducers derive from

pub mod card;
pub mod deck;
pub mod group;
#[allow(clippy::module_inception)]
pub mod universe;

pub use card::{Card, CardId};
pub use deck::{Deck, DeckItem};
pub use group::{Group, GroupId};
pub use universe::Universe;
