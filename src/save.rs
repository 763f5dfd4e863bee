//! Versioned save-file encoding.
//!
//! The core's `load` action only ever sees a normalized `Universe`; this
//! module is the transcoder that gets it there. Two wire formats exist:
//!
//! - **v1** (current): the universe shape as JSON, tagged
//!   `version: "1"`, with external string ids.
//! - **v0** (legacy): two fixed decks encoded as run-length
//!   `{item, count}` lists, where a string item is a run of same-named
//!   cards and a numeric item references an "assortment" (the old name
//!   for an uncertainty group) whose members are listed separately as
//!   name-to-count maps.
//!
//! Decoding either format yields a universe honoring every model
//! invariant: no empty groups, no dangling ids. External ids are opaque
//! strings (historically UUIDs); decode re-keys them onto the engine's
//! numeric ids, preserving numeric ids as-is when the whole file uses
//! them so that encode/decode round-trips exactly.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::universe::{Card, CardId, Deck, DeckItem, Group, GroupId, Universe};

/// What a save file carries besides the universe itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// The normalized universe.
    pub universe: Universe,
    /// The user's last draw-count setting, preserved across sessions.
    pub draw_count: i64,
}

/// Decode a save file of any supported version.
///
/// ## Errors
///
/// [`SaveError::Json`] for malformed payloads,
/// [`SaveError::UnsupportedVersion`] for versions this build doesn't
/// know, [`SaveError::DanglingReference`] when the file references ids it
/// never defines.
pub fn decode(json: &str) -> Result<SaveData, SaveError> {
    let file: SaveFile = serde_json::from_str(json)?;
    match file {
        SaveFile::V1(file) => decode_v1(file),
        SaveFile::V0(file) => decode_v0(file),
    }
}

/// Encode a save file in the current (v1) format.
///
/// ## Errors
///
/// [`SaveError::Json`] if serialization fails, which a well-formed
/// universe never does.
pub fn encode(data: &SaveData) -> Result<String, SaveError> {
    Ok(serde_json::to_string(&encode_v1(data))?)
}

// === Wire shapes ===

#[derive(Deserialize)]
#[serde(untagged)]
enum SaveFile {
    V1(FileV1),
    V0(FileV0),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileV1 {
    version: String,
    universe: UniverseV1,
    draw_count: i64,
}

#[derive(Serialize, Deserialize)]
struct UniverseV1 {
    cards: Vec<CardV1>,
    decks: Vec<DeckV1>,
    groups: Vec<GroupV1>,
}

#[derive(Serialize, Deserialize)]
struct CardV1 {
    id: String,
    name: String,
}

#[derive(Serialize, Deserialize)]
struct DeckV1 {
    id: String,
    items: Vec<ItemV1>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ItemV1 {
    #[serde(rename_all = "camelCase")]
    Card { card_id: String },
    #[serde(rename_all = "camelCase")]
    Group { group_id: String },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupV1 {
    id: String,
    card_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileV0 {
    infection_deck: DeckV0,
    discard_deck: DeckV0,
    draw_count: i64,
}

#[derive(Deserialize)]
struct DeckV0 {
    #[serde(default)]
    name: String,
    cards: Vec<RunV0>,
    #[serde(default)]
    assortments: Vec<AssortmentV0>,
}

#[derive(Deserialize)]
struct RunV0 {
    item: RunItemV0,
    count: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RunItemV0 {
    Card(String),
    Assortment(u64),
}

#[derive(Deserialize)]
struct AssortmentV0 {
    id: u64,
    // sorted map so decode order is deterministic
    cards: BTreeMap<String, usize>,
}

// === v1 ===

fn decode_v1(file: FileV1) -> Result<SaveData, SaveError> {
    if file.version != "1" {
        return Err(SaveError::UnsupportedVersion(file.version));
    }

    // Keep numeric external ids when the whole file uses them, so our own
    // output round-trips exactly; otherwise re-key everything.
    let numeric = file.universe.cards.iter().map(|c| &c.id).all(is_numeric)
        && file.universe.groups.iter().map(|g| &g.id).all(is_numeric);

    let mut universe = Universe::empty();

    let mut card_ids: FxHashMap<&str, CardId> = FxHashMap::default();
    for (index, card) in file.universe.cards.iter().enumerate() {
        let id = external_id(&card.id, index, numeric, CardId::new);
        card_ids.insert(card.id.as_str(), id);
        universe.cards.push_back(Card::new(id, card.name.clone()));
    }

    let mut group_ids: FxHashMap<&str, GroupId> = FxHashMap::default();
    for (index, group) in file.universe.groups.iter().enumerate() {
        // empty groups must not exist; a well-formed file has none
        if group.card_ids.is_empty() {
            continue;
        }
        let id = external_id(&group.id, index, numeric, GroupId::new);
        group_ids.insert(group.id.as_str(), id);
        let members = group
            .card_ids
            .iter()
            .map(|external| resolve(&card_ids, external, "card"))
            .collect::<Result<Vec<_>, _>>()?;
        universe.groups.push_back(Group::new(id, members));
    }

    for deck in &file.universe.decks {
        let mut decoded = Deck::new(deck.id.clone());
        for item in &deck.items {
            let item = match item {
                ItemV1::Card { card_id } => DeckItem::card(resolve(&card_ids, card_id, "card")?),
                ItemV1::Group { group_id } => {
                    DeckItem::group(resolve(&group_ids, group_id, "group")?)
                }
            };
            decoded.items.push_back(item);
        }
        universe.decks.push_back(decoded);
    }

    Ok(SaveData {
        universe,
        draw_count: file.draw_count,
    })
}

fn is_numeric(id: &String) -> bool {
    id.parse::<u64>().is_ok()
}

fn external_id<T>(external: &str, index: usize, numeric: bool, make: impl Fn(u64) -> T) -> T {
    if numeric {
        if let Ok(raw) = external.parse::<u64>() {
            return make(raw);
        }
    }
    make(index as u64)
}

fn resolve<T: Copy>(
    ids: &FxHashMap<&str, T>,
    external: &str,
    kind: &'static str,
) -> Result<T, SaveError> {
    ids.get(external)
        .copied()
        .ok_or_else(|| SaveError::DanglingReference {
            kind,
            id: external.to_string(),
        })
}

fn encode_v1(data: &SaveData) -> FileV1 {
    FileV1 {
        version: "1".to_string(),
        universe: UniverseV1 {
            cards: data
                .universe
                .cards
                .iter()
                .map(|card| CardV1 {
                    id: card.id.raw().to_string(),
                    name: card.name.clone(),
                })
                .collect(),
            decks: data
                .universe
                .decks
                .iter()
                .map(|deck| DeckV1 {
                    id: deck.id.clone(),
                    items: deck
                        .items
                        .iter()
                        .map(|item| match item {
                            DeckItem::Card { card_id } => ItemV1::Card {
                                card_id: card_id.raw().to_string(),
                            },
                            DeckItem::Group { group_id } => ItemV1::Group {
                                group_id: group_id.raw().to_string(),
                            },
                        })
                        .collect(),
                })
                .collect(),
            groups: data
                .universe
                .groups
                .iter()
                .map(|group| GroupV1 {
                    id: group.id.raw().to_string(),
                    card_ids: group
                        .card_ids
                        .iter()
                        .map(|id| id.raw().to_string())
                        .collect(),
                })
                .collect(),
        },
        draw_count: data.draw_count,
    }
}

// === v0 ===

fn decode_v0(file: FileV0) -> Result<SaveData, SaveError> {
    let mut universe = Universe::empty();
    let mut next_card = 0_u64;
    let mut next_group = 0_u64;

    for (deck, fallback) in [
        (file.infection_deck, "infection"),
        (file.discard_deck, "discard"),
    ] {
        decode_v0_deck(&mut universe, &mut next_card, &mut next_group, deck, fallback)?;
    }

    Ok(SaveData {
        universe,
        draw_count: file.draw_count,
    })
}

fn decode_v0_deck(
    universe: &mut Universe,
    next_card: &mut u64,
    next_group: &mut u64,
    wire: DeckV0,
    fallback_id: &str,
) -> Result<(), SaveError> {
    let id = if wire.name.is_empty() {
        fallback_id.to_string()
    } else {
        wire.name.clone()
    };
    let mut deck = Deck::new(id);

    // Assortment ids are local to one deck in the legacy format.
    let mut locals: FxHashMap<u64, GroupId> = FxHashMap::default();
    let mut members: FxHashMap<GroupId, Vec<CardId>> = FxHashMap::default();
    let mut order: Vec<GroupId> = Vec::new();

    let mut mint = |universe: &mut Universe, name: &str, count: usize| -> Vec<CardId> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let id = CardId::new(*next_card);
            *next_card += 1;
            universe.cards.push_back(Card::new(id, name));
            ids.push(id);
        }
        ids
    };

    for run in &wire.cards {
        match &run.item {
            RunItemV0::Card(name) => {
                for id in mint(universe, name, run.count) {
                    deck.items.push_back(DeckItem::card(id));
                }
            }
            RunItemV0::Assortment(local) => {
                let group_id = *locals.entry(*local).or_insert_with(|| {
                    let id = GroupId::new(*next_group);
                    *next_group += 1;
                    members.insert(id, Vec::new());
                    order.push(id);
                    id
                });
                for _ in 0..run.count {
                    deck.items.push_back(DeckItem::group(group_id));
                }
            }
        }
    }

    for assortment in &wire.assortments {
        let group_id = *locals.entry(assortment.id).or_insert_with(|| {
            let id = GroupId::new(*next_group);
            *next_group += 1;
            members.insert(id, Vec::new());
            order.push(id);
            id
        });
        for (name, count) in &assortment.cards {
            let minted = mint(universe, name, *count);
            if let Some(pool) = members.get_mut(&group_id) {
                pool.extend(minted);
            }
        }
    }

    for group_id in order {
        let pool = members.remove(&group_id).unwrap_or_default();
        if pool.is_empty() {
            // slots pointing at an assortment the file never filled in
            return Err(SaveError::DanglingReference {
                kind: "assortment",
                id: group_id.raw().to_string(),
            });
        }
        universe.groups.push_back(Group::new(group_id, pool));
    }

    universe.decks.push_back(deck);
    Ok(())
}
