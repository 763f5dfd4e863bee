//! # deckscope
//!
//! A state engine for card decks whose exact composition is partially
//! unknown. Cards inside a shuffled region are tracked as "uncertainty
//! groups" rather than individual positions, and the engine can answer
//! "what is the chance the named card shows up in the next N draws?"
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every mutation is a pure reducer
//!    `(Universe, Action) -> Universe`. Persistent data structures (`im`)
//!    make each derived snapshot cheap to produce, so the undo history
//!    can hold as many as it likes.
//!
//! 2. **Actions are data**: every operation is a plain serializable value.
//!    The action log doubles as a persistence and audit format.
//!
//! 3. **Explicit state threading**: the undo/redo wrapper is a generic
//!    value the caller holds and passes around. No ambient globals.
//!
//! ## Modules
//!
//! - `universe`: Cards, uncertainty groups, decks, and their aggregate
//! - `action`: The action vocabulary
//! - `reducer`: Pure sub-reducers, one per action kind
//! - `chance`: Draw-probability engine over mixed known/unknown sequences
//! - `history`: Generic undo/redo wrapper with keyframe coalescing
//! - `save`: Versioned save-file encoding (current + legacy formats)
//! - `error`: Error taxonomy

pub mod action;
pub mod chance;
pub mod error;
pub mod history;
pub mod reducer;
pub mod save;
pub mod universe;

// Re-export commonly used types
pub use crate::universe::{Card, CardId, Deck, DeckItem, Group, GroupId, Universe};

pub use crate::action::Action;

pub use crate::chance::calculate_draw_chance;

pub use crate::reducer::reduce;

pub use crate::error::{EngineError, SaveError};

pub use crate::history::{History, HistoryAction, Reduce};

pub use crate::save::SaveData;
