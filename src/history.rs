//! Generic undo/redo wrapper with keyframe coalescing.
//!
//! `History<T, A>` wraps any reducible state type. It is not specific to
//! universes: `T` only needs to implement [`Reduce<A>`]. The caller holds
//! the wrapper value and threads it explicitly; there is no ambient undo
//! context anywhere.
//!
//! ## Coalescing
//!
//! One user-facing operation often spans several actions ("draw a card"
//! is a move followed by a reveal). Consecutive dispatches merge into a
//! single undo step until the caller marks a boundary with
//! [`History::set_keyframe`]; undoing then reverts the whole step at
//! once. Undo restores the step's stored initial snapshot — nothing is
//! ever un-applied, only replayed from a known-good value.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A state type that can derive its successor from an action.
pub trait Reduce<A>: Sized {
    /// Produce the next state. Must be pure: no effects, no surprises.
    #[must_use]
    fn reduce(&self, action: &A) -> Self;
}

/// One undo step: the snapshot it started from and the actions applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<T, A> {
    /// State before the first action of this step.
    pub initial: T,
    /// Actions coalesced into this step, in dispatch order.
    pub actions: Vec<A>,
}

/// History bookkeeping as data, completing the action vocabulary.
///
/// Ordinary state mutations ride in `Dispatch`; the rest manipulate the
/// history itself. Like every other action these are plain serializable
/// values, so a full session log can be persisted or replayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HistoryAction<A> {
    /// Apply an inner action through the wrapped reducer.
    #[serde(rename_all = "camelCase")]
    Dispatch {
        /// The inner action.
        action: A,
    },
    /// Revert the most recent undo step.
    Undo,
    /// Re-apply the most recently undone step.
    Redo,
    /// Mark an undo-step boundary; the next dispatch starts a new step.
    SetKeyframe,
    /// Forget all undo/redo state, keeping the current snapshot.
    ClearHistory,
}

/// Undo/redo wrapper around a reducible state value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T, A> {
    past: Vec<HistoryEntry<T, A>>,
    future: VecDeque<Vec<A>>,
    current: T,
    keyframe: bool,
}

impl<T, A> History<T, A>
where
    T: Reduce<A> + Clone,
{
    /// Wrap an initial state with empty history.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            future: VecDeque::new(),
            current: initial,
            keyframe: true,
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Whether `undo` would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether `redo` would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Apply an action and record it.
    ///
    /// Clears the redo future. Starts a new undo step at a keyframe (or
    /// when history is empty), otherwise coalesces into the latest step.
    pub fn dispatch(&mut self, action: A) {
        let next = self.current.reduce(&action);
        self.future.clear();

        if self.keyframe || self.past.is_empty() {
            let initial = std::mem::replace(&mut self.current, next);
            self.past.push(HistoryEntry {
                initial,
                actions: vec![action],
            });
            self.keyframe = false;
        } else {
            self.current = next;
            if let Some(entry) = self.past.last_mut() {
                entry.actions.push(action);
            }
        }
    }

    /// Mark an undo-step boundary.
    ///
    /// No-op when already at a boundary or when nothing has happened yet.
    pub fn set_keyframe(&mut self) {
        if self.keyframe || self.past.is_empty() {
            return;
        }
        self.keyframe = true;
    }

    /// Revert the latest undo step, restoring its initial snapshot.
    ///
    /// ## Errors
    ///
    /// [`EngineError::NothingToUndo`] when no step is recorded.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let entry = self.past.pop().ok_or(EngineError::NothingToUndo)?;
        self.current = entry.initial;
        self.future.push_front(entry.actions);
        self.keyframe = true;
        Ok(())
    }

    /// Re-apply the most recently undone step by replaying its actions.
    ///
    /// ## Errors
    ///
    /// [`EngineError::NothingToRedo`] when nothing has been undone.
    pub fn redo(&mut self) -> Result<(), EngineError> {
        let actions = self.future.pop_front().ok_or(EngineError::NothingToRedo)?;
        let initial = self.current.clone();
        let mut current = initial.clone();
        for action in &actions {
            current = current.reduce(action);
        }
        self.current = current;
        self.past.push(HistoryEntry { initial, actions });
        self.keyframe = true;
        Ok(())
    }

    /// Forget all recorded history, keeping the current snapshot.
    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
        self.keyframe = true;
    }

    /// Apply one history-level action value.
    ///
    /// ## Errors
    ///
    /// Propagates the undo/redo errors; every other variant is
    /// infallible.
    pub fn apply(&mut self, action: HistoryAction<A>) -> Result<(), EngineError> {
        match action {
            HistoryAction::Dispatch { action } => {
                self.dispatch(action);
                Ok(())
            }
            HistoryAction::Undo => self.undo(),
            HistoryAction::Redo => self.redo(),
            HistoryAction::SetKeyframe => {
                self.set_keyframe();
                Ok(())
            }
            HistoryAction::ClearHistory => {
                self.clear_history();
                Ok(())
            }
        }
    }
}
