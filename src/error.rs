//! Error taxonomy.
//!
//! The engine draws a hard line between two failure classes:
//!
//! - **Structural lookup failures** (missing deck, card not in group,
//!   out-of-range slice) are *not* errors. Reducers return the prior
//!   snapshot unchanged and log a warning, since a stale UI can race a
//!   dispatch against a snapshot it hasn't seen yet.
//! - **Caller-contract violations** are typed errors: they indicate a bug
//!   in the calling code, not a data race.

use thiserror::Error;

/// A caller-contract violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `calculate_draw_chance` was asked for a negative number of draws.
    #[error("draw count must be non-negative, got {0}")]
    NegativeDrawCount(i64),

    /// `undo` was called with no recorded history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// `redo` was called with no undone history.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// A save-file decoding failure.
///
/// These surface to the collaborator that owns storage; the core `load`
/// action only ever sees an already-validated universe.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The payload was not valid JSON, or matched no known format.
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload carried a version this build does not understand.
    #[error("unsupported save version {0:?}")]
    UnsupportedVersion(String),

    /// A deck item or group member referenced an id the file never defined.
    #[error("save file references unknown {kind} id {id:?}")]
    DanglingReference {
        /// What kind of record the id should have named ("card" or "group").
        kind: &'static str,
        /// The external id as it appeared in the file.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::NegativeDrawCount(-3).to_string(),
            "draw count must be non-negative, got -3"
        );
        assert_eq!(EngineError::NothingToUndo.to_string(), "nothing to undo");
        assert_eq!(EngineError::NothingToRedo.to_string(), "nothing to redo");
    }

    #[test]
    fn test_save_error_display() {
        let err = SaveError::UnsupportedVersion("7".to_string());
        assert_eq!(err.to_string(), "unsupported save version \"7\"");

        let err = SaveError::DanglingReference {
            kind: "card",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "save file references unknown card id \"abc\"");
    }
}
