//! Undo/redo over real universes.
//!
//! The unit tests in `history` use a toy reducer; these wire the wrapper
//! to the actual universe reducer and walk realistic sessions.

use deckscope::{Action, History, HistoryAction, Universe};

fn create_deck(id: &str) -> Action {
    Action::CreateDeck {
        deck_id: id.to_string(),
    }
}

fn create_cards(deck: &str, names: &[&str]) -> Action {
    Action::CreateCards {
        deck_id: deck.to_string(),
        index: None,
        names: names.iter().map(|n| n.to_string()).collect(),
    }
}

/// One keyframed step per action, like a frontend marking each completed
/// user gesture.
fn dispatch_steps(history: &mut History<Universe, Action>, actions: Vec<Action>) {
    for action in actions {
        history.dispatch(action);
        history.set_keyframe();
    }
}

#[test]
fn test_undo_steps_back_through_a_session() {
    let mut history = History::new(Universe::empty());
    dispatch_steps(
        &mut history,
        vec![
            create_deck("draw"),
            create_cards("draw", &["Lima", "Oslo"]),
            Action::ShuffleDeck {
                deck_id: "draw".to_string(),
            },
        ],
    );
    assert_eq!(history.current().groups.len(), 1);

    history.undo().unwrap();
    assert!(history.current().groups.is_empty());
    assert_eq!(history.current().cards.len(), 2);

    history.undo().unwrap();
    assert!(history.current().cards.is_empty());
    assert!(history.current().deck("draw").is_some());

    history.undo().unwrap();
    assert_eq!(*history.current(), Universe::empty());
    assert!(!history.can_undo());
}

#[test]
fn test_redo_rebuilds_the_same_states() {
    let mut history = History::new(Universe::empty());
    dispatch_steps(
        &mut history,
        vec![
            create_deck("draw"),
            create_cards("draw", &["Lima", "Oslo", "Cairo"]),
            Action::ShuffleDeck {
                deck_id: "draw".to_string(),
            },
            Action::RevealCard {
                deck_id: "draw".to_string(),
                index: 0,
                name: "Cairo".to_string(),
            },
        ],
    );
    let final_state = history.current().clone();

    let mut checkpoints = Vec::new();
    while history.can_undo() {
        checkpoints.push(history.current().clone());
        history.undo().unwrap();
    }
    assert_eq!(*history.current(), Universe::empty());

    while history.can_redo() {
        history.redo().unwrap();
        assert_eq!(history.current(), &checkpoints.pop().unwrap());
    }
    assert_eq!(*history.current(), final_state);
}

#[test]
fn test_compound_gesture_undoes_as_one_step() {
    // "Draw the top card": reveal it, then move it to the discard pile.
    // The frontend dispatches both before marking the keyframe.
    let mut history = History::new(Universe::empty());
    dispatch_steps(
        &mut history,
        vec![
            create_deck("draw"),
            create_deck("discard"),
            create_cards("draw", &["Lima", "Oslo"]),
            Action::ShuffleDeck {
                deck_id: "draw".to_string(),
            },
        ],
    );

    history.dispatch(Action::RevealCard {
        deck_id: "draw".to_string(),
        index: 0,
        name: "Oslo".to_string(),
    });
    history.dispatch(Action::MoveCard {
        from_deck_id: "draw".to_string(),
        from_index: 0,
        to_deck_id: "discard".to_string(),
        to_index: -1,
        count: 1,
    });
    history.set_keyframe();
    assert_eq!(history.current().deck("discard").unwrap().len(), 1);

    history.undo().unwrap();

    // Both the move and the reveal are gone.
    assert_eq!(history.current().deck("discard").unwrap().len(), 0);
    assert_eq!(history.current().deck("draw").unwrap().len(), 2);
    assert_eq!(history.current().groups.len(), 1);
}

#[test]
fn test_new_branch_discards_redo() {
    let mut history = History::new(Universe::empty());
    dispatch_steps(
        &mut history,
        vec![create_deck("draw"), create_cards("draw", &["Lima"])],
    );

    history.undo().unwrap();
    assert!(history.can_redo());

    history.dispatch(create_cards("draw", &["Oslo"]));

    assert!(!history.can_redo());
    let names: Vec<_> = history.current().cards.iter().map(|c| &c.name).collect();
    assert_eq!(names, vec!["Oslo"]);
}

#[test]
fn test_clear_history_pins_current_state() {
    let mut history = History::new(Universe::empty());
    dispatch_steps(
        &mut history,
        vec![create_deck("draw"), create_cards("draw", &["Lima"])],
    );
    let pinned = history.current().clone();

    history.clear_history();

    assert_eq!(*history.current(), pinned);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_action_log_replay_matches_live_session() {
    // A session expressed entirely as serializable history actions can be
    // replayed on a fresh wrapper and land in the same state.
    let log: Vec<HistoryAction<Action>> = vec![
        HistoryAction::Dispatch {
            action: create_deck("draw"),
        },
        HistoryAction::SetKeyframe,
        HistoryAction::Dispatch {
            action: create_cards("draw", &["Lima", "Oslo"]),
        },
        HistoryAction::SetKeyframe,
        HistoryAction::Dispatch {
            action: Action::ShuffleDeck {
                deck_id: "draw".to_string(),
            },
        },
        HistoryAction::Undo,
        HistoryAction::Redo,
    ];

    let json = serde_json::to_string(&log).unwrap();
    let replayed: Vec<HistoryAction<Action>> = serde_json::from_str(&json).unwrap();

    let mut live = History::new(Universe::empty());
    for action in log {
        live.apply(action).unwrap();
    }
    let mut replay = History::new(Universe::empty());
    for action in replayed {
        replay.apply(action).unwrap();
    }

    assert_eq!(live.current(), replay.current());
    assert_eq!(live.current().groups.len(), 1);
}
