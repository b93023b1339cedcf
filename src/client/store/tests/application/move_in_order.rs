//! Tests for optimistic application moves.

use super::app;
use crate::client::store::application::ApplicationState;
use crate::client::store::position::POSITION_STEP;

/// Tests inserting between two cards takes the midpoint position.
///
/// Expected: y.position == 20 and order [x, y, z].
#[test]
fn insertion_between_neighbors_takes_midpoint() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 10.0), app(3, 10, 30.0), app(2, 20, 5.0)]);

    let moves = state.move_in_order(2, 10, Some(3)).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].position, 20.0);
    assert_eq!(moves[0].pipeline_id, 10);
    assert_eq!(state.ordered_ids(10), &[1, 2, 3]);
}

/// Tests the cross-column drag scenario: moving the head of one pipeline
/// into an empty pipeline.
///
/// Expected: A = [y], B = [x], x.pipeline_id == B.
#[test]
fn cross_column_move_to_empty_pipeline() {
    let a = 10;
    let b = 20;
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, a, 10.0), app(2, a, 20.0)]);

    let moves = state.move_in_order(1, b, None).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(state.ordered_ids(a), &[2]);
    assert_eq!(state.ordered_ids(b), &[1]);
    assert_eq!(state.get(1).unwrap().pipeline_id, b);
    // Empty pipeline inserts between the implicit 0 and step bounds.
    assert_eq!(state.get(1).unwrap().position, POSITION_STEP / 2.0);
}

/// Tests that dropping a card before itself is a no-op.
///
/// Expected: None (no network call), order unchanged.
#[test]
fn drop_before_self_is_noop() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 10.0), app(2, 10, 20.0)]);

    assert!(state.move_in_order(1, 10, Some(1)).is_none());
    assert_eq!(state.ordered_ids(10), &[1, 2]);
}

/// Tests that dropping a card into the slot it already occupies is a no-op.
///
/// Expected: None for both "before my successor" and "append while last".
#[test]
fn drop_into_current_slot_is_noop() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 10.0), app(2, 10, 20.0), app(3, 10, 30.0)]);

    // 1 sits immediately before 2 already.
    assert!(state.move_in_order(1, 10, Some(2)).is_none());
    // 3 is already last.
    assert!(state.move_in_order(3, 10, None).is_none());
    assert_eq!(state.ordered_ids(10), &[1, 2, 3]);
    assert_eq!(state.get(1).unwrap().position, 10.0);
}

/// Tests moving a card to the tail of its own pipeline.
///
/// Expected: position past the previous tail, order rotated.
#[test]
fn move_head_to_tail() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 10.0), app(2, 10, 20.0), app(3, 10, 30.0)]);

    let moves = state.move_in_order(1, 10, None).unwrap();
    assert_eq!(state.ordered_ids(10), &[2, 3, 1]);
    assert!(moves[0].position > 30.0);
}

/// Tests that a move targeting an id that is not in the target pipeline is
/// ignored rather than applied somewhere arbitrary.
///
/// Expected: None, state untouched.
#[test]
fn unknown_before_id_is_noop() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 10.0), app(2, 20, 10.0)]);

    assert!(state.move_in_order(1, 10, Some(99)).is_none());
    assert!(state.move_in_order(99, 10, None).is_none());
    assert_eq!(state.ordered_ids(10), &[1]);
}

/// Tests that arbitrary move sequences keep the index exactly equal to the
/// ids sorted by ascending position, with no duplicates or omissions.
///
/// Expected: after every move, index == membership sorted by position.
#[test]
fn move_sequences_preserve_index_invariant() {
    let a = 10;
    let b = 20;
    let mut state = ApplicationState::default();
    state.set_all(vec![
        app(1, a, 10.0),
        app(2, a, 20.0),
        app(3, a, 30.0),
        app(4, b, 10.0),
        app(5, b, 20.0),
    ]);

    let moves = [
        (1, b, Some(4)),
        (3, b, None),
        (5, a, Some(2)),
        (4, a, None),
        (2, b, Some(3)),
    ];
    for (id, target, before) in moves {
        state.move_in_order(id, target, before);
        for pid in [a, b] {
            let mut expected: Vec<(f64, i64)> = (1..=5)
                .filter_map(|id| state.get(id))
                .filter(|app| app.pipeline_id == pid)
                .map(|app| (app.position, app.id))
                .collect();
            expected.sort_by(|x, y| x.partial_cmp(y).unwrap());
            let expected: Vec<i64> = expected.into_iter().map(|(_, id)| id).collect();
            assert_eq!(state.ordered_ids(pid), expected.as_slice());
        }
    }
}
