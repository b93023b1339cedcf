//! Tests for position renormalization when midpoint precision runs out.

use super::app;
use crate::client::store::application::ApplicationState;
use crate::client::store::position::{MIN_GAP, POSITION_STEP};

/// Tests that inserting into a collapsed gap rewrites the whole pipeline to
/// evenly spaced positions instead of subdividing further.
///
/// Expected: every card gets a step-spaced position, observable order is the
/// requested one, and all rewritten cards are reported for persistence.
#[test]
fn collapsed_gap_triggers_renormalization() {
    let mut state = ApplicationState::default();
    state.set_all(vec![
        app(1, 10, 10.0),
        app(2, 10, 10.0 + MIN_GAP / 10.0),
        app(3, 20, 5.0),
    ]);

    let moves = state.move_in_order(3, 10, Some(2)).unwrap();

    assert_eq!(state.ordered_ids(10), &[1, 3, 2]);
    assert_eq!(moves.len(), 3);
    for (i, id) in [1, 3, 2].iter().enumerate() {
        assert_eq!(
            state.get(*id).unwrap().position,
            (i as f64 + 1.0) * POSITION_STEP
        );
    }
    // The collapsed gap is gone.
    let positions: Vec<f64> = state.get_ordered(10).iter().map(|a| a.position).collect();
    for pair in positions.windows(2) {
        assert!(pair[1] - pair[0] >= POSITION_STEP);
    }
}

/// Tests that repeated insertions between the same two neighbors stay
/// ordered even as the gap shrinks toward the renormalization threshold.
///
/// Expected: strict ordering invariant holds across the whole sequence.
#[test]
fn repeated_insertions_between_neighbors_stay_ordered() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 0.0), app(2, 10, 1.0)]);

    // Keep wedging new cards in right before card 2.
    for id in 3..60 {
        state.insert(app(id, 20, id as f64));
        state.move_in_order(id, 10, Some(2)).unwrap();
        let positions: Vec<f64> = state.get_ordered(10).iter().map(|a| a.position).collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
