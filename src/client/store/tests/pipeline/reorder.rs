//! Tests for batched pipeline (column) reordering.

use super::pipeline;
use crate::client::store::pipeline::PipelineState;

/// Tests that reordering to a null target always places the moved pipeline
/// last with dense positions.
///
/// Expected: moved id at the tail, positions exactly 1..=N with no gaps.
#[test]
fn reorder_to_null_target_appends() {
    let mut state = PipelineState::default();
    // Sparse server-assigned positions.
    state.set_all(vec![pipeline(1, 3), pipeline(2, 7), pipeline(3, 20)]);

    let batch = state.reorder(1, None).unwrap();

    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    let positions: Vec<i32> = state.list().iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    // The batch carries the full mapping in the new order.
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[2].id, 1);
    assert_eq!(batch[2].position, 3);
}

/// Tests inserting a pipeline immediately before another.
///
/// Expected: moved id right before the target, dense positions.
#[test]
fn reorder_before_target() {
    let mut state = PipelineState::default();
    state.set_all(vec![pipeline(1, 1), pipeline(2, 2), pipeline(3, 3)]);

    let batch = state.reorder(3, Some(1)).unwrap();

    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0].id, 3);
    assert_eq!(batch[0].position, 1);
}

/// Tests no-op detection: a drop that leaves a dense order unchanged must
/// not produce a reorder request.
///
/// Expected: None for self-targets and same-slot drops.
#[test]
fn unchanged_order_is_noop() {
    let mut state = PipelineState::default();
    state.set_all(vec![pipeline(1, 1), pipeline(2, 2), pipeline(3, 3)]);

    assert!(state.reorder(2, Some(2)).is_none());
    assert!(state.reorder(3, None).is_none());
    assert!(state.reorder(1, Some(2)).is_none());
    assert!(state.reorder(99, None).is_none());
    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Tests that sparse positions are renumbered even when the order itself
/// does not change, so accepted reorders always leave dense positions.
///
/// Expected: a batch assigning 1..=N.
#[test]
fn sparse_positions_are_renumbered() {
    let mut state = PipelineState::default();
    state.set_all(vec![pipeline(1, 5), pipeline(2, 9)]);

    let batch = state.reorder(2, None).unwrap();
    assert_eq!(batch.len(), 2);
    let positions: Vec<i32> = state.list().iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2]);
}

/// Tests the failed-reorder recovery path: the optimistic local order is
/// discarded by an authoritative refetch.
///
/// Expected: after set_all with the server's pre-reorder state, list()
/// returns the pre-reorder order.
#[test]
fn failed_reorder_restored_by_refetch() {
    let server = vec![pipeline(1, 1), pipeline(2, 2), pipeline(3, 3)];
    let mut state = PipelineState::default();
    state.set_all(server.clone());

    state.reorder(1, None).unwrap();
    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    // The batched request failed; the caller refetches ground truth.
    state.set_all(server);
    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Tests that ties in server-assigned positions keep insertion order.
///
/// Expected: stable sort in set_all.
#[test]
fn equal_positions_keep_insertion_order() {
    let mut state = PipelineState::default();
    state.set_all(vec![pipeline(5, 1), pipeline(4, 1), pipeline(6, 1)]);

    let ids: Vec<i64> = state.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 4, 6]);
}
