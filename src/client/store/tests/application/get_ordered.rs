//! Tests for the order index projection.

use super::app;
use crate::client::store::application::ApplicationState;

/// Tests that applications come back sorted ascending by position,
/// regardless of insertion order.
///
/// Expected: ids in position order for the queried pipeline only.
#[test]
fn sorts_by_position_per_pipeline() {
    let mut state = ApplicationState::default();
    state.set_all(vec![
        app(1, 10, 30.0),
        app(2, 10, 10.0),
        app(3, 20, 5.0),
        app(4, 10, 20.0),
    ]);

    let ids: Vec<i64> = state.get_ordered(10).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 4, 1]);
    assert_eq!(state.ordered_ids(20), &[3]);
}

/// Tests that the index always agrees with the authoritative membership:
/// no duplicates, no omissions.
///
/// Expected: union of per-pipeline orderings equals the full record set.
#[test]
fn index_is_consistent_with_membership() {
    let mut state = ApplicationState::default();
    state.set_all(vec![
        app(1, 10, 1.0),
        app(2, 10, 2.0),
        app(3, 20, 1.0),
        app(4, 30, 1.0),
    ]);

    let mut indexed: Vec<i64> = [10, 20, 30]
        .iter()
        .flat_map(|pid| state.ordered_ids(*pid).to_vec())
        .collect();
    indexed.sort_unstable();
    assert_eq!(indexed, vec![1, 2, 3, 4]);
}

/// Tests idempotence: querying twice without an intervening mutation
/// returns equal results from the cached index.
///
/// Expected: value-equal id slices, same backing cache entry.
#[test]
fn repeated_queries_hit_the_cache() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 1.0), app(2, 10, 2.0)]);

    let first = state.ordered_ids(10).as_ptr();
    let second = state.ordered_ids(10).as_ptr();
    assert_eq!(first, second);
    assert_eq!(state.get_ordered(10), state.get_ordered(10));
}

/// Tests that indexed ids resolve through keyed record lookup, so a large
/// record set in other pipelines does not disturb (or slow) one column's
/// projection.
///
/// Expected: the queried column resolves every id, ties break by id.
#[test]
fn lookup_is_keyed_by_id() {
    let mut state = ApplicationState::default();
    let mut records = vec![app(2, 10, 5.0), app(1, 10, 5.0), app(3, 10, 1.0)];
    for id in 100..600 {
        records.push(app(id, 20, id as f64));
    }
    state.set_all(records);

    let ordered: Vec<i64> = state.get_ordered(10).iter().map(|a| a.id).collect();
    assert_eq!(ordered, vec![3, 1, 2]);
    assert_eq!(state.ordered_ids(20).len(), 500);
    assert_eq!(state.get(599).unwrap().pipeline_id, 20);
}

/// Tests that a pipeline with no applications yields an empty ordering.
///
/// Expected: empty slice, not a panic or a missing entry error.
#[test]
fn unknown_pipeline_is_empty() {
    let mut state = ApplicationState::default();
    state.set_all(vec![app(1, 10, 1.0)]);

    assert!(state.ordered_ids(99).is_empty());
    assert!(state.get_ordered(99).is_empty());
}
