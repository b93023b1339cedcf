//! Tests for the "create default stages" bootstrap.

use super::pipeline;
use crate::client::store::pipeline::{
    default_color, default_stage_payloads, PipelineState, DEFAULT_STAGES, PIPELINE_PALETTE,
};

/// Tests the bootstrap payloads: exactly five stages, in workflow order,
/// each with a palette color.
///
/// Expected: Wishlist, Applied, Interview, Offer, Rejected.
#[test]
fn payloads_name_the_five_stages_in_order() {
    let payloads = default_stage_payloads();

    let names: Vec<&str> = payloads.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Wishlist", "Applied", "Interview", "Offer", "Rejected"]
    );
    for (i, payload) in payloads.iter().enumerate() {
        assert_eq!(payload.color, default_color(i));
    }
}

/// Tests that seeding an empty board with the default stages yields five
/// pipelines with strictly increasing positions.
///
/// Expected: list order matches DEFAULT_STAGES, positions strictly increase.
#[test]
fn bootstrap_from_empty_board() {
    let mut state = PipelineState::default();
    assert!(state.is_empty());

    // The server assigns ids and tail positions as each create lands.
    for (i, name) in DEFAULT_STAGES.iter().enumerate() {
        let mut created = pipeline(i as i64 + 1, i as i32 + 1);
        created.name = (*name).to_string();
        created.is_default = true;
        state.insert(created);
    }

    assert_eq!(state.len(), 5);
    let names: Vec<&str> = state.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, DEFAULT_STAGES.to_vec());
    let positions: Vec<i32> = state.list().iter().map(|p| p.position).collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

/// Tests that the palette wraps by index instead of running out.
///
/// Expected: index wraps modulo the palette length.
#[test]
fn palette_wraps() {
    assert_eq!(default_color(0), PIPELINE_PALETTE[0]);
    assert_eq!(
        default_color(PIPELINE_PALETTE.len() + 2),
        PIPELINE_PALETTE[2]
    );
}
