//! Tests for drag payload parsing.

use crate::client::store::drag::{DragKind, DragPayload};

/// Tests that a well-formed payload parses back to itself.
#[test]
fn parses_own_encoding() {
    let payload = DragPayload::application(42, 7);
    let parsed = DragPayload::from_json(&payload.to_json()).unwrap();
    assert_eq!(parsed, payload);
    assert_eq!(parsed.kind, DragKind::Application);
}

/// Tests that malformed transfer data is swallowed rather than surfaced.
///
/// Expected: None for garbage, truncated JSON, and wrong shapes.
#[test]
fn malformed_payloads_yield_none() {
    assert!(DragPayload::from_json("").is_none());
    assert!(DragPayload::from_json("not json").is_none());
    assert!(DragPayload::from_json("{\"kind\":\"pipeline\"").is_none());
    assert!(DragPayload::from_json("{\"id\":1}").is_none());
    assert!(DragPayload::from_json("{\"kind\":\"card\",\"id\":1}").is_none());
}
