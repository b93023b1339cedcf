//! Client-side state layer.
//!
//! All mutation of board state routes through these stores so the order
//! index stays a pure projection of the authoritative `pipeline_id` and
//! `position` fields. The stores are plain data (no framework types) and are
//! exercised directly by the unit tests; components wrap them in signals.

pub mod application;
pub mod drag;
pub mod pipeline;
pub mod position;
pub mod toast;
