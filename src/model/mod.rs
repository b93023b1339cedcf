pub mod api;
pub mod application;
pub mod cv;
pub mod pipeline;
