// LineTally - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus serde/chrono data derives.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod model;
pub mod rows;
