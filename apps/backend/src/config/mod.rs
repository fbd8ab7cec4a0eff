//! Environment-backed configuration.

pub mod ai;
pub mod game;
pub mod gesture;
