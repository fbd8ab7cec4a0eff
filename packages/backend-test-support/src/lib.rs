//! Backend test support utilities
//!
//! Shared helpers for the stonex-backend test binaries: unified logging
//! initialization and assertions over the stable problem-details error contract.

pub mod logging;
pub mod problem_details;
