//! Application services orchestrating domain logic over the session store.

pub mod game_flow;
pub mod sessions;

pub use game_flow::{GameFlowService, RoundReport};
pub use sessions::SessionService;
