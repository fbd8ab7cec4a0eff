//! In-memory storage owned by the application layer.

pub mod sessions;

pub use sessions::SessionStore;
