//! In-memory implementations.

pub mod registry;

pub use registry::InMemoryRoomRegistry;
