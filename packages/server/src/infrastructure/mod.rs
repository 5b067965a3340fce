//! Infrastructure layer: DTOs, repository implementations, broadcast router.

pub mod broadcast;
pub mod dto;
pub mod repository;

pub use broadcast::Broadcaster;
pub use repository::InMemoryRoomRegistry;
