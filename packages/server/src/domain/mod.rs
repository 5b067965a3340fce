//! Domain layer for the chat relay.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod typing;
pub mod value_object;

pub use entity::{Member, Room, DEFAULT_ROOM_ID};
pub use error::{RegistryError, ValueObjectError};
pub use factory::SessionIdFactory;
pub use registry::RoomRegistry;
pub use typing::{TypingRoster, TypingTransition, TYPING_DEBOUNCE_MS};
pub use value_object::{DisplayName, MessageText, RoomId, SessionId, Timestamp};
