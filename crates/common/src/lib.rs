//! Shared types for the parcel delivery core.

pub mod types;
pub mod watched_list;

pub use types::{Entity, UniqueEntityId};
pub use watched_list::WatchedList;
