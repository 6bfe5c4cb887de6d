//! Domain event infrastructure for the parcel delivery core.
//!
//! This crate provides:
//! - `DomainEvent` and `AggregateRoot` traits
//! - `EventHandler` trait for subscribers
//! - `DomainEvents`, the injected in-process event bus

pub mod aggregate;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;

pub use aggregate::{AggregateRoot, DomainEvent};
pub use config::DispatchConfig;
pub use dispatcher::{DomainEvents, current_depth};
pub use error::{DispatchError, Result};
pub use handler::{EventHandler, HandlerError};
