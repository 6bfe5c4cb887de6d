//! Event handler abstraction.

use async_trait::async_trait;

use crate::aggregate::DomainEvent;

/// Error type returned by handlers.
///
/// Boxed so that every subscriber can surface its own error type through
/// the bus unchanged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A subscriber reacting to dispatched domain events.
///
/// Handlers run to completion, one after another, before the dispatch call
/// that triggered them returns. A handler may call back into use cases that
/// persist other aggregates and so trigger nested dispatches.
#[async_trait]
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Handles one event.
    async fn handle(&self, event: &E) -> Result<(), HandlerError>;
}
