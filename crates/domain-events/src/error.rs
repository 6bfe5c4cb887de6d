use thiserror::Error;

use crate::handler::HandlerError;

/// Errors that can occur while dispatching domain events.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A subscribed handler failed; the remaining queued events were dropped.
    #[error("Handler '{handler}' failed on '{kind}' event: {source}")]
    Handler {
        handler: &'static str,
        kind: String,
        #[source]
        source: HandlerError,
    },

    /// Nested dispatches went deeper than the configured limit.
    #[error("Domain event dispatch exceeded maximum nesting depth of {max_depth}")]
    RecursionLimitExceeded { max_depth: usize },
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
