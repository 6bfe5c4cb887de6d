//! Core aggregate and domain event traits.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::{DateTime, Utc};
use common::UniqueEntityId;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {
    /// Closed set of event kinds used to route events to handlers.
    type Kind: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Returns the kind of this event.
    fn kind(&self) -> Self::Kind;

    /// Returns the identifier of the aggregate that raised the event.
    fn aggregate_id(&self) -> UniqueEntityId;

    /// Returns when the event happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Trait for aggregate roots that raise domain events.
///
/// Events accumulate on the aggregate while it is mutated and are handed
/// over to [`crate::DomainEvents`] when the aggregate is persisted.
pub trait AggregateRoot: Send + Sync {
    /// The type of events this aggregate raises.
    type Event: DomainEvent;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> UniqueEntityId;

    /// Events raised since the aggregate was last handed to the bus.
    fn domain_events(&self) -> &[Self::Event];

    /// Removes and returns all pending events, oldest first.
    fn take_domain_events(&mut self) -> Vec<Self::Event>;

    /// Returns true if the aggregate has undispatched events.
    fn has_pending_events(&self) -> bool {
        !self.domain_events().is_empty()
    }
}
