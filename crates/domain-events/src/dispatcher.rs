//! Domain event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::UniqueEntityId;
use tokio::sync::{Mutex, RwLock};

use crate::aggregate::{AggregateRoot, DomainEvent};
use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::handler::EventHandler;

/// Events handed over by one aggregate and not yet dispatched.
struct MarkedAggregate<E> {
    id: UniqueEntityId,
    events: Vec<E>,
}

tokio::task_local! {
    /// Nesting level of the dispatch running on the current task.
    static DISPATCH_DEPTH: usize;
}

type HandlerMap<E> = HashMap<<E as DomainEvent>::Kind, Vec<Arc<dyn EventHandler<E>>>>;

/// In-process event bus connecting aggregate mutations to side effects.
///
/// The protocol is "mark, then dispatch on save":
/// 1. an aggregate records events while it is mutated
/// 2. the repository persisting it calls [`DomainEvents::mark_entity_for_dispatch`]
/// 3. after the write, the repository calls [`DomainEvents::dispatch_events_for_entity`]
///
/// Handlers registered for an event's kind run in registration order and are
/// awaited one by one, so every side effect completes before the repository
/// call returns. Locks are never held while a handler runs, which lets
/// handlers persist other aggregates and dispatch again; the nesting depth of
/// one call chain is bounded by [`DispatchConfig::max_depth`]. Dispatches
/// running concurrently on other tasks do not count toward that depth.
pub struct DomainEvents<E: DomainEvent> {
    marked: Mutex<Vec<MarkedAggregate<E>>>,
    handlers: RwLock<HandlerMap<E>>,
    should_run: AtomicBool,
    max_depth: usize,
}

impl<E: DomainEvent> DomainEvents<E> {
    /// Creates a bus with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    /// Creates a bus with the given configuration.
    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            marked: Mutex::new(Vec::new()),
            handlers: RwLock::new(HashMap::new()),
            should_run: AtomicBool::new(config.enabled),
            max_depth: config.max_depth.max(1),
        }
    }

    /// Moves the aggregate's pending events onto the bus.
    ///
    /// An aggregate is marked at most once: marking it again before dispatch
    /// appends the newly raised events to its existing entry. Aggregates with
    /// no pending events are left unmarked.
    pub async fn mark_entity_for_dispatch<A>(&self, aggregate: &mut A)
    where
        A: AggregateRoot<Event = E>,
    {
        let events = aggregate.take_domain_events();
        if events.is_empty() {
            return;
        }

        let id = aggregate.id();
        let count = events.len();
        let mut marked = self.marked.lock().await;

        match marked.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.events.extend(events),
            None => marked.push(MarkedAggregate { id, events }),
        }

        tracing::debug!(%id, events = count, "aggregate marked for dispatch");
    }

    /// Subscribes a handler to one event kind.
    pub async fn register(&self, kind: E::Kind, handler: Arc<dyn EventHandler<E>>) {
        tracing::debug!(%kind, handler = handler.name(), "event handler registered");
        self.handlers
            .write()
            .await
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// Dispatches every queued event of a marked aggregate.
    ///
    /// Returns the number of events consumed. An aggregate that is not marked
    /// is a no-op returning `Ok(0)`. The first failing handler aborts the
    /// dispatch; events queued after the failing one are dropped.
    ///
    /// A dispatch nested deeper than `max_depth` is refused: its entry is
    /// removed and its events are discarded.
    #[tracing::instrument(skip(self))]
    pub async fn dispatch_events_for_entity(&self, id: UniqueEntityId) -> Result<usize> {
        let entry = {
            let mut marked = self.marked.lock().await;
            let Some(index) = marked.iter().position(|entry| entry.id == id) else {
                tracing::debug!("aggregate not marked, nothing to dispatch");
                return Ok(0);
            };
            marked.remove(index)
        };

        let depth = current_depth() + 1;
        if depth > self.max_depth {
            tracing::warn!(
                max_depth = self.max_depth,
                dropped = entry.events.len(),
                "domain event dispatch nesting limit reached"
            );
            return Err(DispatchError::RecursionLimitExceeded {
                max_depth: self.max_depth,
            });
        }

        let count = entry.events.len();
        DISPATCH_DEPTH
            .scope(depth, async {
                for event in &entry.events {
                    self.dispatch(event).await?;
                }
                Ok::<_, DispatchError>(count)
            })
            .await
    }

    async fn dispatch(&self, event: &E) -> Result<()> {
        let kind = event.kind();

        if !self.should_run() {
            tracing::debug!(%kind, "dispatch disabled, event dropped");
            return Ok(());
        }

        let handlers = self
            .handlers
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        for handler in handlers {
            if let Err(source) = handler.handle(event).await {
                metrics::counter!("domain_event_handler_failures_total", "kind" => kind.to_string())
                    .increment(1);
                tracing::warn!(%kind, handler = handler.name(), error = %source, "event handler failed");
                return Err(DispatchError::Handler {
                    handler: handler.name(),
                    kind: kind.to_string(),
                    source,
                });
            }
        }

        metrics::counter!("domain_events_dispatched_total", "kind" => kind.to_string()).increment(1);
        Ok(())
    }

    /// Enables or disables handler invocation for all events.
    pub fn set_should_run(&self, should_run: bool) {
        self.should_run.store(should_run, Ordering::SeqCst);
    }

    pub fn should_run(&self) -> bool {
        self.should_run.load(Ordering::SeqCst)
    }

    /// Removes every registered handler.
    pub async fn clear_handlers(&self) {
        self.handlers.write().await.clear();
    }

    /// Forgets every marked aggregate and its queued events.
    pub async fn clear_marked_entities(&self) {
        self.marked.lock().await.clear();
    }

    /// Clears both tables and re-enables dispatch.
    pub async fn reset(&self) {
        self.clear_handlers().await;
        self.clear_marked_entities().await;
        self.set_should_run(true);
    }

    /// Returns the number of marked aggregates.
    pub async fn marked_count(&self) -> usize {
        self.marked.lock().await.len()
    }

    /// Returns true if the aggregate has events waiting for dispatch.
    pub async fn is_marked(&self, id: UniqueEntityId) -> bool {
        self.marked.lock().await.iter().any(|entry| entry.id == id)
    }

    /// Returns the number of events queued for an aggregate.
    pub async fn queued_events(&self, id: UniqueEntityId) -> usize {
        self.marked
            .lock()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .map_or(0, |entry| entry.events.len())
    }

    /// Returns the number of handlers subscribed to a kind.
    pub async fn handler_count(&self, kind: E::Kind) -> usize {
        self.handlers.read().await.get(&kind).map_or(0, Vec::len)
    }
}

impl<E: DomainEvent> Default for DomainEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the dispatch nesting level of the calling task.
///
/// Zero outside of any handler; one inside a handler invoked by a top-level
/// dispatch, and so on.
pub fn current_depth() -> usize {
    DISPATCH_DEPTH.try_with(|depth| *depth).unwrap_or(0)
}
