// src/events/bus/event_bus.rs
//
// In-process event bus.
//
// - Handlers run on the emitting thread, in subscription order
// - Handlers are keyed by the concrete event type
// - The most recent emissions are kept in a bounded log

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::events::types::DomainEvent;

/// Emissions kept by `EventBus::new`
pub const DEFAULT_LOG_CAPACITY: usize = 256;

type Handler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// One recorded emission
#[derive(Debug, Clone, PartialEq)]
pub struct EventLogEntry {
    pub event_type: &'static str,
    pub event_id: Uuid,
    pub movie_id: i64,
    pub occurred_at: DateTime<Utc>,
    pub handler_count: usize,
}

/// Services emit here; subscribers react without knowing the emitter.
///
/// Emission blocks until every handler returned, so handlers must be quick.
/// Clones share handlers and log.
#[derive(Clone)]
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<Handler>>>>,
    log: Arc<RwLock<VecDeque<EventLogEntry>>>,
    log_capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_log_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Bus whose log keeps at most `capacity` entries; 0 disables the log
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            log: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)))),
            log_capacity: capacity,
        }
    }

    /// Registers `handler` for every future `E`.
    ///
    /// ```ignore
    /// bus.subscribe::<FavoriteAdded, _>(|event| {
    ///     println!("Saved: {}", event.title);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: Handler = Box::new(move |any: &dyn Any| match any.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => log::error!("Handler for {} got a foreign event", std::any::type_name::<E>()),
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    /// Records `event`, then hands it to each subscriber.
    ///
    /// A panicking handler is logged and skipped; the others still run.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let subscribers = handlers.get(&TypeId::of::<E>()).map(Vec::as_slice).unwrap_or(&[]);

        log::debug!(
            "[EVENT] {} for movie {} ({} handlers)",
            event.event_type(),
            event.movie_id(),
            subscribers.len()
        );
        self.record(EventLogEntry {
            event_type: event.event_type(),
            event_id: event.event_id(),
            movie_id: event.movie_id(),
            occurred_at: event.occurred_at(),
            handler_count: subscribers.len(),
        });

        for (position, handler) in subscribers.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| handler(&event as &dyn Any))).is_err() {
                log::error!("Handler #{} for {} panicked", position, event.event_type());
            }
        }
    }

    fn record(&self, entry: EventLogEntry) {
        if self.log_capacity == 0 {
            return;
        }
        let mut log = self.log.write().unwrap_or_else(PoisonError::into_inner);
        if log.len() == self.log_capacity {
            log.pop_front();
        }
        log.push_back(entry);
    }

    /// Recorded emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_event_log(&self) {
        self.log.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
