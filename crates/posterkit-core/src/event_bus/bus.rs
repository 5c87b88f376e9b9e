//! Generic [`EventBus`] used by the scene store to fan out change
//! notifications to every view that renders the scene.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the async broadcast channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// An event that can travel over an [`EventBus`].
pub trait BusEvent: Clone + fmt::Debug + Send + Sync + 'static {
    /// Category used by [`EventFilter::Categories`].
    type Category: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    fn category(&self) -> Self::Category;

    /// Short description of this event for logging
    fn description(&self) -> String;
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "sub-{}", &simple[..8])
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone)]
pub enum EventFilter<C> {
    All,
    /// Any of these categories
    Categories(Vec<C>),
}

impl<C> Default for EventFilter<C> {
    fn default() -> Self {
        EventFilter::All
    }
}

impl<C: PartialEq> EventFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(wanted) => wanted.contains(category),
        }
    }
}

struct Subscriber<E: BusEvent> {
    filter: EventFilter<E::Category>,
    handler: Box<dyn Fn(E) + Send + Sync>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither a handler nor a receiver is attached
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Publish/subscribe hub for one event type.
///
/// Synchronous handlers run in no particular order on the
/// publishing thread. Async consumers attach through [`EventBus::receiver`].
pub struct EventBus<E: BusEvent> {
    sender: broadcast::Sender<E>,
    subscribers: RwLock<HashMap<SubscriptionId, Subscriber<E>>>,
}

impl<E: BusEvent> EventBus<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus whose async channel buffers up to `capacity` events per receiver
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Deliver an event to every matching handler, then to async receivers.
    ///
    /// Returns the number of async receivers reached.
    pub fn publish(&self, event: E) -> Result<usize, EventBusError> {
        tracing::trace!("publish {}", event.description());

        let category = event.category();
        let subscribers = self.subscribers.read();
        subscribers
            .values()
            .filter(|s| s.filter.matches(&category))
            .for_each(|s| (s.handler)(event.clone()));

        match self.sender.send(event) {
            Ok(receivers) => Ok(receivers),
            Err(_) if subscribers.is_empty() => Err(EventBusError::NoSubscribers),
            Err(_) => Ok(0),
        }
    }

    /// Attach a synchronous handler.
    ///
    /// The handler must return quickly and must not publish to this bus.
    pub fn subscribe<F>(&self, filter: EventFilter<E::Category>, handler: F) -> SubscriptionId
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.subscribers.write().insert(
            id,
            Subscriber {
                filter,
                handler: Box::new(handler),
            },
        );
        tracing::debug!("Subscription {} added", id);
        id
    }

    pub fn receiver(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
