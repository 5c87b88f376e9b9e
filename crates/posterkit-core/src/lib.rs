//! # PosterKit Core
//!
//! Core building blocks shared by the PosterKit crates:
//! a typed publish/subscribe event bus used by the scene store to notify
//! views of changes, and the shared-ownership aliases the single-threaded
//! editor uses to hand the store to several views.

pub mod event_bus;
pub mod types;

pub use event_bus::{
    BusEvent, EventBus, EventBusError, EventFilter, SubscriptionId, DEFAULT_CHANNEL_CAPACITY,
};

pub use types::{shared, thread_safe, Shared, ThreadSafe, ThreadSafeVec};
