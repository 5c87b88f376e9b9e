//! # Event Bus Module
//!
//! Publish/subscribe plumbing for decoupled communication between the scene
//! store and the views that render it.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter by category and receive events of interest
//! - Synchronous handlers run on the publishing thread; async consumers can
//!   poll a broadcast receiver instead
//!
//! ## Usage
//!
//! ```rust,ignore
//! use posterkit_core::event_bus::{EventBus, EventFilter};
//!
//! let bus: EventBus<SceneEvent> = EventBus::new();
//! let subscription = bus.subscribe(EventFilter::All, |event| {
//!     tracing::debug!("scene changed: {:?}", event);
//! });
//!
//! bus.publish(SceneEvent::SelectionChanged { previous: None, current: None }).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;

pub use bus::*;
