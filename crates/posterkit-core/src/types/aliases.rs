//! Type aliases for commonly used shared-ownership types.
//!
//! The editor runs on a single UI thread, so the scene store is shared
//! between the canvas and the toolbar as `Shared<SceneStore>`. Event
//! handlers, on the other hand, must be `Send + Sync`, so anything they
//! capture goes through the thread-safe aliases.
//!
//! ```rust,ignore
//! use posterkit_core::types::*;
//!
//! let store: Shared<SceneStore> = shared(SceneStore::new());
//! store.borrow_mut().add_rect();
//!
//! let seen: ThreadSafeVec<SceneEvent> = thread_safe(Vec::new());
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe vector, typically used to collect events inside handlers.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
