//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>`, `Arc<Mutex<T>>` and helpers.

pub mod aliases;

pub use aliases::*;
