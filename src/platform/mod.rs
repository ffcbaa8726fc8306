//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame timing
//! - Input events
//! - Storage (LocalStorage on web, JSON file on native)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{Action, InputDispatcher, RawInput};
pub use storage::{MemoryStore, PersistentStore, StorageError};
pub use time::Clock;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
