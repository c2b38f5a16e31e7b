//! Storage for the preview engine.
//!
//! Two key-value surfaces back everything here: a durable one that survives
//! reloads ([`FileStore`]) and a session-scoped one ([`MemoryStore`]). On top
//! of them sit the bounded [`CacheStore`] namespaces and the per-panel-kind
//! [`SessionPositionStore`].
//!
//! Nothing in this crate fails loudly at runtime: unreadable or corrupt stored
//! values degrade to empty/default state and are logged.

pub mod cache;
pub mod error;
pub mod kv;
pub mod session;

pub use cache::{CacheConfig, CacheStore, DEFAULT_CAPACITY};
pub use error::{Result, StorageError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use session::SessionPositionStore;
