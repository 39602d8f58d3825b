//! Injected key-value storage for mirrored session state.
//!
//! The browser original kept two local-storage entries alongside the
//! service's own cookie: the session token and a cached record of the
//! signed-in session. This module models that store as an injected
//! capability so the gate can be tested without a real environment.
//!
//! Implementations:
//! - `MemoryStore`: ephemeral, for tests and throwaway consumers
//! - `FileStore`: one file per key under a cache directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Fixed key under which the session token is mirrored
pub const SESSION_TOKEN_KEY: &str = "stagepass.session-token";

/// Fixed key under which the signed-in session record is cached
pub const USER_RECORD_KEY: &str = "stagepass.user-record";

/// Minimal get/set/remove storage capability.
///
/// `remove` of an absent key is not an error; after it returns `Ok` the
/// key is guaranteed absent either way.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
