//! Key-value storage trait
//!
//! Defines the interface for reading and writing persisted slots.

use async_trait::async_trait;

use crate::Result;

/// Storage interface for named string slots
///
/// Values are stored verbatim; callers decide how a slot is encoded.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`, returning whether a value was present
    async fn remove(&self, key: &str) -> Result<bool>;
}
