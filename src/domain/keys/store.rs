//! Store traits for key and cache association persistence

use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::KeyRecord;
use crate::domain::error::DomainError;

/// Handle to a key store backend
///
/// A store hands out sessions. Each request acquires exactly one session,
/// runs every store operation it needs through it, and releases the
/// underlying resource when the session is dropped.
#[async_trait]
pub trait Store: Send + Sync + Debug {
    /// Acquire a session scoped to one request
    async fn session(&self) -> Result<Box<dyn StoreSession>, DomainError>;
}

/// A scoped session against the key store
///
/// Dropping the session releases whatever resource backs it, on every
/// path out of a request, success or failure.
#[async_trait]
pub trait StoreSession: Send {
    /// Map each cache the given key belongs to, minus the excluded ones,
    /// to the full sorted list of key ids associated with that cache.
    /// An empty map means the key belongs to no matching cache.
    async fn keys_for_user(
        &mut self,
        api_key: &str,
        excluded: &[String],
    ) -> Result<BTreeMap<String, Vec<String>>, DomainError>;

    /// List the key records of a cache, sorted by id.
    /// Returns None both when the cache does not exist and when the
    /// given key is not associated with it.
    async fn keys_for_cache(
        &mut self,
        cache_id: &str,
        api_key: &str,
    ) -> Result<Option<Vec<KeyRecord>>, DomainError>;

    /// Persist a new key record and associate it with each given cache,
    /// atomically. A record with the same id must not already exist.
    async fn create_key(
        &mut self,
        record: &KeyRecord,
        cache_ids: &[String],
    ) -> Result<(), DomainError>;

    /// Associate existing keys with a cache, atomically. Associations
    /// are a set: re-adding an existing pair is a no-op. Every key id
    /// must name an existing record or the whole call fails.
    async fn expand_key(&mut self, cache_id: &str, key_ids: &[String]) -> Result<(), DomainError>;

    /// Whether the given key is associated with the cache
    async fn check_key_for_cache(
        &mut self,
        cache_id: &str,
        api_key: &str,
    ) -> Result<bool, DomainError>;

    /// Remove a key's association with a cache. Refuses with
    /// [`DomainError::LastKey`] when the key is the cache's last one,
    /// leaving the store untouched. The check and the removal are one
    /// atomic step, also under concurrent removals.
    async fn remove_key_from_cache(
        &mut self,
        cache_id: &str,
        key_id: &str,
    ) -> Result<(), DomainError>;
}
