//! Key management service

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::generator::KeyIdGenerator;
use crate::domain::DomainError;
use crate::domain::keys::{KeyRecord, Store};

/// Service for managing API keys and their cache associations
///
/// Each operation acquires a single store session and runs every store
/// call it needs through that session.
#[derive(Debug)]
pub struct KeyService {
    store: Arc<dyn Store>,
    generator: KeyIdGenerator,
}

impl KeyService {
    /// Create a new key service
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            generator: KeyIdGenerator::new(),
        }
    }

    /// List every cache the given key belongs to, minus the excluded
    /// ones, mapped to the cache's full key id list
    pub async fn list_all_caches(
        &self,
        api_key: &str,
        excluded: &[String],
    ) -> Result<BTreeMap<String, Vec<String>>, DomainError> {
        let mut session = self.store.session().await?;
        let caches = session.keys_for_user(api_key, excluded).await?;

        if caches.is_empty() {
            return Err(DomainError::not_found("No caches found"));
        }

        debug!("Listed {} caches for caller", caches.len());

        Ok(caches)
    }

    /// List the key records of a single cache
    ///
    /// A missing cache and a caller that is not associated with it are
    /// indistinguishable: both surface as not found.
    pub async fn list_cache_keys(
        &self,
        cache_id: &str,
        api_key: &str,
    ) -> Result<Vec<KeyRecord>, DomainError> {
        let mut session = self.store.session().await?;

        match session.keys_for_cache(cache_id, api_key).await? {
            Some(keys) => {
                debug!("Listed {} keys for cache: {}", keys.len(), cache_id);
                Ok(keys)
            }
            None => Err(DomainError::not_found("Cache not found")),
        }
    }

    /// Create a new key and associate it with the given caches
    ///
    /// Returns the generated key id, which is also the bearer credential
    /// for subsequent requests.
    pub async fn create_key(
        &self,
        name: &str,
        description: &str,
        cache_ids: &[String],
    ) -> Result<String, DomainError> {
        let id = self.generator.generate();
        let record = KeyRecord::new(id.clone(), name, description);

        let mut session = self.store.session().await?;
        session.create_key(&record, cache_ids).await?;

        info!("Created key: id={}, name={}, caches={}", id, name, cache_ids.len());

        Ok(id)
    }

    /// Associate existing keys with a cache
    pub async fn expand_key(&self, cache_id: &str, key_ids: &[String]) -> Result<(), DomainError> {
        let mut session = self.store.session().await?;
        session.expand_key(cache_id, key_ids).await?;

        info!("Expanded cache: cache={}, keys={}", cache_id, key_ids.len());

        Ok(())
    }

    /// Remove a key's association with a cache
    ///
    /// The caller must itself be associated with the cache; creation and
    /// expansion carry no such check.
    pub async fn remove_key(
        &self,
        cache_id: &str,
        key_id: &str,
        api_key: &str,
    ) -> Result<(), DomainError> {
        let mut session = self.store.session().await?;

        if !session.check_key_for_cache(cache_id, api_key).await? {
            return Err(DomainError::unauthorized("Unauthorized"));
        }

        session.remove_key_from_cache(cache_id, key_id).await?;

        info!("Removed key: cache={}, key={}", cache_id, key_id);

        Ok(())
    }

    /// Check that the store can hand out a session
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.session().await.map(|_| ())
    }
}
