//! In-memory store implementation

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::keys::{KeyRecord, Store, StoreSession};

/// In-memory key store (for testing/development)
///
/// State is shared behind a lock; sessions are cheap handles onto it.
/// Guards are never held across an await point.
#[derive(Debug)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    keys: HashMap<String, KeyRecord>,
    caches: HashMap<String, BTreeSet<String>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn session(&self) -> Result<Box<dyn StoreSession>, DomainError> {
        Ok(Box::new(InMemorySession {
            state: Arc::clone(&self.state),
        }))
    }
}

struct InMemorySession {
    state: Arc<RwLock<StoreState>>,
}

impl InMemorySession {
    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, DomainError> {
        self.state
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, DomainError> {
        self.state
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl StoreSession for InMemorySession {
    async fn keys_for_user(
        &mut self,
        api_key: &str,
        excluded: &[String],
    ) -> Result<BTreeMap<String, Vec<String>>, DomainError> {
        let state = self.read()?;

        let mut caches = BTreeMap::new();
        for (cache_id, members) in &state.caches {
            if excluded.iter().any(|e| e == cache_id) {
                continue;
            }
            if members.contains(api_key) {
                caches.insert(cache_id.clone(), members.iter().cloned().collect());
            }
        }

        Ok(caches)
    }

    async fn keys_for_cache(
        &mut self,
        cache_id: &str,
        api_key: &str,
    ) -> Result<Option<Vec<KeyRecord>>, DomainError> {
        let state = self.read()?;

        let members = match state.caches.get(cache_id) {
            Some(members) if members.contains(api_key) => members,
            // A missing cache and an unassociated caller are indistinguishable.
            _ => return Ok(None),
        };

        let keys = members
            .iter()
            .filter_map(|id| state.keys.get(id).cloned())
            .collect();

        Ok(Some(keys))
    }

    async fn create_key(
        &mut self,
        record: &KeyRecord,
        cache_ids: &[String],
    ) -> Result<(), DomainError> {
        let mut state = self.write()?;

        if state.keys.contains_key(&record.id) {
            return Err(DomainError::conflict(format!(
                "Key '{}' already exists",
                record.id
            )));
        }

        state.keys.insert(record.id.clone(), record.clone());
        for cache_id in cache_ids {
            state
                .caches
                .entry(cache_id.clone())
                .or_default()
                .insert(record.id.clone());
        }

        Ok(())
    }

    async fn expand_key(&mut self, cache_id: &str, key_ids: &[String]) -> Result<(), DomainError> {
        let mut state = self.write()?;

        // Validate every id before touching the cache so a bad one
        // leaves no partial expansion behind.
        for key_id in key_ids {
            if !state.keys.contains_key(key_id) {
                return Err(DomainError::storage(format!("Key '{}' not found", key_id)));
            }
        }

        let members = state.caches.entry(cache_id.to_string()).or_default();
        for key_id in key_ids {
            members.insert(key_id.clone());
        }

        Ok(())
    }

    async fn check_key_for_cache(
        &mut self,
        cache_id: &str,
        api_key: &str,
    ) -> Result<bool, DomainError> {
        let state = self.read()?;

        Ok(state
            .caches
            .get(cache_id)
            .map(|members| members.contains(api_key))
            .unwrap_or(false))
    }

    async fn remove_key_from_cache(
        &mut self,
        cache_id: &str,
        key_id: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.write()?;

        let members = state.caches.get_mut(cache_id).ok_or_else(|| {
            DomainError::storage(format!("Cache '{}' not found", cache_id))
        })?;

        if !members.contains(key_id) {
            return Err(DomainError::storage(format!(
                "Key '{}' is not associated with cache '{}'",
                key_id, cache_id
            )));
        }

        // A cache must always retain at least one key.
        if members.len() == 1 {
            return Err(DomainError::last_key(format!(
                "Key '{}' is the last key for cache '{}'",
                key_id, cache_id
            )));
        }

        members.remove(key_id);

        // Drop the record once no cache references the key anymore.
        if !state.caches.values().any(|members| members.contains(key_id)) {
            state.keys.remove(key_id);
        }

        Ok(())
    }
}
