//! Request and response types for key management

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::keys::KeyRecord;

/// Query parameters for key listing
#[derive(Debug, Default, Deserialize)]
pub struct ListKeysParams {
    /// Cache id to list, or the sentinel "all"
    pub cache: Option<String>,
    /// Comma-separated cache ids to leave out of an "all" listing
    pub excluded: Option<String>,
}

/// Normalized listing selector
#[derive(Debug, Clone, PartialEq)]
pub enum ListSelector {
    /// Every cache the caller belongs to, minus the excluded ones
    All { excluded: Vec<String> },
    /// A single cache by id
    Cache(String),
}

impl ListKeysParams {
    /// Validate the parameters into a listing selector
    pub fn validate(&self) -> Result<ListSelector, DomainError> {
        let cache = match self.cache.as_deref() {
            Some(cache) if !cache.is_empty() => cache,
            _ => return Err(DomainError::validation("Cache ID is required")),
        };

        if cache != "all" {
            return Ok(ListSelector::Cache(cache.to_string()));
        }

        let excluded = parse_id_list(self.excluded.as_deref());
        if excluded.is_empty() {
            return Err(DomainError::validation("Excluded caches are required"));
        }

        Ok(ListSelector::All { excluded })
    }
}

/// Split a comma-separated id list, dropping empty entries
fn parse_id_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Body for key creation
#[derive(Debug, Deserialize)]
pub struct CreateKeyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cache_id: Option<Vec<String>>,
}

/// Normalized key creation request
#[derive(Debug, Clone, PartialEq)]
pub struct NewKey {
    pub name: String,
    pub description: String,
    pub cache_ids: Vec<String>,
}

impl CreateKeyRequest {
    /// Validate the body into a creation request
    pub fn validate(self) -> Result<NewKey, DomainError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DomainError::validation("Name is required")),
        };

        let cache_ids = match self.cache_id {
            Some(ids) if !ids.is_empty() => ids,
            _ => return Err(DomainError::validation("Cache ID is required")),
        };

        // An empty description is allowed; an absent one is not.
        let description = match self.description {
            Some(description) => description,
            None => return Err(DomainError::validation("Description is required")),
        };

        Ok(NewKey {
            name,
            description,
            cache_ids,
        })
    }
}

/// Body for cache expansion
#[derive(Debug, Deserialize)]
pub struct ExpandKeyRequest {
    pub cache_id: Option<String>,
    pub keys: Option<Vec<String>>,
}

/// Normalized cache expansion request
#[derive(Debug, Clone, PartialEq)]
pub struct KeyExpansion {
    pub cache_id: String,
    pub keys: Vec<String>,
}

impl ExpandKeyRequest {
    /// Validate the body into an expansion request
    pub fn validate(self) -> Result<KeyExpansion, DomainError> {
        let cache_id = match self.cache_id {
            Some(cache_id) if !cache_id.is_empty() => cache_id,
            _ => return Err(DomainError::validation("Cache ID is required")),
        };

        let keys = match self.keys {
            Some(keys) if !keys.is_empty() => keys,
            _ => return Err(DomainError::validation("Keys are required")),
        };

        Ok(KeyExpansion { cache_id, keys })
    }
}

/// Query parameters for key removal
#[derive(Debug, Default, Deserialize)]
pub struct RemoveKeyParams {
    pub key: Option<String>,
    pub cache: Option<String>,
}

/// Normalized key removal request
#[derive(Debug, Clone, PartialEq)]
pub struct KeyRemoval {
    pub key_id: String,
    pub cache_id: String,
}

impl RemoveKeyParams {
    /// Validate the parameters into a removal request
    pub fn validate(self) -> Result<KeyRemoval, DomainError> {
        match (self.key, self.cache) {
            (Some(key), Some(cache)) if !key.is_empty() && !cache.is_empty() => Ok(KeyRemoval {
                key_id: key,
                cache_id: cache,
            }),
            _ => Err(DomainError::validation("Key and Cache ID is required")),
        }
    }
}

/// Response for an "all" listing, mapping cache ids to key ids
#[derive(Debug, Serialize, Deserialize)]
pub struct AllCachesResponse {
    pub caches: BTreeMap<String, Vec<String>>,
}

/// Response for a single-cache listing
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheKeysResponse {
    pub cache: String,
    pub keys: Vec<KeyDetails>,
}

/// Key details exposed by single-cache listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<KeyRecord> for KeyDetails {
    fn from(record: KeyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

/// Response carrying a newly created key id
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedKeyResponse {
    pub key: String,
}

/// Confirmation message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_require_cache() {
        let err = ListKeysParams::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cache ID is required");

        let params = ListKeysParams {
            cache: Some("".to_string()),
            excluded: None,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cache ID is required");
    }

    #[test]
    fn test_list_params_all_requires_excluded() {
        let params = ListKeysParams {
            cache: Some("all".to_string()),
            excluded: None,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Excluded caches are required"
        );

        // A list that collapses to nothing counts as missing.
        let params = ListKeysParams {
            cache: Some("all".to_string()),
            excluded: Some(" , ,".to_string()),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_list_params_all_parses_excluded_list() {
        let params = ListKeysParams {
            cache: Some("all".to_string()),
            excluded: Some("c1, c2,,c3".to_string()),
        };

        let selector = params.validate().unwrap();
        assert_eq!(
            selector,
            ListSelector::All {
                excluded: vec!["c1".to_string(), "c2".to_string(), "c3".to_string()],
            }
        );
    }

    #[test]
    fn test_list_params_single_cache() {
        let params = ListKeysParams {
            cache: Some("c1".to_string()),
            excluded: None,
        };

        let selector = params.validate().unwrap();
        assert_eq!(selector, ListSelector::Cache("c1".to_string()));
    }

    #[test]
    fn test_create_request_requires_name() {
        let request = CreateKeyRequest {
            name: None,
            description: Some("".to_string()),
            cache_id: Some(vec!["c1".to_string()]),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Name is required");

        let request = CreateKeyRequest {
            name: Some("".to_string()),
            description: Some("".to_string()),
            cache_id: Some(vec!["c1".to_string()]),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_requires_caches() {
        let request = CreateKeyRequest {
            name: Some("ci".to_string()),
            description: Some("".to_string()),
            cache_id: None,
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cache ID is required");

        // An empty list is as good as a missing one.
        let request = CreateKeyRequest {
            name: Some("ci".to_string()),
            description: Some("".to_string()),
            cache_id: Some(vec![]),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cache ID is required");
    }

    #[test]
    fn test_create_request_requires_description_but_allows_empty() {
        let request = CreateKeyRequest {
            name: Some("ci".to_string()),
            description: None,
            cache_id: Some(vec!["c1".to_string()]),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Description is required");

        let request = CreateKeyRequest {
            name: Some("ci".to_string()),
            description: Some("".to_string()),
            cache_id: Some(vec!["c1".to_string()]),
        };
        let new_key = request.validate().unwrap();
        assert_eq!(new_key.description, "");
    }

    #[test]
    fn test_expand_request_validation() {
        let request = ExpandKeyRequest {
            cache_id: None,
            keys: Some(vec!["k1".to_string()]),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cache ID is required");

        let request = ExpandKeyRequest {
            cache_id: Some("c1".to_string()),
            keys: Some(vec![]),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Keys are required");

        let request = ExpandKeyRequest {
            cache_id: Some("c1".to_string()),
            keys: Some(vec!["k1".to_string()]),
        };
        let expansion = request.validate().unwrap();
        assert_eq!(expansion.cache_id, "c1");
        assert_eq!(expansion.keys, vec!["k1".to_string()]);
    }

    #[test]
    fn test_remove_params_require_both() {
        let params = RemoveKeyParams {
            key: Some("k1".to_string()),
            cache: None,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Key and Cache ID is required"
        );

        let params = RemoveKeyParams {
            key: None,
            cache: Some("c1".to_string()),
        };
        assert!(params.validate().is_err());

        let params = RemoveKeyParams {
            key: Some("k1".to_string()),
            cache: Some("c1".to_string()),
        };
        let removal = params.validate().unwrap();
        assert_eq!(removal.key_id, "k1");
        assert_eq!(removal.cache_id, "c1");
    }

    #[test]
    fn test_response_serialization() {
        let mut caches = BTreeMap::new();
        caches.insert("c1".to_string(), vec!["k1".to_string()]);
        let json = serde_json::to_string(&AllCachesResponse { caches }).unwrap();
        assert_eq!(json, r#"{"caches":{"c1":["k1"]}}"#);

        let json = serde_json::to_string(&CreatedKeyResponse {
            key: "k1".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"key":"k1"}"#);

        let json = serde_json::to_string(&MessageResponse::new("Key updated")).unwrap();
        assert_eq!(json, r#"{"message":"Key updated"}"#);
    }

    #[test]
    fn test_key_details_from_record() {
        let record = KeyRecord::new("k1", "ci", "deploys");
        let details = KeyDetails::from(record.clone());

        assert_eq!(details.id, "k1");
        assert_eq!(details.name, "ci");
        assert_eq!(details.description, "deploys");
        assert_eq!(details.created_at, record.created_at);
    }
}
