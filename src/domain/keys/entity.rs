//! Key record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed API key and its metadata
///
/// The record's id doubles as the bearer credential presented in the
/// Authorization header of subsequent requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Unique key identifier
    pub id: String,

    /// Human-readable key name
    pub name: String,

    /// Key description, may be empty but is always present
    pub description: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl KeyRecord {
    /// Create a new key record stamped with the current time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_record_creation() {
        let record = KeyRecord::new("key-1", "ci-deploy", "Deploy pipeline key");

        assert_eq!(record.id, "key-1");
        assert_eq!(record.name, "ci-deploy");
        assert_eq!(record.description, "Deploy pipeline key");
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn test_key_record_allows_empty_description() {
        let record = KeyRecord::new("key-1", "ci-deploy", "");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_key_record_serialization() {
        let record = KeyRecord::new("key-1", "ci-deploy", "");
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"id\":\"key-1\""));
        assert!(json.contains("\"name\":\"ci-deploy\""));
        assert!(json.contains("\"created_at\""));
    }
}
