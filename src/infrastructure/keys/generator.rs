//! Key identifier generation

use uuid::Uuid;

/// Generator for unique, time-ordered key identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyIdGenerator;

impl KeyIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a new key identifier
    pub fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let generator = KeyIdGenerator::new();
        let ids: HashSet<String> = (0..100).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_generated_ids_are_version_7_uuids() {
        let generator = KeyIdGenerator::new();
        let id = generator.generate();

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }
}
