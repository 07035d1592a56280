//! Store implementations

mod in_memory;
mod postgres;

pub use in_memory::InMemoryStore;
pub use postgres::{PostgresConfig, PostgresStore};

/// Supported store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory store (for testing/development)
    Memory,
    /// PostgreSQL store
    Postgres,
}

impl StoreBackend {
    /// Parse a backend name from a string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::Memory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}
