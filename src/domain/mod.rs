//! Domain layer - Core business entities and contracts

pub mod error;
pub mod keys;

pub use error::DomainError;
