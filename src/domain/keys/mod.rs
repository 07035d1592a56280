//! Key management domain
//!
//! Keys are bearer credentials scoped to named caches. A key can belong
//! to any number of caches, and a cache must always retain at least one
//! key once it has any.

mod entity;
mod store;

pub use entity::KeyRecord;
pub use store::{Store, StoreSession};
