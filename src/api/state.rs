//! Application state

use std::sync::Arc;

use crate::infrastructure::keys::KeyService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub key_service: Arc<KeyService>,
}

impl AppState {
    /// Create new application state
    pub fn new(key_service: Arc<KeyService>) -> Self {
        Self { key_service }
    }
}
