//! Infrastructure layer - Store backends and runtime services

pub mod keys;
pub mod logging;
pub mod store;
