//! Key management infrastructure

mod generator;
mod service;

pub use generator::KeyIdGenerator;
pub use service::KeyService;
