//! API types module

pub mod error;
pub mod json;
pub mod keys;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use keys::{
    AllCachesResponse, CacheKeysResponse, CreateKeyRequest, CreatedKeyResponse, ExpandKeyRequest,
    KeyDetails, KeyExpansion, KeyRemoval, ListKeysParams, ListSelector, MessageResponse, NewKey,
    RemoveKeyParams,
};
