//! Key management endpoints

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::api::middleware::BearerToken;
use crate::api::state::AppState;
use crate::api::types::{
    AllCachesResponse, ApiError, CacheKeysResponse, CreateKeyRequest, CreatedKeyResponse,
    ExpandKeyRequest, Json, KeyDetails, ListKeysParams, ListSelector, MessageResponse,
    RemoveKeyParams,
};

/// GET /v1/user/keys - list the caller's caches, or one cache's keys
pub async fn list_keys(
    State(state): State<AppState>,
    BearerToken(api_key): BearerToken,
    Query(params): Query<ListKeysParams>,
) -> Result<Response, ApiError> {
    match params.validate()? {
        ListSelector::All { excluded } => {
            let caches = state.key_service.list_all_caches(&api_key, &excluded).await?;

            Ok(Json(AllCachesResponse { caches }).into_response())
        }
        ListSelector::Cache(cache_id) => {
            let keys = state.key_service.list_cache_keys(&cache_id, &api_key).await?;
            let keys = keys.into_iter().map(KeyDetails::from).collect();

            Ok(Json(CacheKeysResponse {
                cache: cache_id,
                keys,
            })
            .into_response())
        }
    }
}

/// POST /v1/user/keys - create a key bound to one or more caches
pub async fn create_key(
    State(state): State<AppState>,
    BearerToken(_api_key): BearerToken,
    Json(body): Json<CreateKeyRequest>,
) -> Result<Json<CreatedKeyResponse>, ApiError> {
    let new_key = body.validate()?;

    let key = state
        .key_service
        .create_key(&new_key.name, &new_key.description, &new_key.cache_ids)
        .await?;

    Ok(Json(CreatedKeyResponse { key }))
}

/// PATCH /v1/user/keys - associate existing keys with a cache
pub async fn expand_key(
    State(state): State<AppState>,
    BearerToken(_api_key): BearerToken,
    Json(body): Json<ExpandKeyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let expansion = body.validate()?;

    state
        .key_service
        .expand_key(&expansion.cache_id, &expansion.keys)
        .await?;

    Ok(Json(MessageResponse::new("Key updated")))
}

/// DELETE /v1/user/keys - remove a key from a cache
pub async fn remove_key(
    State(state): State<AppState>,
    BearerToken(api_key): BearerToken,
    Query(params): Query<RemoveKeyParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removal = params.validate()?;

    state
        .key_service
        .remove_key(&removal.cache_id, &removal.key_id, &api_key)
        .await?;

    Ok(Json(MessageResponse::new("Key deleted")))
}
