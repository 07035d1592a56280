//! V1 API endpoints

pub mod keys;

use axum::Router;
use axum::routing::get;

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route(
        "/user/keys",
        get(keys::list_keys)
            .post(keys::create_key)
            .patch(keys::expand_key)
            .delete(keys::remove_key),
    )
}
