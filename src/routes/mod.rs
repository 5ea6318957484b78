//! Static routing table: every method + path this service answers.

mod common;
mod items;
mod openapi;

pub use common::common_routes_with_ready;
pub use items::items_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::error::AppError;
use crate::state::AppState;
use axum::{http::Uri, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Nothing here takes a body.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Full application router: items, common, OpenAPI, JSON 404 fallback, tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(items_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .merge(openapi_routes())
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
