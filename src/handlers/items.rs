//! Item listing handler.

use crate::error::AppError;
use crate::model::Item;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /items — every item as a JSON array, in the configured order.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items, highest price first", body = Vec<Item>),
        (status = 500, description = "Store unavailable or query failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.store.list_items(state.order).await?;
    tracing::debug!(count = items.len(), order = state.order.as_str(), "listed items");
    Ok(Json(items))
}
