//! OpenAPI document for the public routes.

use crate::model::Item;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "item-listing", description = "Read-only item listing"),
    paths(crate::handlers::items::list),
    components(schemas(Item)),
    tags((name = "items", description = "Item listing"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
