//! Item routes. GET only; other verbs on /items get 405 from axum.

use crate::handlers::items::list;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn items_routes(state: AppState) -> Router {
    Router::new().route("/items", get(list)).with_state(state)
}
