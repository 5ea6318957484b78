//! Shared application state for all routes.

use crate::model::ListOrder;
use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    /// Order applied by the listing handler.
    pub order: ListOrder,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, order: ListOrder) -> Self {
        AppState { store, order }
    }
}
