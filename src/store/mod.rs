//! Query interface over the persisted items, with PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

use crate::error::AppError;
use crate::model::{Item, ListOrder};
use async_trait::async_trait;

/// Read-only access to items. The handler only ever lists.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch every item, sorted per `order`.
    async fn list_items(&self, order: ListOrder) -> Result<Vec<Item>, AppError>;

    /// Cheap round trip to the backing store. Used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
