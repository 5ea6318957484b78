//! Item listing: a read-only JSON endpoint over a PostgreSQL table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, default_seed, ensure_database_exists, seed_items};
pub use model::{Item, ListOrder};
pub use routes::{build_router, common_routes_with_ready, items_routes, openapi_routes};
pub use state::AppState;
pub use store::{ItemStore, MemoryItemStore, PgItemStore};
