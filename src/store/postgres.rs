//! PostgreSQL-backed item store.

use crate::error::AppError;
use crate::model::{Item, ListOrder};
use crate::sql::select_items;
use crate::store::ItemStore;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
    schema: String,
}

impl PgItemStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgItemStore {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list_items(&self, order: ListOrder) -> Result<Vec<Item>, AppError> {
        let sql = select_items(&self.schema, order);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<Item> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

    use super::*;
    use crate::migration::{apply_migrations, seed_items};

    async fn store_with(schema: &str, rows: &[Item]) -> PgItemStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .unwrap();
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", crate::sql::quoted(schema)))
            .execute(&pool)
            .await
            .unwrap();
        apply_migrations(&pool, schema).await.unwrap();
        seed_items(&pool, schema, rows).await.unwrap();
        PgItemStore::new(pool, schema)
    }

    #[tokio::test]
    #[ignore]
    async fn lists_items_by_price_descending() {
        let store = store_with(
            "item_listing_test_desc",
            &[Item::new(0, "Brie", 5), Item::new(0, "Gouda", 10), Item::new(0, "Feta", 7)],
        )
        .await;
        let items = store.list_items(ListOrder::PriceDesc).await.unwrap();
        let prices: Vec<i64> = items.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![10, 7, 5]);
        assert_eq!(items[0].name, "Gouda");
    }

    #[tokio::test]
    #[ignore]
    async fn migrations_and_seed_are_idempotent() {
        let schema = "item_listing_test_rerun";
        let store = store_with(schema, &[]).await;
        let pool = store.pool.clone();
        apply_migrations(&pool, schema).await.unwrap();

        let seed = crate::migration::default_seed();
        let first = seed_items(&pool, schema, &seed).await.unwrap();
        assert_eq!(first, seed.len() as u64);
        let second = seed_items(&pool, schema, &seed).await.unwrap();
        assert_eq!(second, 0);

        let items = store.list_items(ListOrder::PriceDesc).await.unwrap();
        assert_eq!(items.len() as u64, first);
    }

    #[tokio::test]
    #[ignore]
    async fn empty_table_lists_nothing() {
        let store = store_with("item_listing_test_empty", &[]).await;
        assert!(store.list_items(ListOrder::StoreDefault).await.unwrap().is_empty());
        store.ping().await.unwrap();
    }
}
