//! Prepare the database: create it if missing, create the items table, optionally seed demo rows.

use crate::error::AppError;
use crate::model::Item;
use crate::sql::{count_items, insert_item, qualified_table, quoted, ITEMS_TABLE};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// CREATE SCHEMA and the items table. Idempotent.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;

    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "name" TEXT NOT NULL,
            "price" BIGINT NOT NULL
        )
        "#,
        qualified_table(schema, ITEMS_TABLE)
    );
    tracing::debug!(sql = %sql, "migration");
    sqlx::query(&sql).execute(pool).await?;
    tracing::info!(schema = %schema, "items table ready");
    Ok(())
}

/// Insert `items` (ids ignored, assigned by the database) only when the table is empty.
/// Returns the number of rows inserted.
pub async fn seed_items(pool: &PgPool, schema: &str, items: &[Item]) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let existing: i64 = sqlx::query_scalar(&count_items(schema))
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "items table not empty, skipping seed");
        return Ok(0);
    }
    let sql = insert_item(schema);
    for item in items {
        sqlx::query(&sql)
            .bind(&item.name)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!(inserted = items.len(), "seeded items");
    Ok(items.len() as u64)
}

/// Demonstration rows.
pub fn default_seed() -> Vec<Item> {
    vec![
        Item::new(1, "Brie", 5),
        Item::new(2, "Gouda", 10),
        Item::new(3, "Cheddar", 7),
        Item::new(4, "Roquefort", 12),
    ]
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a database URL into (url of the `postgres` database, target database name).
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or(crate::error::ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?;
    let (base, path_and_query) = url.split_at(path_start);
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name, Some(q)),
        None => (path_and_query, None),
    };
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.trim().to_string()))
}
