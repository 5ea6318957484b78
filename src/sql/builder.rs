//! Builds the item listing SELECT. Identifiers come from configuration only; nothing is interpolated from requests.

use crate::model::ListOrder;

/// Columns read for every item, in `Item` field order.
pub const ITEM_COLUMNS: &[&str] = &["id", "name", "price"];

/// Table holding items inside the configured schema.
pub const ITEMS_TABLE: &str = "items";

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// SELECT every item, sorted per `order`. No parameters.
pub fn select_items(schema: &str, order: ListOrder) -> String {
    let cols = ITEM_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ");
    let mut sql = format!("SELECT {} FROM {}", cols, qualified_table(schema, ITEMS_TABLE));
    match order {
        ListOrder::PriceDesc => sql.push_str(&format!(" ORDER BY {} DESC", quoted("price"))),
        ListOrder::StoreDefault => {}
    }
    sql
}

/// COUNT(*) over the items table; used before seeding.
pub fn count_items(schema: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", qualified_table(schema, ITEMS_TABLE))
}

/// INSERT one item with name and price bound as $1, $2.
pub fn insert_item(schema: &str) -> String {
    format!(
        "INSERT INTO {} ({}, {}) VALUES ($1, $2)",
        qualified_table(schema, ITEMS_TABLE),
        quoted("name"),
        quoted("price")
    )
}
