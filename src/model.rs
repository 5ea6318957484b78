//! Item record and listing order.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use std::str::FromStr;
use utoipa::ToSchema;

/// One row of the `items` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: i64) -> Self {
        Item {
            id,
            name: name.into(),
            price,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for Item {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Item {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }
}

/// Order applied when listing items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Highest price first. Ties keep the store's own order.
    #[default]
    PriceDesc,
    /// Whatever order the store returns; unspecified.
    StoreDefault,
}

impl ListOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOrder::PriceDesc => "price_desc",
            ListOrder::StoreDefault => "unordered",
        }
    }
}

impl FromStr for ListOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price_desc" => Ok(ListOrder::PriceDesc),
            "unordered" => Ok(ListOrder::StoreDefault),
            _ => Err(ConfigError::Invalid {
                key: "ITEMS_ORDER",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_exact_attribute_names() {
        let json = serde_json::to_string(&Item::new(2, "Gouda", 10)).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Gouda","price":10}"#);
    }

    #[test]
    fn list_order_parses_known_values() {
        assert_eq!("price_desc".parse::<ListOrder>().unwrap(), ListOrder::PriceDesc);
        assert_eq!(" Unordered ".parse::<ListOrder>().unwrap(), ListOrder::StoreDefault);
    }

    #[test]
    fn list_order_rejects_unknown_values() {
        let err = "price_asc".parse::<ListOrder>().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "ITEMS_ORDER", .. }));
    }

    #[test]
    fn list_order_defaults_to_price_desc() {
        assert_eq!(ListOrder::default(), ListOrder::PriceDesc);
        assert_eq!(ListOrder::default().as_str(), "price_desc");
    }
}
