//! In-process item store. Insertion order is its default order.

use crate::error::AppError;
use crate::model::{Item, ListOrder};
use crate::store::ItemStore;
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        MemoryItemStore {
            items: RwLock::new(items),
        }
    }

    /// Append an item. Ids are the caller's responsibility.
    pub fn insert(&self, item: Item) {
        self.items
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(item);
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_items(&self, order: ListOrder) -> Result<Vec<Item>, AppError> {
        let mut items = self
            .items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if order == ListOrder::PriceDesc {
            // stable: equal prices keep insertion order
            items.sort_by(|a, b| b.price.cmp(&a.price));
        }
        Ok(items)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryItemStore {
        MemoryItemStore::with_items(vec![
            Item::new(1, "Brie", 5),
            Item::new(2, "Gouda", 10),
            Item::new(3, "Camembert", 5),
        ])
    }

    #[tokio::test]
    async fn price_desc_sorts_highest_first_and_keeps_ties_in_insertion_order() {
        let items = sample().list_items(ListOrder::PriceDesc).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn store_default_returns_insertion_order() {
        let items = sample().list_items(ListOrder::StoreDefault).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn insert_is_visible_to_later_listings() {
        let store = MemoryItemStore::new();
        assert!(store.is_empty());
        store.insert(Item::new(7, "Stilton", 9));
        assert_eq!(store.len(), 1);
        let items = store.list_items(ListOrder::PriceDesc).await.unwrap();
        assert_eq!(items, vec![Item::new(7, "Stilton", 9)]);
    }
}
