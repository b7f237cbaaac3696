//! Inventory persistence: the `items` table behind an async store trait.
//!
//! Handlers never reach a global session; they receive an explicitly
//! constructed store handle (usually `Arc<dyn InventoryStore>`) that is opened
//! at process start and closed at shutdown.

use std::sync::Arc;

use thiserror::Error;

use dcclink_core::{DomainError, Item};
use dcclink_inventory::{AddItem, QuantityChange};

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryInventoryStore;
pub use sqlite::SqliteInventoryStore;

pub use sqlx::Error as SqlxError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Business-rule failure (validation, duplicate name, unknown name).
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// The domain error, if this failure is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            StoreError::Database(_) => None,
        }
    }
}

/// Item storage with single-operation transactions.
///
/// Every method either commits fully or leaves the table unchanged.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Insert a new item. Fails with a conflict when the name already exists
    /// (ignoring case).
    async fn add_item(&self, cmd: &AddItem) -> Result<Item, StoreError>;

    /// Delete the item with this name, returning the removed row.
    async fn remove_item(&self, name: &str) -> Result<Item, StoreError>;

    /// Apply `delta` to the item's quantity, flooring at zero.
    async fn update_quantity(&self, name: &str, delta: i64) -> Result<QuantityChange, StoreError>;

    /// All rows in storage (insertion) order.
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    /// Release underlying resources. Further calls may fail.
    async fn close(&self);
}

#[async_trait::async_trait]
impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    async fn add_item(&self, cmd: &AddItem) -> Result<Item, StoreError> {
        (**self).add_item(cmd).await
    }

    async fn remove_item(&self, name: &str) -> Result<Item, StoreError> {
        (**self).remove_item(name).await
    }

    async fn update_quantity(&self, name: &str, delta: i64) -> Result<QuantityChange, StoreError> {
        (**self).update_quantity(name, delta).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_items().await
    }

    async fn close(&self) {
        (**self).close().await
    }
}

/// Behaviour every `InventoryStore` implementation must share.
#[cfg(test)]
pub(crate) mod contract {
    use super::*;
    use dcclink_inventory::{ITEM_EXISTS, ITEM_NOT_FOUND};

    fn names(items: &[Item]) -> Vec<(&str, i64)> {
        items.iter().map(|i| (i.name.as_str(), i.quantity)).collect()
    }

    pub async fn duplicate_names_conflict_ignoring_case(store: &dyn InventoryStore) {
        store.add_item(&AddItem::new("Widget", 5)).await.unwrap();

        for (name, qty) in [("Widget", 5), ("widget", 0), ("WIDGET", 99)] {
            let err = store.add_item(&AddItem::new(name, qty)).await.unwrap_err();
            assert_eq!(err.as_domain(), Some(&DomainError::conflict(ITEM_EXISTS)));
        }

        let items = store.list_items().await.unwrap();
        assert_eq!(names(&items), vec![("Widget", 5)]);
    }

    pub async fn invalid_items_are_rejected(store: &dyn InventoryStore) {
        let err = store.add_item(&AddItem::new("", 1)).await.unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::Validation(_))));

        let err = store.add_item(&AddItem::new("Bolt", -3)).await.unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::Validation(_))));

        assert!(store.list_items().await.unwrap().is_empty());
    }

    pub async fn update_clamps_and_matches_case_insensitively(store: &dyn InventoryStore) {
        store.add_item(&AddItem::new("Widget", 5)).await.unwrap();

        let change = store.update_quantity("wIdGeT", 3).await.unwrap();
        assert_eq!((change.previous, change.new_quantity), (5, 8));

        let change = store.update_quantity("Widget", -100).await.unwrap();
        assert_eq!(change.new_quantity, 0);

        let items = store.list_items().await.unwrap();
        assert_eq!(names(&items), vec![("Widget", 0)]);
    }

    pub async fn unknown_names_are_not_found(store: &dyn InventoryStore) {
        store.add_item(&AddItem::new("Nut", 2)).await.unwrap();

        let err = store.remove_item("Bolt").await.unwrap_err();
        assert_eq!(err.as_domain(), Some(&DomainError::not_found(ITEM_NOT_FOUND)));

        let err = store.update_quantity("Bolt", 1).await.unwrap_err();
        assert_eq!(err.as_domain(), Some(&DomainError::not_found(ITEM_NOT_FOUND)));

        let items = store.list_items().await.unwrap();
        assert_eq!(names(&items), vec![("Nut", 2)]);
    }

    pub async fn list_reflects_adds_minus_removes(store: &dyn InventoryStore) {
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            store.add_item(&AddItem::new(*name, i as i64)).await.unwrap();
        }
        let removed = store.remove_item("B").await.unwrap();
        assert_eq!(removed.name, "b");
        store.remove_item("d").await.unwrap();

        let items = store.list_items().await.unwrap();
        assert_eq!(names(&items), vec![("a", 0), ("c", 2), ("e", 4)]);
    }

    pub async fn widget_scenario(store: &dyn InventoryStore) {
        store.add_item(&AddItem::new("Widget", 5)).await.unwrap();
        assert_eq!(names(&store.list_items().await.unwrap()), vec![("Widget", 5)]);

        let change = store.update_quantity("Widget", -10).await.unwrap();
        assert_eq!(change.new_quantity, 0);

        store.remove_item("Widget").await.unwrap();
        assert!(store.list_items().await.unwrap().is_empty());

        let err = store.remove_item("Widget").await.unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::NotFound(_))));
    }
}
