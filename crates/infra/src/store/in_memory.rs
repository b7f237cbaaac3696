use std::sync::{PoisonError, RwLock};

use dcclink_core::{DomainError, Item, ItemId};
use dcclink_inventory::{AddItem, ITEM_EXISTS, ITEM_NOT_FOUND, QuantityChange, apply_delta, names_match};

use super::{InventoryStore, StoreError};

/// In-memory item store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    last_id: ItemId,
    rows: Vec<Item>,
}

impl Table {
    fn position(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| names_match(&row.name, name))
    }
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn add_item(&self, cmd: &AddItem) -> Result<Item, StoreError> {
        cmd.validate()?;

        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if table.position(&cmd.name).is_some() {
            return Err(DomainError::conflict(ITEM_EXISTS).into());
        }

        table.last_id += 1;
        let item = Item {
            id: table.last_id,
            name: cmd.name.clone(),
            quantity: cmd.quantity,
        };
        table.rows.push(item.clone());
        Ok(item)
    }

    async fn remove_item(&self, name: &str) -> Result<Item, StoreError> {
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let idx = table
            .position(name)
            .ok_or_else(|| DomainError::not_found(ITEM_NOT_FOUND))?;
        Ok(table.rows.remove(idx))
    }

    async fn update_quantity(&self, name: &str, delta: i64) -> Result<QuantityChange, StoreError> {
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let idx = table
            .position(name)
            .ok_or_else(|| DomainError::not_found(ITEM_NOT_FOUND))?;
        Ok(apply_delta(&mut table.rows[idx], delta))
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.clone())
    }

    async fn close(&self) {}
}
