//! Infrastructure layer: persistence adapters for the inventory.

pub mod store;

pub use store::{InMemoryInventoryStore, InventoryStore, SqliteInventoryStore, StoreError};
