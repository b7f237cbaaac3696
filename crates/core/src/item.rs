use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store.
pub type ItemId = i64;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
}

/// Wire shape of one inventory row (`GET /get-inventory`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub quantity: i64,
}

impl From<Item> for ItemSummary {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
        }
    }
}
