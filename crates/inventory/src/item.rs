use serde::{Deserialize, Serialize};

use dcclink_core::{DomainError, DomainResult, Item};

pub const ITEM_EXISTS: &str = "Item already exists.";
pub const ITEM_NOT_FOUND: &str = "Item not found.";

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub name: String,
    pub quantity: i64,
}

impl AddItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Item name cannot be empty."));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("Quantity cannot be negative."));
        }
        Ok(())
    }
}

/// Item names are unique ignoring ASCII case, the same rule SQLite's
/// `NOCASE` collation applies.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// `max(0, current + delta)`.
pub fn clamped_quantity(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta).max(0)
}

/// Whether a quantity update was a purchase or a return.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    Purchased,
    Returned,
}

impl StockAction {
    /// Positive deltas are purchases; zero and negative deltas count as returns.
    pub fn for_delta(delta: i64) -> Self {
        if delta > 0 {
            StockAction::Purchased
        } else {
            StockAction::Returned
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockAction::Purchased => "purchased",
            StockAction::Returned => "returned",
        }
    }
}

/// Outcome of applying a delta to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityChange {
    pub name: String,
    pub previous: i64,
    pub delta: i64,
    pub new_quantity: i64,
}

impl QuantityChange {
    pub fn action(&self) -> StockAction {
        StockAction::for_delta(self.delta)
    }

    /// True when the requested delta would have gone below zero.
    pub fn was_clamped(&self) -> bool {
        self.previous.saturating_add(self.delta) < 0
    }
}

/// Apply `delta` to `item` in place, flooring the result at zero.
pub fn apply_delta(item: &mut Item, delta: i64) -> QuantityChange {
    let previous = item.quantity;
    item.quantity = clamped_quantity(previous, delta);

    QuantityChange {
        name: item.name.clone(),
        previous,
        delta,
        new_quantity: item.quantity,
    }
}
