//! Inventory domain rules.
//!
//! Deterministic business rules for the items table: name uniqueness,
//! validation of new items and the clamp-to-zero quantity policy. No IO.

pub mod item;

pub use item::{
    AddItem, ITEM_EXISTS, ITEM_NOT_FOUND, QuantityChange, StockAction, apply_delta,
    clamped_quantity, names_match,
};
