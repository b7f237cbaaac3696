//! `dcclink-core`: shared domain types.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod error;
pub mod item;
pub mod transform;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId, ItemSummary};
pub use transform::{TransformKind, TransformPayload, Vec3};
