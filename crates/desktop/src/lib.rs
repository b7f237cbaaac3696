//! `dcclink-desktop`
//!
//! Inventory manager client for the dcclink API.
//!
//! This crate provides:
//! - An HTTP client for the inventory endpoints
//! - Background fetching of the inventory table
//! - A view controller that turns results into rows and user notices
//!
//! The server stays the only source of truth; every successful change is
//! followed by a full refetch.

pub mod app;
pub mod client;
pub mod command;
pub mod fetcher;
pub mod types;

pub use app::InventoryApp;
pub use client::{ClientError, InventoryClient};
pub use command::{Command, CommandError};
pub use types::{FetchOutcome, FetchReport, Notice, NoticeLevel, ViewStatus};
