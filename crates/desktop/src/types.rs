//! Shared view-side types.

use serde::{Deserialize, Serialize};

pub use dcclink_core::ItemSummary;

/// Result of one background inventory fetch.
///
/// An empty `Loaded` list means the inventory really is empty; a transport or
/// API failure is always reported as `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<ItemSummary>),
    Failed(String),
}

/// A fetch outcome tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Increases with every fetch the view starts; older reports are stale.
    pub generation: u64,
    pub outcome: FetchOutcome,
}

/// What the table currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing loaded yet.
    Loading,
    /// Rows reflect the last successful fetch.
    Ready,
    /// The last fetch failed; rows (if any) are from an earlier fetch.
    FetchFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Critical,
}

/// A message the front end must show the user (a modal dialog in a GUI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn critical(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Critical, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Critical => "error",
        };
        write!(f, "[{tag}] {}: {}", self.title, self.message)
    }
}
