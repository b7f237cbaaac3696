use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub quantity: i64,
}

/// Clients may send the full item shape; the extra `quantity` is ignored.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub name: String,
}

/// `quantity` is the signed delta to apply.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilePathQuery {
    #[serde(default)]
    pub projectpath: bool,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateQuantityResponse {
    pub message: String,
    pub new_quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct FilePathResponse {
    pub path: String,
}
