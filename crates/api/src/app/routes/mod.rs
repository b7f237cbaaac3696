use axum::{routing::get, Router};

pub mod inventory;
pub mod system;
pub mod transform;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/file-path", get(system::file_path))
        .merge(transform::router())
        .merge(inventory::router())
}
