use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Development helper: where the content tool's project lives on this machine.
pub async fn file_path(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::FilePathQuery>,
) -> axum::response::Response {
    let config = services.config();
    let path = if query.projectpath {
        &config.project_path
    } else {
        &config.project_file
    };

    (
        StatusCode::OK,
        Json(dto::FilePathResponse {
            path: path.display().to_string(),
        }),
    )
        .into_response()
}
