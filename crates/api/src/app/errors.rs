use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dcclink_core::DomainError;
use dcclink_infra::StoreError;

pub fn domain_error_to_response(err: &DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        // Duplicate names are reported as 400, which existing clients rely on.
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(e) => domain_error_to_response(&e),
        StoreError::Database(e) => {
            tracing::error!(error = %e, "inventory store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "internal store error",
            )
        }
    }
}

/// A body that is not valid JSON for the endpoint is a validation failure.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let detail = rejection.body_text();
    tracing::warn!(status = %rejection.status(), %detail, "rejected request body");
    json_error(StatusCode::BAD_REQUEST, "validation_error", detail)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "detail": detail.into(),
        })),
    )
        .into_response()
}
