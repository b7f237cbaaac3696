//! Transform submission endpoints.
//!
//! These stand in for a slow external process: each request waits for the
//! configured simulated latency, validates, logs the payload and echoes a
//! fixed message. Nothing is persisted.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use dcclink_core::{TransformKind, TransformPayload};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route(TransformKind::Full.path(), post(transform))
        .route(TransformKind::Translation.path(), post(translation))
        .route(TransformKind::Rotation.path(), post(rotation))
        .route(TransformKind::Scale.path(), post(scale))
}

pub async fn transform(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TransformPayload>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Full, body).await
}

pub async fn translation(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TransformPayload>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Translation, body).await
}

pub async fn rotation(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TransformPayload>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Rotation, body).await
}

pub async fn scale(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TransformPayload>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Scale, body).await
}

async fn receive(
    services: &AppServices,
    kind: TransformKind,
    body: Result<Json<TransformPayload>, JsonRejection>,
) -> axum::response::Response {
    // Every answer waits, rejections included.
    tokio::time::sleep(services.config().simulated_latency).await;

    let payload = match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    if let Err(e) = kind.validate(&payload) {
        tracing::warn!(endpoint = kind.path(), reason = %e, "rejected transform payload");
        return errors::domain_error_to_response(&e);
    }

    match kind {
        TransformKind::Full => tracing::info!(?payload, "received transform data"),
        TransformKind::Translation => {
            tracing::info!(location = ?payload.location, "received translation data")
        }
        TransformKind::Rotation => {
            tracing::info!(rotation = ?payload.rotation, "received rotation data")
        }
        TransformKind::Scale => tracing::info!(scale = ?payload.scale, "received scale data"),
    }

    (
        StatusCode::OK,
        Json(dto::MessageResponse::new(kind.success_message())),
    )
        .into_response()
}
