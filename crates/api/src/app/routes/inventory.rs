use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use dcclink_core::ItemSummary;
use dcclink_inventory::AddItem;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/add-item", post(add_item))
        .route("/remove-item", post(remove_item))
        .route("/update-quantity", post(update_quantity))
        .route("/get-inventory", get(get_inventory))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let cmd = AddItem::new(body.name, body.quantity);

    let item = match services.store().add_item(&cmd).await {
        Ok(item) => item,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::info!(name = %item.name, quantity = item.quantity, "item added");

    (
        StatusCode::OK,
        Json(dto::MessageResponse::new("Item added successfully")),
    )
        .into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RemoveItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let removed = match services.store().remove_item(&body.name).await {
        Ok(item) => item,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::info!(name = %removed.name, "item removed");

    (
        StatusCode::OK,
        Json(dto::MessageResponse::new("Item removed successfully")),
    )
        .into_response()
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::UpdateQuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let change = match services.store().update_quantity(&body.name, body.quantity).await {
        Ok(change) => change,
        Err(e) => return errors::store_error_to_response(e),
    };

    let action = change.action().as_str();
    tracing::info!(
        name = %change.name,
        delta = change.delta,
        new_quantity = change.new_quantity,
        clamped = change.was_clamped(),
        "{} units {action}",
        change.delta.abs(),
    );

    (
        StatusCode::OK,
        Json(dto::UpdateQuantityResponse {
            message: format!("Item {action} successfully"),
            new_quantity: change.new_quantity,
        }),
    )
        .into_response()
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = match services.store().list_items().await {
        Ok(items) => items,
        Err(e) => return errors::store_error_to_response(e),
    };

    let rows: Vec<ItemSummary> = items.into_iter().map(ItemSummary::from).collect();
    (StatusCode::OK, Json(rows)).into_response()
}
