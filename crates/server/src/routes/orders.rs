use axum::{
    extract::{Path, State},
    Form, Json,
};
use common::form::lenient_int;
use models::Order;
use serde::Deserialize;
use service::errors::ServiceError;

use crate::{errors::ApiError, state::ServerState};

const ORDER_NOT_FOUND: &str = "Order not found";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateOrderForm {
    pub service_id: String,
    pub consumer_id: String,
}

fn order_error(e: ServiceError) -> ApiError {
    match e {
        ServiceError::NotFound(_) => ApiError::not_found(ORDER_NOT_FOUND),
        other => other.into(),
    }
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body(content = crate::openapi::CreateOrderRequest, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Pending order"))
)]
pub async fn create(State(state): State<ServerState>, Form(form): Form<CreateOrderForm>) -> Result<Json<Order>, ApiError> {
    let order = state
        .orders
        .place(lenient_int(&form.service_id), lenient_int(&form.consumer_id))
        .await?;
    Ok(Json(order))
}

/// The path segment is taken as a string so that a non-numeric ID reads as
/// order 0 (never issued) instead of a routing rejection.
#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Completed order"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn complete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Order>, ApiError> {
    let order = state.orders.complete(lenient_int(&id)).await.map_err(order_error)?;
    Ok(Json(order))
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Order>, ApiError> {
    let order = state.orders.get(lenient_int(&id)).await.map_err(order_error)?;
    Ok(Json(order))
}
