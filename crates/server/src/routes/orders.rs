//! Checkout and order history route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::Result;
use crate::middleware::AppJson;
use crate::models::order::PlaceOrderRequest;
use crate::services::OrderService;
use crate::state::AppState;

/// Query parameters for the order history endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyOrdersQuery {
    pub user_id: Option<String>,
}

/// Place an order.
pub async fn place(
    State(state): State<AppState>,
    AppJson(request): AppJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse> {
    let receipt = OrderService::new(state.pool()).place_order(request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// List the calling user's orders, newest first.
pub async fn mine(
    State(state): State<AppState>,
    Query(query): Query<MyOrdersQuery>,
) -> Result<impl IntoResponse> {
    let orders = OrderService::new(state.pool())
        .list_my_orders(query.user_id.as_deref())
        .await?;
    Ok(Json(orders))
}
