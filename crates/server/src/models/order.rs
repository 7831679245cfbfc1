//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use novastore_core::{OrderId, OrderItem, Payment, UserId};

/// A placed order, served back exactly as stored.
///
/// `items` is the cart snapshot from checkout and `total` is the
/// client-supplied figure; neither is recomputed against the catalog when
/// the order is read back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: String,
    pub payment: Payment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable order data.
#[derive(Debug)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: &'static str,
    pub payment: Payment,
}

/// Payload for `POST /orders`.
///
/// `items` and `total` stay untyped here; checkout validates their JSON
/// shape itself so a wrong type yields the endpoint's own error rather
/// than a body-rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: Option<String>,
    pub items: Option<Value>,
    pub total: Option<Value>,
    pub payment: Option<Value>,
}

/// Receipt returned on successful checkout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub status: String,
}
