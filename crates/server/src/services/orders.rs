//! Checkout and order history.
//!
//! Checkout trusts the client's total and stores its line items as a
//! snapshot: nothing is re-priced against the catalog. The structural
//! demands are that items is an array of line-item shapes and total is a
//! JSON number.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;

use novastore_core::{ORDER_STATUS_CREATED, OrderItem, Payment, UserId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::db::users::UserRepository;
use crate::models::order::{NewOrder, Order, OrderReceipt, PlaceOrderRequest};

/// Errors that can occur during checkout or order listing.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No user ID was supplied.
    #[error("login required")]
    LoginRequired,

    /// Items or total have the wrong JSON shape.
    #[error("invalid order payload")]
    InvalidPayload,

    /// The supplied user ID is not a valid identifier.
    #[error("invalid user id")]
    InvalidUserId,

    /// No user exists with the supplied ID.
    #[error("user not found")]
    UserNotFound,

    /// Total or payment could not be converted for storage.
    #[error("invalid order data: {0}")]
    InvalidOrderData(String),

    /// A checkout write or lookup failed.
    #[error("order storage failed: {0}")]
    Storage(RepositoryError),

    /// Repository/database error outside checkout.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order service.
pub struct OrderService<'a> {
    users: UserRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
            orders: OrderRepository::new(pool),
        }
    }

    /// Place an order for an existing user.
    ///
    /// Checks run in a fixed sequence: user ID presence, payload shape,
    /// user ID format, then user existence. Each failure reports only its
    /// own step.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::LoginRequired` if no user ID was supplied.
    /// Returns `OrderError::InvalidPayload` if items is not an array of
    /// line-item shapes or total is not a number.
    /// Returns `OrderError::InvalidUserId` / `OrderError::UserNotFound` if
    /// the user ID is malformed or unknown.
    /// Returns `OrderError::Storage` if the order cannot be written.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<OrderReceipt, OrderError> {
        let user_id = request
            .user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(OrderError::LoginRequired)?;

        let items = match request.items {
            Some(items @ Value::Array(_)) => serde_json::from_value::<Vec<OrderItem>>(items)
                .map_err(|_| OrderError::InvalidPayload)?,
            _ => return Err(OrderError::InvalidPayload),
        };
        let total = match request.total {
            Some(total) if total.is_number() => total,
            _ => return Err(OrderError::InvalidPayload),
        };

        let user_id = UserId::parse(user_id).map_err(|_| OrderError::InvalidUserId)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(OrderError::Storage)?
            .ok_or(OrderError::UserNotFound)?;

        let total = decimal_from_number(&total)
            .ok_or_else(|| OrderError::InvalidOrderData("total is out of range".to_string()))?;

        let payment = match request.payment {
            Some(value) => serde_json::from_value::<Payment>(value)
                .map_err(|e| OrderError::InvalidOrderData(format!("payment: {e}")))?,
            None => Payment::default(),
        };

        let order = self
            .orders
            .create(NewOrder {
                user_id: user.id,
                items,
                total,
                status: ORDER_STATUS_CREATED,
                payment,
            })
            .await
            .map_err(OrderError::Storage)?;

        Ok(OrderReceipt {
            order_id: order.id,
            status: order.status,
        })
    }

    /// List the orders of an existing user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::LoginRequired` if no user ID was supplied.
    /// Returns `OrderError::UserNotFound` if the ID is malformed or does not
    /// resolve to a user.
    pub async fn list_my_orders(&self, user_id: Option<&str>) -> Result<Vec<Order>, OrderError> {
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or(OrderError::LoginRequired)?;

        // A malformed ID cannot match any user, so it reads as unknown.
        let user_id = UserId::parse(user_id).map_err(|_| OrderError::UserNotFound)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(OrderError::UserNotFound)?;

        Ok(self.orders.list_for_user(user.id).await?)
    }
}

/// Convert a JSON number to `Decimal`, preserving integers exactly.
fn decimal_from_number(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(Decimal::from(int));
    }
    if let Some(int) = number.as_u64() {
        return Some(Decimal::from(int));
    }
    number.as_f64().and_then(Decimal::from_f64)
}
