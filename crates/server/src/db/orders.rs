//! Order repository for database operations.
//!
//! `items` and `payment` live in JSONB columns; rows are decoded through
//! an internal row type so stored JSON that no longer matches the domain
//! shape surfaces as `DataCorruption` instead of a panic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use novastore_core::{OrderId, OrderItem, Payment, UserId};

use super::RepositoryError;
use crate::models::order::{NewOrder, Order};

/// Internal row type for database queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    user_id: UserId,
    items: serde_json::Value,
    total: Decimal,
    status: String,
    payment: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_value(row.items).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order items in database: {e}"))
        })?;
        let payment: Payment = serde_json::from_value(row.payment).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid payment data in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            items,
            total: row.total,
            status: row.status,
            payment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (user_id, items, total, status, payment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, items, total, status, payment, created_at, updated_at
            "#,
        )
        .bind(new_order.user_id)
        .bind(Json(new_order.items))
        .bind(new_order.total)
        .bind(new_order.status)
        .bind(Json(new_order.payment))
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row fails to decode.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, items, total, status, payment, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
