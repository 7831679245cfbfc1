//! Catalog product models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use novastore_core::ProductId;

/// A catalog product, served verbatim as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub stock: i32,
    /// Free-form spec sheet (label to value)
    pub specs: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog entry for bulk seeding.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub price: Decimal,
    pub image: &'static str,
    pub category: &'static str,
    pub stock: i32,
    pub specs: Value,
}

/// Summary of a destructive catalog reseed.
#[derive(Debug, Serialize)]
pub struct ReseedSummary {
    pub message: &'static str,
    pub deleted: i64,
    pub inserted: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_serializes_camel_case_with_numeric_price() {
        let product = Product {
            id: ProductId::new(uuid::Uuid::nil()),
            title: "Nova X1 Pro".to_string(),
            description: "Flagship phone".to_string(),
            price: Decimal::from(999),
            image: "https://example.com/x1.jpg".to_string(),
            category: "phones".to_string(),
            stock: 12,
            specs: json!({ "Display": "6.7\" OLED" }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
        assert!(value["price"].is_number());
        assert!((value["price"].as_f64().unwrap() - 999.0).abs() < f64::EPSILON);
        assert_eq!(value["specs"]["Display"], "6.7\" OLED");
    }
}
