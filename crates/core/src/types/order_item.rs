//! Line-item snapshot stored with an order.
//!
//! Each element of an order's `items` array is a copy of what the buyer's
//! cart showed at checkout. The snapshot stays as ordered even if the
//! Product it came from later changes price or disappears.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ordered line, copied from the client's cart.
///
/// Every field is optional on the wire; whichever ones the client omits
/// are left out of the stored record entirely. `product_id` is an opaque
/// string rather than a [`ProductId`](crate::ProductId) because the
/// snapshot is not required to reference a live Product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_item_round_trip() {
        let item: OrderItem = serde_json::from_str(
            r#"{"productId":"p-1","title":"iPhone 14 Pro","price":3699,"qty":1}"#,
        )
        .unwrap();
        assert_eq!(item.product_id.as_deref(), Some("p-1"));
        assert_eq!(item.title.as_deref(), Some("iPhone 14 Pro"));
        assert_eq!(item.price, Some(Decimal::from(3699)));
        assert_eq!(item.qty, Some(1));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "p-1");
        assert_eq!(json["price"], 3699.0);
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let item = OrderItem {
            qty: Some(2),
            ..OrderItem::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"qty": 2})
        );
    }

    #[test]
    fn test_unknown_fields_dropped_on_round_trip() {
        let item: OrderItem =
            serde_json::from_str(r#"{"title":"Charger","color":"red"}"#).unwrap();
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"title": "Charger"})
        );
    }

    #[test]
    fn test_fractional_qty_rejected() {
        assert!(serde_json::from_str::<OrderItem>(r#"{"qty":1.5}"#).is_err());
    }

    #[test]
    fn test_price_keeps_decimal_fraction() {
        let item: OrderItem = serde_json::from_str(r#"{"price":199.99}"#).unwrap();
        assert_eq!(item.price.unwrap().to_string(), "199.99");
    }
}
