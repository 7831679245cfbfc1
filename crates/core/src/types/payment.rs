//! Payment descriptor attached to orders.
//!
//! Orders carry a small snapshot of how the buyer intends to pay. The
//! descriptor is stored verbatim with the order; no charge is ever made
//! from this service.

use serde::{Deserialize, Serialize};

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment; `last4` identifies the card.
    Card,
    /// PayPal payment; `paypal_email` identifies the account.
    Paypal,
    /// Cash on delivery.
    #[default]
    Cod,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Paypal => write!(f, "paypal"),
            Self::Cod => write!(f, "cod"),
        }
    }
}

/// Payment details submitted with an order.
///
/// All fields beyond the method are free-form and optional; whichever
/// ones the client omits are left out of the stored record entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_id: Option<String>,
}
