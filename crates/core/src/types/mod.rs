//! Core types for NovaStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order_item;
pub mod payment;
pub mod status;

pub use id::*;
pub use order_item::OrderItem;
pub use payment::{Payment, PaymentMethod};
pub use status::ORDER_STATUS_CREATED;
