//! Domain models and wire shapes for the NovaStore API.
//!
//! Rows decode straight into these structs via `sqlx::FromRow`; response
//! bodies are produced by the `Serialize` impls, so anything that must never
//! leave the server (password hashes) lives on types without `Serialize`.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order, OrderReceipt, PlaceOrderRequest};
pub use product::{NewProduct, Product, ReseedSummary};
pub use user::{LoginRequest, NewUser, SignupRequest, UpdateProfileRequest, User, UserProfile};
