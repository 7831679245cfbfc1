//! Business logic services.
//!
//! Route handlers stay thin; each API operation delegates to one of these:
//!
//! - `AccountService`: signup, login and profile updates
//! - `CatalogService`: product listing, lookup and destructive reseeding
//! - `OrderService`: checkout and per-user order history
//! - `ContactMailer`: SMTP relay for contact form submissions

pub mod accounts;
pub mod catalog;
pub mod mail;
pub mod orders;

pub use accounts::{AccountError, AccountService};
pub use catalog::{CatalogError, CatalogService};
pub use mail::{ContactMailer, MailerError};
pub use orders::{OrderError, OrderService};
