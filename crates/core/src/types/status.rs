//! Order status labels.
//!
//! Orders carry a single free-form status label rather than a state
//! machine. This service only ever writes the initial label; whatever
//! fulfillment tooling sits downstream owns any later ones.

/// Status label assigned to every newly placed order.
pub const ORDER_STATUS_CREATED: &str = "created";
