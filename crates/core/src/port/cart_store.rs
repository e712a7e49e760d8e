// Cart Store Port (Interface)
// Shared, process-wide cart state owned outside any single view

use crate::domain::{CartEntry, Product, SnapshotLine};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Cart session has ended")]
    SessionEnded,

    #[error("Quantity overflow for product {0}")]
    QuantityOverflow(String),
}

/// Cart capability
///
/// Mutation entry points are `add_item` and `reconcile`; `entries` is the
/// query surface for other views.
pub trait CartStore: Send + Sync {
    /// Add one unit of `product` to the local cart
    fn add_item(&self, product: &Product) -> Result<(), CartError>;

    /// Replace local quantities with the server's
    fn reconcile(&self, lines: &[SnapshotLine]) -> Result<(), CartError>;

    /// Current cart lines in insertion order
    fn entries(&self) -> Vec<CartEntry>;
}
