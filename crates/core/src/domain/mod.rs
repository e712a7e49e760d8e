// Domain Layer - Storefront entities

pub mod cart;
pub mod error;
pub mod product;
pub mod route;

// Re-exports
pub use cart::{CartEntry, CartSnapshot, SnapshotLine};
pub use error::DomainError;
pub use product::{Amount, Product, ProductId};
pub use route::Route;
