// Port Layer - Capabilities supplied by the host application

pub mod api_client;
pub mod cart_store;
pub mod navigator;
pub mod notifier;
pub mod providers; // For deterministic testing

// Re-exports
pub use api_client::{ApiClient, NetworkError};
pub use cart_store::{CartError, CartStore};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use providers::{
    IdProvider, SequentialIds, SteppingClock, SystemTimeProvider, TimeProvider, UuidProvider,
};
