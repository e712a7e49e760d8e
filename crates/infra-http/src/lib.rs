// Storefront Infrastructure - HTTP Adapter
// Implements: ApiClient (ADR-001)

pub mod reqwest_client;

pub use reqwest_client::ReqwestApiClient;
