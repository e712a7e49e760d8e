// Wire contract for the catalog and cart endpoints

use super::constants::{ADD_TO_CART_QUANTITY, PRODUCTS_ENDPOINT};
use crate::domain::{CartSnapshot, Product, ProductId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// `{ "data": ... }` envelope used by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ProductsPayload {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct CartPayload {
    #[serde(default)]
    cart: CartSnapshot,
}

/// Add-to-cart request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl AddToCartRequest {
    /// Single-unit add for `product_id`
    pub fn single(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: ADD_TO_CART_QUANTITY,
        }
    }
}

/// Product list path scoped to one reference site
pub fn products_path(reference_site: &str) -> String {
    format!("{}?referenceWebsite={}", PRODUCTS_ENDPOINT, reference_site)
}

/// Decode `{ data: { products: [...] } }`, preserving server order
pub fn decode_products(body: serde_json::Value) -> Result<Vec<Product>> {
    let envelope: Envelope<ProductsPayload> = serde_json::from_value(body)?;
    Ok(envelope.data.products)
}

/// Decode `{ data: { cart: ... } }`
pub fn decode_cart(body: serde_json::Value) -> Result<CartSnapshot> {
    let envelope: Envelope<CartPayload> = serde_json::from_value(body)?;
    Ok(envelope.data.cart)
}
