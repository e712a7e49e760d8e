// Client-side routes the product grid links to

use super::product::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "product_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    /// `/product/:id`
    ProductDetail(ProductId),
    /// `/products/:id`
    BuyNow(ProductId),
}

impl Route {
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ProductDetail(id) => write!(f, "/product/{}", id),
            Route::BuyNow(id) => write!(f, "/products/{}", id),
        }
    }
}
