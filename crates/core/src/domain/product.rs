// Product Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product ID (opaque string assigned by the catalog backend)
pub type ProductId = String;

/// Numeric price, minor-unit agnostic.
///
/// Integral values display without a fractional part (`150`), everything
/// else in its shortest form (`149.5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Difference `self - other`
    pub fn minus(&self, other: Amount) -> Amount {
        Amount(self.0 - other.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Product Entity (as returned by the catalog API)
///
/// Values are trusted as given: `actual_price <= price` is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,

    #[serde(rename = "productName", default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Ordered technology tags
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Ordered image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,

    /// Base (list) price
    #[serde(default)]
    pub price: Amount,

    /// Discounted price actually charged
    #[serde(rename = "actualPrice", default)]
    pub actual_price: Amount,

    /// Discount percentage (0 when none)
    #[serde(default)]
    pub discount: Amount,
}

impl Product {
    /// Create a product with only identity and name (other fields empty)
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            technologies: Vec::new(),
            images: Vec::new(),
            price: Amount::ZERO,
            actual_price: Amount::ZERO,
            discount: Amount::ZERO,
        }
    }

    /// First image URL, if any
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// True when the list price is above the charged price
    pub fn is_marked_down(&self) -> bool {
        self.price > self.actual_price
    }

    /// Savings (`price - actual_price`) when marked down
    pub fn savings(&self) -> Option<Amount> {
        self.is_marked_down()
            .then(|| self.price.minus(self.actual_price))
    }
}
