// Cart Domain Model

use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Cart line (product reference + quantity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,

    /// Full product when known locally; `None` for entries that only the
    /// server knows about.
    pub product: Option<Product>,

    pub quantity: u32,

    pub added_at: i64, // epoch ms
}

impl CartEntry {
    pub fn new(product: Product, quantity: u32, added_at: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            product: Some(product),
            quantity,
            added_at,
        }
    }
}

/// Server-side cart as returned by `api/cart/add` (opaque JSON)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot(serde_json::Value);

/// Per-product quantity extracted from a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartSnapshot {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Extract quantities when the snapshot has the shape
    /// `{ items: [{ productId | product, quantity }] }`.
    ///
    /// `product` may be an id string or a populated object with `_id`.
    /// Returns `None` for any other shape.
    pub fn lines(&self) -> Option<Vec<SnapshotLine>> {
        let items = self.0.get("items")?.as_array()?;

        items
            .iter()
            .map(|item| {
                let product_id = item
                    .get("productId")
                    .or_else(|| item.get("product"))
                    .and_then(|p| p.as_str().or_else(|| p.get("_id")?.as_str()))?;
                let quantity = item.get("quantity")?.as_u64()?;

                Some(SnapshotLine {
                    product_id: product_id.to_string(),
                    quantity: u32::try_from(quantity).ok()?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_lines_with_product_id() {
        let snapshot = CartSnapshot::new(json!({
            "items": [
                {"productId": "p1", "quantity": 2},
                {"productId": "p2", "quantity": 1}
            ]
        }));

        let lines = snapshot.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, "p1");
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_snapshot_lines_with_populated_product() {
        let snapshot = CartSnapshot::new(json!({
            "items": [{"product": {"_id": "p9", "productName": "Mug"}, "quantity": 3}]
        }));

        let lines = snapshot.lines().unwrap();
        assert_eq!(lines[0].product_id, "p9");
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn test_unrecognised_snapshot_is_opaque() {
        assert!(CartSnapshot::new(json!({"total": 3})).lines().is_none());
        assert!(CartSnapshot::new(json!(null)).lines().is_none());
        assert!(CartSnapshot::new(json!({"items": [{"quantity": 1}]}))
            .lines()
            .is_none());
    }
}
