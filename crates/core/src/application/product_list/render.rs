// Product grid rendering
//
// Pure mapping from the product list to a view model. Front ends draw the
// cards; nothing here touches ports or view state.

use super::constants::{CURRENCY_SYMBOL, GRID_HEADING, GRID_SUBHEADING};
use super::CardAction;
use crate::domain::{Amount, Product, ProductId, Route};
use serde::Serialize;

/// Rendered grid (cards in product-list order)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGrid {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub cards: Vec<ProductCard>,
}

/// Card cover (wrapped in the product-detail link)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverImage {
    pub src: String,
    pub alt: String,
}

/// One product card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub product_id: ProductId,
    pub cover: Option<CoverImage>,
    /// `"<discount>% OFF"` when discount > 0
    pub discount_badge: Option<String>,
    /// Technology tags joined by `", "`
    pub tags: String,
    pub description: String,
    pub name: String,
    /// `"₹ <actual>/-"`
    pub price: String,
    /// Struck-through list price, only when marked down
    pub original_price: Option<String>,
    /// `"Save ₹ <price - actual>/-"`, only when marked down
    pub savings: Option<String>,
    /// Link around the cover image
    pub detail_route: Route,
    /// Add-to-cart control; suppresses the detail link
    pub add_to_cart: CardAction,
    pub buy_now_route: Route,
}

/// `"₹ 150/-"`
pub fn format_price(amount: Amount) -> String {
    format!("{} {}/-", CURRENCY_SYMBOL, amount)
}

/// `"25% OFF"`
pub fn format_discount(discount: Amount) -> String {
    format!("{}% OFF", discount)
}

/// `"Save ₹ 50/-"`
pub fn format_savings(savings: Amount) -> String {
    format!("Save {}", format_price(savings))
}

/// Render one product card
pub fn render_card(product: &Product) -> ProductCard {
    let savings = product.savings();

    ProductCard {
        product_id: product.id.clone(),
        cover: product.cover_image().map(|src| CoverImage {
            src: src.to_string(),
            alt: product.name.clone(),
        }),
        discount_badge: product
            .has_discount()
            .then(|| format_discount(product.discount)),
        tags: product.technologies.join(", "),
        description: product.description.clone(),
        name: product.name.clone(),
        price: format_price(product.actual_price),
        original_price: savings.map(|_| format_price(product.price)),
        savings: savings.map(format_savings),
        detail_route: Route::ProductDetail(product.id.clone()),
        add_to_cart: CardAction::AddToCart(product.id.clone()),
        buy_now_route: Route::BuyNow(product.id.clone()),
    }
}

/// Render the whole grid (one card per product, same order)
pub fn render_grid(products: &[Product]) -> ProductGrid {
    ProductGrid {
        heading: GRID_HEADING,
        subheading: GRID_SUBHEADING,
        cards: products.iter().map(render_card).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Mug".to_string(),
            description: "d".to_string(),
            technologies: vec!["ceramic".to_string()],
            images: vec!["a.jpg".to_string()],
            price: Amount::from(200),
            actual_price: Amount::from(150),
            discount: Amount::from(25),
        }
    }

    #[test]
    fn test_marked_down_card() {
        let card = render_card(&mug());

        assert_eq!(card.price, "₹ 150/-");
        assert_eq!(card.original_price.as_deref(), Some("₹ 200/-"));
        assert_eq!(card.savings.as_deref(), Some("Save ₹ 50/-"));
        assert_eq!(card.discount_badge.as_deref(), Some("25% OFF"));
        assert_eq!(card.tags, "ceramic");
        assert_eq!(card.description, "d");
        assert_eq!(
            card.cover,
            Some(CoverImage {
                src: "a.jpg".to_string(),
                alt: "Mug".to_string()
            })
        );
        assert_eq!(card.detail_route.path(), "/product/p1");
        assert_eq!(card.buy_now_route.path(), "/products/p1");
        assert_eq!(card.add_to_cart, CardAction::AddToCart("p1".to_string()));
    }

    #[test]
    fn test_full_price_card_has_no_strikethrough() {
        let mut product = mug();
        product.price = Amount::from(150);
        product.discount = Amount::ZERO;

        let card = render_card(&product);
        assert_eq!(card.price, "₹ 150/-");
        assert!(card.original_price.is_none());
        assert!(card.savings.is_none());
        assert!(card.discount_badge.is_none());
    }

    #[test]
    fn test_actual_above_price_shows_neither_label() {
        let mut product = mug();
        product.actual_price = Amount::from(250);

        let card = render_card(&product);
        assert!(card.original_price.is_none());
        assert!(card.savings.is_none());
    }

    #[test]
    fn test_tags_joined_with_comma() {
        let mut product = mug();
        product.technologies = vec!["rust".into(), "tokio".into(), "serde".into()];

        assert_eq!(render_card(&product).tags, "rust, tokio, serde");
    }

    #[test]
    fn test_missing_cover() {
        let mut product = mug();
        product.images.clear();

        assert!(render_card(&product).cover.is_none());
    }

    #[test]
    fn test_grid_keeps_order() {
        let products: Vec<Product> = ["c", "a", "b"]
            .iter()
            .map(|id| Product::new(*id, id.to_uppercase()))
            .collect();

        let grid = render_grid(&products);
        assert_eq!(grid.heading, "Our Products");
        assert_eq!(grid.cards.len(), 3);
        let ids: Vec<_> = grid.cards.iter().map(|c| c.product_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_fractional_prices() {
        let mut product = mug();
        product.price = Amount::new(199.5);
        product.actual_price = Amount::new(149.5);

        let card = render_card(&product);
        assert_eq!(card.price, "₹ 149.5/-");
        assert_eq!(card.savings.as_deref(), Some("Save ₹ 50/-"));
    }
}
