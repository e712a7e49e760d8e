// Application Layer - Use Cases

pub mod cart_session;
pub mod product_list;

// Re-exports
pub use cart_session::CartSession;
pub use product_list::{
    ActionOutcome, AddToCartOutcome, CardAction, LoadOutcome, ProductCard, ProductGrid,
    ProductListView,
};
