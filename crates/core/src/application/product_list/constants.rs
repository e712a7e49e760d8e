// Product list constants (ADR: No magic values)

/// Storefront whose catalog the grid shows
pub const DEFAULT_REFERENCE_SITE: &str = "661ed848d4205b13dba74f4b";

/// Product list endpoint (query: `referenceWebsite`)
pub const PRODUCTS_ENDPOINT: &str = "api/product/getproducts";

/// Add-to-cart endpoint
pub const CART_ADD_ENDPOINT: &str = "api/cart/add";

/// Every add-to-cart click adds exactly one unit
pub const ADD_TO_CART_QUANTITY: u32 = 1;

pub const ADD_TO_CART_SUCCESS_MESSAGE: &str = "Item added to cart successfully!";
pub const ADD_TO_CART_ERROR_MESSAGE: &str = "Failed to add item to cart.";

pub const GRID_HEADING: &str = "Our Products";
pub const GRID_SUBHEADING: &str = "Weekly Bestsellers Handpicked for You";

pub const CURRENCY_SYMBOL: &str = "₹";
