// Product List View - Catalog grid with add-to-cart and navigation

pub mod constants;
pub mod contract;
mod lifetime;
pub mod render;


pub use lifetime::{view_lifetime, LivenessToken, UnmountHandle};
pub use render::{ProductCard, ProductGrid};

use crate::domain::{CartSnapshot, Product, ProductId, Route};
use crate::error::AppError;
use crate::port::{ApiClient, CartStore, IdProvider, Navigator, Notifier, UuidProvider};
use constants::{ADD_TO_CART_ERROR_MESSAGE, ADD_TO_CART_SUCCESS_MESSAGE, CART_ADD_ENDPOINT};
use contract::AddToCartRequest;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

/// User interaction on a product card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "product_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardAction {
    /// Cart button (never follows the detail link)
    AddToCart(ProductId),
    /// Cover image link
    OpenDetail(ProductId),
    /// "Buy Now" link
    BuyNow(ProductId),
}

/// Result of mounting the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Product list replaced with this many products
    Loaded(usize),
    /// Fetch failed; list left empty
    Failed,
    /// View was unmounted before the response arrived
    Cancelled,
    /// Mount already ran for this view instance
    AlreadyMounted,
}

/// Result of one add-to-cart submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added,
    Failed,
}

/// Result of a card action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Cart(AddToCartOutcome),
    Navigated(Route),
    /// View is gone; action ignored
    Ignored,
    /// Product is not in the current list
    UnknownProduct(ProductId),
}

/// Product List View
///
/// Holds the product list for one mount of the grid. The list lives only as
/// long as the view; cart state belongs to the injected `CartStore`.
pub struct ProductListView {
    reference_site: String,
    api: Arc<dyn ApiClient>,
    cart: Arc<dyn CartStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    id_provider: Arc<dyn IdProvider>,
    products: RwLock<Vec<Product>>,
    mounted: AtomicBool,
    unmount: UnmountHandle,
    liveness: LivenessToken,
}

impl ProductListView {
    pub fn new(
        reference_site: impl Into<String>,
        api: Arc<dyn ApiClient>,
        cart: Arc<dyn CartStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (unmount, liveness) = view_lifetime();

        Self {
            reference_site: reference_site.into(),
            api,
            cart,
            notifier,
            navigator,
            id_provider: Arc::new(UuidProvider),
            products: RwLock::new(Vec::new()),
            mounted: AtomicBool::new(false),
            unmount,
            liveness,
        }
    }

    /// Use a custom request ID source (deterministic tests)
    pub fn with_id_provider(mut self, id_provider: Arc<dyn IdProvider>) -> Self {
        self.id_provider = id_provider;
        self
    }

    pub fn reference_site(&self) -> &str {
        &self.reference_site
    }

    /// Load the product list (one request per view instance)
    ///
    /// Load failures are logged only; the list stays empty. Unmounting while
    /// the request is in flight cancels it.
    pub async fn mount(&self) -> LoadOutcome {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Product list already mounted, skipping fetch");
            return LoadOutcome::AlreadyMounted;
        }

        let mut liveness = self.liveness.clone();
        if liveness.is_unmounted() {
            return LoadOutcome::Cancelled;
        }

        let path = contract::products_path(&self.reference_site);
        info!(reference_site = %self.reference_site, "Loading products");

        let response = tokio::select! {
            response = self.api.get(&path) => response,
            _ = liveness.unmounted() => {
                info!("View unmounted before products loaded, fetch cancelled");
                return LoadOutcome::Cancelled;
            }
        };

        let products = match response
            .map_err(AppError::from)
            .and_then(contract::decode_products)
        {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, reference_site = %self.reference_site, "Failed to fetch products");
                return LoadOutcome::Failed;
            }
        };

        // Liveness is checked under the write guard; unmount clears under it too
        let mut list = self.products.write().unwrap_or_else(PoisonError::into_inner);
        if self.liveness.is_unmounted() {
            return LoadOutcome::Cancelled;
        }

        let count = products.len();
        *list = products;
        drop(list);
        info!(count, "Products loaded");

        LoadOutcome::Loaded(count)
    }

    /// Add one unit of `product` to the cart
    ///
    /// The local cart is only touched after the server accepted the add;
    /// the server's cart snapshot is then reconciled into it. Concurrent
    /// submissions (even for the same product) are not deduplicated.
    pub async fn add_to_cart(&self, product: &Product) -> AddToCartOutcome {
        let request_id = self.id_provider.generate_id();
        info!(request_id = %request_id, product_id = %product.id, "Adding product to cart");

        let snapshot = match self.submit_add(&request_id, &product.id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(request_id = %request_id, product_id = %product.id, error = %e, "Add to cart error");
                self.notify_error();
                return AddToCartOutcome::Failed;
            }
        };

        if let Err(e) = self.apply_locally(&request_id, product, &snapshot) {
            error!(request_id = %request_id, product_id = %product.id, error = %e, "Local cart rejected item");
            self.notify_error();
            return AddToCartOutcome::Failed;
        }

        if self.liveness.is_unmounted() {
            debug!(request_id = %request_id, "View unmounted, success toast suppressed");
        } else {
            self.notifier.notify_success(ADD_TO_CART_SUCCESS_MESSAGE);
        }

        AddToCartOutcome::Added
    }

    /// Navigate to the product detail page
    pub fn open_detail(&self, product_id: impl Into<String>) -> Option<Route> {
        self.navigate(Route::ProductDetail(product_id.into()))
    }

    /// Navigate to the buy-now destination
    pub fn buy_now(&self, product_id: impl Into<String>) -> Option<Route> {
        self.navigate(Route::BuyNow(product_id.into()))
    }

    /// Dispatch a card action
    pub async fn handle(&self, action: CardAction) -> ActionOutcome {
        let navigated = |route: Option<Route>| match route {
            Some(route) => ActionOutcome::Navigated(route),
            None => ActionOutcome::Ignored,
        };

        match action {
            CardAction::AddToCart(product_id) => {
                if self.liveness.is_unmounted() {
                    return ActionOutcome::Ignored;
                }
                match self.find_product(&product_id) {
                    Some(product) => ActionOutcome::Cart(self.add_to_cart(&product).await),
                    None => {
                        warn!(product_id = %product_id, "Add to cart for unknown product");
                        ActionOutcome::UnknownProduct(product_id)
                    }
                }
            }
            CardAction::OpenDetail(product_id) => navigated(self.open_detail(product_id)),
            CardAction::BuyNow(product_id) => navigated(self.buy_now(product_id)),
        }
    }

    /// Current product list (server order)
    pub fn products(&self) -> Vec<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find_product(&self, product_id: &str) -> Option<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }

    /// Render the current product list
    pub fn render(&self) -> ProductGrid {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        render::render_grid(&products)
    }

    /// Tear the view down: cancels an in-flight mount and drops the list
    pub fn unmount(&self) {
        let mut list = self.products.write().unwrap_or_else(PoisonError::into_inner);
        self.unmount.unmount();
        list.clear();
        drop(list);
        debug!("Product list unmounted");
    }

    pub fn is_unmounted(&self) -> bool {
        self.liveness.is_unmounted()
    }

    /// POST the add; any 2xx counts as accepted
    async fn submit_add(
        &self,
        request_id: &str,
        product_id: &str,
    ) -> crate::error::Result<CartSnapshot> {
        let body = serde_json::to_value(AddToCartRequest::single(product_id))?;
        let response = self.api.post(CART_ADD_ENDPOINT, &body).await?;

        Ok(contract::decode_cart(response).unwrap_or_else(|e| {
            warn!(request_id = %request_id, error = %e, "Add to cart response has no cart envelope");
            CartSnapshot::default()
        }))
    }

    fn apply_locally(
        &self,
        request_id: &str,
        product: &Product,
        snapshot: &CartSnapshot,
    ) -> crate::error::Result<()> {
        self.cart.add_item(product)?;
        self.reconcile(request_id, snapshot);
        debug!(request_id = %request_id, cart = %snapshot.as_value(), "Updated cart");
        Ok(())
    }

    fn reconcile(&self, request_id: &str, snapshot: &CartSnapshot) {
        let Some(lines) = snapshot.lines() else {
            debug!(request_id = %request_id, "Server cart snapshot not recognised, keeping local state");
            return;
        };

        if let Err(e) = self.cart.reconcile(&lines) {
            warn!(request_id = %request_id, error = %e, "Cart reconciliation failed");
        }
    }

    fn navigate(&self, route: Route) -> Option<Route> {
        if self.liveness.is_unmounted() {
            debug!(route = %route, "View unmounted, navigation ignored");
            return None;
        }

        self.navigator.navigate(&route);
        Some(route)
    }

    fn notify_error(&self) {
        if !self.liveness.is_unmounted() {
            self.notifier.notify_error(ADD_TO_CART_ERROR_MESSAGE);
        }
    }
}
