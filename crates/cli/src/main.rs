//! Storefront CLI - Product grid in the terminal
//!
//! Mounts the product list for the configured reference site, then runs one
//! card action against it.

mod grid_table;
mod logging;
mod settings;
mod terminal;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use storefront_core::application::{
    ActionOutcome, AddToCartOutcome, CardAction, CartSession, LoadOutcome, ProductListView,
};
use storefront_core::domain::DomainError;
use storefront_core::port::{CartStore, SystemTimeProvider};
use storefront_infra_http::ReqwestApiClient;

use settings::Overrides;
use terminal::{TerminalNavigator, TerminalNotifier};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront product list CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Reference site whose catalog is shown (overrides config)
    #[arg(long)]
    reference_site: Option<String>,

    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rendered grid as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product grid
    List,

    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        product_id: String,
    },

    /// Open the product detail page
    Open {
        /// Product ID
        product_id: String,
    },

    /// Go to the buy-now page
    Buy {
        /// Product ID
        product_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let overrides = Overrides {
        api_base_url: cli.api_url.clone(),
        reference_site: cli.reference_site.clone(),
    };
    let config = settings::load(cli.config.as_deref(), &overrides)?;

    info!(
        version = storefront_core::VERSION,
        api = %config.api_base_url,
        reference_site = %config.reference_site,
        "Storefront starting"
    );

    // DI wiring
    let api =
        Arc::new(ReqwestApiClient::from_config(&config).context("Failed to create HTTP client")?);
    let cart = CartSession::start(Arc::new(SystemTimeProvider));
    let view = ProductListView::new(
        config.reference_site.clone(),
        api,
        cart.clone(),
        Arc::new(TerminalNotifier),
        Arc::new(TerminalNavigator),
    );

    let loaded = view.mount().await;

    let result = run(&cli, &view, &cart, loaded).await;

    view.unmount();
    cart.end();

    result
}

async fn run(
    cli: &Cli,
    view: &ProductListView,
    cart: &CartSession,
    loaded: LoadOutcome,
) -> Result<()> {
    let action = match &cli.command {
        Commands::List => {
            let grid = view.render();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                grid_table::print_grid(&grid);
            }
            return Ok(());
        }
        Commands::Add { product_id } => CardAction::AddToCart(product_id.clone()),
        Commands::Open { product_id } => CardAction::OpenDetail(product_id.clone()),
        Commands::Buy { product_id } => CardAction::BuyNow(product_id.clone()),
    };

    match view.handle(action).await {
        ActionOutcome::Cart(AddToCartOutcome::Added) => {
            println!();
            println!("{}", "Cart".cyan().bold());
            println!("{}", grid_table::cart_table(&cart.entries()));
            println!("  {} {}", "Items:".bold(), cart.total_quantity());
        }
        ActionOutcome::Cart(AddToCartOutcome::Failed) => {
            bail!("Add to cart failed");
        }
        ActionOutcome::Navigated(route) => {
            info!(route = %route, "Navigation requested");
        }
        ActionOutcome::UnknownProduct(product_id) => {
            if loaded == LoadOutcome::Failed {
                bail!("Product list could not be loaded");
            }
            return Err(DomainError::ProductNotFound(product_id).into());
        }
        ActionOutcome::Ignored => {}
    }

    Ok(())
}
