//! Table rendering for the product grid and the cart

use colored::Colorize;
use storefront_core::application::ProductGrid;
use storefront_core::domain::CartEntry;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Was")]
    was: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Deal")]
    deal: String,
    #[tabled(rename = "Cover")]
    cover: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
}

/// Grid as a table (one row per card, grid order)
pub fn grid_table(grid: &ProductGrid) -> String {
    let rows: Vec<CardRow> = grid
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| CardRow {
            position: i + 1,
            id: card.product_id.clone(),
            name: card.name.clone(),
            tags: card.tags.clone(),
            price: card.price.clone(),
            was: card.original_price.clone().unwrap_or_default(),
            savings: card.savings.clone().unwrap_or_default(),
            deal: card.discount_badge.clone().unwrap_or_default(),
            cover: card
                .cover
                .as_ref()
                .map(|c| c.src.clone())
                .unwrap_or_default(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Heading, subheading and table; a notice when the grid is empty
pub fn print_grid(grid: &ProductGrid) {
    println!("{}", grid.heading.bold());
    println!("{}", grid.subheading.dimmed());
    println!();

    if grid.cards.is_empty() {
        println!("{}", "No products available".yellow());
        return;
    }

    println!("{}", grid_table(grid));
}

pub fn cart_table(entries: &[CartEntry]) -> String {
    let rows: Vec<CartRow> = entries
        .iter()
        .map(|entry| CartRow {
            id: entry.product_id.clone(),
            name: entry
                .product
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            quantity: entry.quantity,
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
