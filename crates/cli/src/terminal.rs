//! Terminal adapters for the Notifier and Navigator ports

use colored::Colorize;
use storefront_core::domain::Route;
use storefront_core::port::{Navigator, Notifier};

/// Prints toasts as coloured lines
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        println!("{}", format!("✓ {}", message).green().bold());
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", format!("✗ {}", message).red().bold());
    }
}

/// Prints the requested route
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &Route) {
        println!("{} {}", "→".cyan().bold(), route.path().cyan());
    }
}
