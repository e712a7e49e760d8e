// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}
