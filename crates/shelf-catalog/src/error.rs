//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while building or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A marketplace code appeared more than once in the source.
    #[error("Duplicate marketplace code: {0}")]
    DuplicateMarketplaceCode(String),

    /// A configurable product row had no associated variant rows.
    #[error("Configurable product has no variants: {0}")]
    EmptyConfigurable(String),

    /// A source row could not be turned into a product.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// No product with the given marketplace code.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A filter carried out-of-range parameters.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl CatalogError {
    /// Shorthand for a [`CatalogError::MalformedRow`].
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CatalogError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
