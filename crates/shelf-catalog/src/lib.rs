//! In-memory product catalog index and search for Shelfsearch.
//!
//! This crate provides the core of a standalone product search backend:
//!
//! - **Catalog**: simple and configurable (variant-bearing) products with
//!   typed attribute values
//! - **Builder**: turns raw tabular rows into an immutable catalog index
//! - **Search**: key/value, sort and pagination filters evaluated as a
//!   fixed-order pipeline over the index
//!
//! The catalog is built exactly once from a tabular source, then published
//! read-only. Because nothing mutates the index after construction, any
//! number of searches may run concurrently over an `Arc<CatalogIndex>`
//! without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_catalog::prelude::*;
//! use std::sync::Arc;
//!
//! let index = CatalogBuilder::new("en_GB", "GBP").build(rows)?;
//! let service = ProductSearchService::new(Arc::new(index));
//!
//! let result = service.search(&[
//!     Filter::key_value("color", vec!["red".to_string()]),
//!     Filter::sort_by("name", SortDirection::Ascending),
//!     Filter::page_size(10),
//! ])?;
//!
//! for hit in &result.hits {
//!     println!("{}: {}", hit.marketplace_code(), hit.title());
//! }
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::{AttributeCode, MarketplaceCode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::{AttributeCode, MarketplaceCode};

    // Catalog
    pub use crate::catalog::{
        AttributeValue, BaseData, CatalogBuilder, CatalogIndex, ConfigurableProduct, Product, Row,
        SimpleProduct,
    };

    // Search
    pub use crate::search::{Filter, ProductSearchService, SearchResult, SortDirection};
}
