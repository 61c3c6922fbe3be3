//! Product catalog module.
//!
//! Contains the product model, the builder that turns tabular rows into an
//! immutable catalog index, and the index itself.

mod attribute;
mod builder;
mod index;
mod product;

pub use attribute::AttributeValue;
pub use builder::{CatalogBuilder, Row};
pub use index::CatalogIndex;
pub use product::{BaseData, ConfigurableProduct, Product, SimpleProduct};
