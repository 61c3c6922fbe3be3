//! Search module.
//!
//! Contains the filter types, the fixed-order evaluation pipeline, and the
//! search service exposed to the host.

mod filter;
mod pipeline;
mod results;
mod service;

pub use filter::{Filter, SortDirection};
pub use pipeline::evaluate;
pub use results::SearchResult;
pub use service::ProductSearchService;
