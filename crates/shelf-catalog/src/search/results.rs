//! Search result container.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The outcome of a search: matched products plus result metadata.
///
/// `num_results` reflects the count after filtering and pagination, i.e. it
/// always equals the number of hits actually returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Matched products, ordered.
    pub hits: Vec<Product>,
    /// Number of hits returned.
    pub num_results: usize,
}

impl SearchResult {
    /// Create a result from the final hit list.
    pub fn new(hits: Vec<Product>) -> Self {
        let num_results = hits.len();
        Self { hits, num_results }
    }

    /// An empty (but successful) result.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Check if there were no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
