//! Search service: the boundary exposed to the host.

use crate::catalog::{CatalogIndex, Product};
use crate::error::CatalogError;
use crate::search::{evaluate, Filter, SearchResult};
use std::sync::Arc;

/// Answers structured search queries over a catalog index.
///
/// The index is taken by explicit constructor injection and shared via
/// `Arc`; every operation is a pure read, so one service (or many clones of
/// it) can serve concurrent queries without locking.
#[derive(Debug, Clone)]
pub struct ProductSearchService {
    index: Arc<CatalogIndex>,
}

impl ProductSearchService {
    /// Create a service over a built catalog index.
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// The underlying index.
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Search the full index with the supplied filters.
    pub fn search(&self, filters: &[Filter]) -> Result<SearchResult, CatalogError> {
        evaluate(&self.index, filters)
    }

    /// Search constrained to products whose `attribute` matches one of
    /// `values`, composed with any extra filters.
    ///
    /// The attribute constraint is applied as a key/value filter prepended
    /// to the supplied filter list; it is never dropped.
    pub fn search_by(
        &self,
        attribute: &str,
        values: &[String],
        filters: &[Filter],
    ) -> Result<SearchResult, CatalogError> {
        let mut combined = Vec::with_capacity(filters.len() + 1);
        combined.push(Filter::key_value(attribute, values.to_vec()));
        combined.extend_from_slice(filters);
        evaluate(&self.index, &combined)
    }

    /// Look up a single product by exact marketplace code.
    pub fn find_by_marketplace_code(&self, code: &str) -> Result<&Product, CatalogError> {
        self.index.lookup(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, Row};
    use crate::search::SortDirection;

    fn service() -> ProductSearchService {
        let fixtures = [
            ("r1", "Apple", "red"),
            ("b1", "Banana", "blue"),
            ("r2", "Cherry", "red"),
            ("g1", "Date", "green"),
        ];
        let rows = fixtures
            .iter()
            .enumerate()
            .map(|(i, (code, name, color))| {
                Row::new(vec![
                    ("marketplaceCode".to_string(), code.to_string()),
                    ("title".to_string(), name.to_string()),
                    ("name".to_string(), name.to_string()),
                    ("color".to_string(), color.to_string()),
                ])
                .with_line(i + 2)
            })
            .collect();
        let index = CatalogBuilder::new("en_GB", "GBP").build(rows).unwrap();
        ProductSearchService::new(Arc::new(index))
    }

    #[test]
    fn test_search_delegates_to_pipeline() {
        let service = service();
        let result = service.search(&[Filter::page_size(2)]).unwrap();
        assert_eq!(result.num_results, 2);
    }

    #[test]
    fn test_search_by_applies_attribute_constraint() {
        // The reference adapter this service replaces dropped the attribute
        // constraint and behaved like an unfiltered search; the documented
        // contract is to apply it.
        let service = service();
        let result = service
            .search_by("color", &["red".to_string()], &[])
            .unwrap();
        assert_eq!(result.num_results, 2);
        assert!(result
            .hits
            .iter()
            .all(|p| p.base().attribute_value("color") == Some("red")));
    }

    #[test]
    fn test_search_by_composes_with_extra_filters() {
        let service = service();
        let result = service
            .search_by(
                "color",
                &["red".to_string()],
                &[
                    Filter::sort_by("name", SortDirection::Descending),
                    Filter::page_size(1),
                ],
            )
            .unwrap();
        assert_eq!(result.num_results, 1);
        assert_eq!(result.hits[0].title(), "Cherry");
    }

    #[test]
    fn test_find_by_marketplace_code() {
        let service = service();
        let product = service.find_by_marketplace_code("b1").unwrap();
        assert_eq!(product.title(), "Banana");

        assert!(matches!(
            service.find_by_marketplace_code("nope"),
            Err(CatalogError::ProductNotFound(_))
        ));
    }
}
