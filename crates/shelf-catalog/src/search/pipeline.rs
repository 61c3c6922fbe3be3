//! Fixed-order filter evaluation over the catalog index.

use crate::catalog::{CatalogIndex, Product};
use crate::error::CatalogError;
use crate::search::{Filter, SearchResult, SortDirection};
use tracing::trace;

/// Evaluate a set of filters against the index.
///
/// The pipeline order is fixed regardless of the caller's filter ordering:
///
/// 1. All key/value filters narrow the working set (AND across filters, OR
///    across the values of one filter).
/// 2. At most one sort filter is honored (the first supplied). Descending is
///    the exact reverse of the ascending ordering; ties break by ascending
///    marketplace code. Without a sort filter, load order is preserved.
/// 3. At most one pagination filter is honored (the first supplied): the
///    ordered set is truncated to the first N entries.
pub fn evaluate(index: &CatalogIndex, filters: &[Filter]) -> Result<SearchResult, CatalogError> {
    let mut sort: Option<(&str, SortDirection)> = None;
    let mut page_size: Option<i64> = None;
    let mut key_values: Vec<(&str, &[String])> = Vec::new();

    for filter in filters {
        match filter {
            Filter::KeyValue { key, values } => {
                key_values.push((key.as_str(), values.as_slice()))
            }
            Filter::SortBy { field, direction } => {
                if sort.is_none() {
                    sort = Some((field, *direction));
                }
            }
            Filter::PaginationPageSize(size) => {
                if *size <= 0 {
                    return Err(CatalogError::InvalidFilter(format!(
                        "page size must be positive, got {size}"
                    )));
                }
                if page_size.is_none() {
                    page_size = Some(*size);
                }
            }
        }
    }

    let mut working: Vec<&Product> = index
        .iter()
        .filter(|product| {
            key_values
                .iter()
                .all(|(key, values)| product.matches_attribute(key, values))
        })
        .collect();
    trace!(matched = working.len(), "key/value filters applied");

    if let Some((field, direction)) = sort {
        working.sort_by(|a, b| {
            let a_value = a.base().attribute_value(field).unwrap_or("");
            let b_value = b.base().attribute_value(field).unwrap_or("");
            a_value
                .cmp(b_value)
                .then_with(|| a.marketplace_code().cmp(b.marketplace_code()))
        });
        // Descending must be the exact reverse of the ascending ordering,
        // not an independent comparator.
        if direction == SortDirection::Descending {
            working.reverse();
        }
    }

    if let Some(size) = page_size {
        working.truncate(size as usize);
    }

    Ok(SearchResult::new(working.into_iter().cloned().collect()))
}
