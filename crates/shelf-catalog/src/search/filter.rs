//! Search filter types.

use serde::{Deserialize, Serialize};

/// Sort direction for a sort filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Lexicographic string ordering.
    #[default]
    Ascending,
    /// The exact reverse of the ascending ordering over the same set.
    Descending,
}

impl SortDirection {
    /// Single-letter wire code, `"A"` or `"D"`.
    pub fn as_code(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "A",
            SortDirection::Descending => "D",
        }
    }

    /// Parse the single-letter wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" | "a" => Some(SortDirection::Ascending),
            "D" | "d" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// A search filter.
///
/// Filters are immutable value objects supplied per query; they carry no
/// catalog reference. The pipeline applies them in a fixed order regardless
/// of how the caller ordered them: key/value narrowing, then sort, then
/// pagination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Truncate the result to the first N entries post-sort.
    PaginationPageSize(i64),
    /// Order by the textual value of the named attribute field.
    SortBy {
        field: String,
        direction: SortDirection,
    },
    /// Keep products whose attribute `key` has a textual value in `values`.
    /// Multiple values are combined with OR; multiple key/value filters in
    /// one query are combined with AND.
    KeyValue { key: String, values: Vec<String> },
}

impl Filter {
    /// Create a pagination filter.
    pub fn page_size(size: i64) -> Self {
        Filter::PaginationPageSize(size)
    }

    /// Create a sort filter.
    pub fn sort_by(field: impl Into<String>, direction: SortDirection) -> Self {
        Filter::SortBy {
            field: field.into(),
            direction,
        }
    }

    /// Create a key/value equality filter.
    pub fn key_value(key: impl Into<String>, values: Vec<String>) -> Self {
        Filter::KeyValue {
            key: key.into(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_codes() {
        assert_eq!(SortDirection::from_code("A"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::from_code("d"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::from_code("X"), None);
        assert_eq!(SortDirection::Descending.as_code(), "D");
    }

    #[test]
    fn test_filter_constructors() {
        let filter = Filter::key_value("color", vec!["red".to_string()]);
        match filter {
            Filter::KeyValue { key, values } => {
                assert_eq!(key, "color");
                assert_eq!(values, vec!["red"]);
            }
            other => panic!("expected KeyValue, got {other:?}"),
        }
    }
}
