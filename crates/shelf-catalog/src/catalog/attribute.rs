//! Attribute value types.

use crate::ids::AttributeCode;
use serde::{Deserialize, Serialize};

/// A typed attribute value with a stable textual representation.
///
/// The raw textual form is what filtering and sorting compare against;
/// multi-valued attributes additionally carry their ordered list values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValue {
    /// Attribute code (non-empty).
    pub code: AttributeCode,
    /// Raw textual value.
    pub raw_value: String,
    /// Ordered values for multi-valued attributes.
    pub list_values: Vec<String>,
}

impl AttributeValue {
    /// Create a new single-valued attribute.
    pub fn new(code: impl Into<AttributeCode>, raw_value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            raw_value: raw_value.into(),
            list_values: Vec::new(),
        }
    }

    /// Attach ordered list values.
    pub fn with_list_values(mut self, values: Vec<String>) -> Self {
        self.list_values = values;
        self
    }

    /// The textual form used for equality and sort comparisons.
    pub fn value(&self) -> &str {
        &self.raw_value
    }

    /// Check if this attribute carries list values.
    pub fn has_list_values(&self) -> bool {
        !self.list_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_value() {
        let attr = AttributeValue::new("clothingSize", "S");
        assert_eq!(attr.value(), "S");
        assert!(!attr.has_list_values());
    }

    #[test]
    fn test_list_values() {
        let attr = AttributeValue::new("tags", "candy,cup")
            .with_list_values(vec!["candy".to_string(), "cup".to_string()]);
        assert!(attr.has_list_values());
        assert_eq!(attr.list_values.len(), 2);
        assert_eq!(attr.value(), "candy,cup");
    }
}
