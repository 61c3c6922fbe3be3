//! Product model: simple and configurable products.

use crate::catalog::AttributeValue;
use crate::ids::{AttributeCode, MarketplaceCode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Data shared by every product kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseData {
    /// Unique identifier within the catalog.
    pub marketplace_code: MarketplaceCode,
    /// Display title.
    pub title: String,
    /// Attributes keyed by attribute code.
    pub attributes: BTreeMap<AttributeCode, AttributeValue>,
}

impl BaseData {
    /// Create base data with no attributes.
    pub fn new(marketplace_code: impl Into<MarketplaceCode>, title: impl Into<String>) -> Self {
        Self {
            marketplace_code: marketplace_code.into(),
            title: title.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Check whether an attribute is present.
    pub fn has_attribute(&self, code: &str) -> bool {
        self.attributes.contains_key(code)
    }

    /// Get an attribute by code.
    pub fn attribute(&self, code: &str) -> Option<&AttributeValue> {
        self.attributes.get(code)
    }

    /// Get an attribute's textual value by code.
    pub fn attribute_value(&self, code: &str) -> Option<&str> {
        self.attributes.get(code).map(AttributeValue::value)
    }

    /// Insert or replace an attribute.
    pub fn set_attribute(&mut self, value: AttributeValue) {
        self.attributes.insert(value.code.clone(), value);
    }
}

/// A terminal product, sellable as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimpleProduct {
    /// Shared product data.
    pub base: BaseData,
}

impl SimpleProduct {
    pub fn new(base: BaseData) -> Self {
        Self { base }
    }

    pub fn marketplace_code(&self) -> &MarketplaceCode {
        &self.base.marketplace_code
    }
}

/// A product composed of multiple sellable variants that share a base
/// identity but differ in one or more attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurableProduct {
    /// Shared product data of the configurable itself.
    pub base: BaseData,
    /// Variants in source order, owned by value (non-empty).
    pub variants: Vec<SimpleProduct>,
    /// Attribute codes whose value differs across at least two variants.
    pub variant_variation_attributes: BTreeSet<AttributeCode>,
}

impl ConfigurableProduct {
    pub fn new(base: BaseData, variants: Vec<SimpleProduct>) -> Self {
        let variant_variation_attributes = variation_attributes(&variants);
        Self {
            base,
            variants,
            variant_variation_attributes,
        }
    }

    /// Find a variant by its marketplace code.
    pub fn variant(&self, code: &str) -> Option<&SimpleProduct> {
        self.variants
            .iter()
            .find(|v| v.base.marketplace_code.as_str() == code)
    }

    /// Check whether an attribute code varies across the variants.
    pub fn has_variation_attribute(&self, code: &str) -> bool {
        self.variant_variation_attributes.contains(code)
    }
}

/// Compute the set of attribute codes with more than one distinct textual
/// value across the given variants.
fn variation_attributes(variants: &[SimpleProduct]) -> BTreeSet<AttributeCode> {
    let mut values: BTreeMap<&AttributeCode, BTreeSet<&str>> = BTreeMap::new();
    for variant in variants {
        for (code, attr) in &variant.base.attributes {
            values.entry(code).or_default().insert(attr.value());
        }
    }

    values
        .into_iter()
        .filter(|(_, distinct)| distinct.len() > 1)
        .map(|(code, _)| code.clone())
        .collect()
}

/// A product in the catalog: simple or configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Product {
    Simple(SimpleProduct),
    Configurable(ConfigurableProduct),
}

impl Product {
    /// The product's shared base data.
    pub fn base(&self) -> &BaseData {
        match self {
            Product::Simple(p) => &p.base,
            Product::Configurable(p) => &p.base,
        }
    }

    /// The product's marketplace code.
    pub fn marketplace_code(&self) -> &MarketplaceCode {
        &self.base().marketplace_code
    }

    /// The product's display title.
    pub fn title(&self) -> &str {
        &self.base().title
    }

    /// Check if this is a configurable product.
    pub fn is_configurable(&self) -> bool {
        matches!(self, Product::Configurable(_))
    }

    /// Check whether the product carries attribute `key` with a textual
    /// value in `values`, on its own base data or on any of its variants.
    pub fn matches_attribute(&self, key: &str, values: &[String]) -> bool {
        let base_match = self
            .base()
            .attribute_value(key)
            .map(|v| values.iter().any(|candidate| candidate == v))
            .unwrap_or(false);
        if base_match {
            return true;
        }

        match self {
            Product::Simple(_) => false,
            Product::Configurable(p) => p.variants.iter().any(|variant| {
                variant
                    .base
                    .attribute_value(key)
                    .map(|v| values.iter().any(|candidate| candidate == v))
                    .unwrap_or(false)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(code: &str, attrs: &[(&str, &str)]) -> SimpleProduct {
        let mut base = BaseData::new(code, code);
        for (k, v) in attrs {
            base.set_attribute(AttributeValue::new(*k, *v));
        }
        SimpleProduct::new(base)
    }

    #[test]
    fn test_base_data_attributes() {
        let mut base = BaseData::new("1000000", "Hello Kitty Candy Cup");
        base.set_attribute(AttributeValue::new("color", "red"));

        assert!(base.has_attribute("color"));
        assert_eq!(base.attribute_value("color"), Some("red"));
        assert!(!base.has_attribute("size"));
        assert_eq!(base.attribute_value("size"), None);
    }

    #[test]
    fn test_variation_attributes() {
        let variants = vec![
            simple("V-S", &[("clothingSize", "S"), ("color", "red")]),
            simple("V-M", &[("clothingSize", "M"), ("color", "red")]),
        ];
        let configurable =
            ConfigurableProduct::new(BaseData::new("CONF", "Configurable"), variants);

        assert!(configurable.has_variation_attribute("clothingSize"));
        assert!(!configurable.has_variation_attribute("color"));
    }

    #[test]
    fn test_variant_lookup() {
        let variants = vec![
            simple("V-S", &[("clothingSize", "S")]),
            simple("V-M", &[("clothingSize", "M")]),
        ];
        let configurable =
            ConfigurableProduct::new(BaseData::new("CONF", "Configurable"), variants);

        let variant = configurable.variant("V-M").unwrap();
        assert_eq!(variant.marketplace_code().as_str(), "V-M");
        assert!(configurable.variant("V-XL").is_none());
    }

    #[test]
    fn test_matches_attribute_on_base() {
        let product = Product::Simple(simple("P", &[("color", "red")]));
        assert!(product.matches_attribute("color", &["blue".to_string(), "red".to_string()]));
        assert!(!product.matches_attribute("color", &["blue".to_string()]));
        assert!(!product.matches_attribute("missing", &["red".to_string()]));
    }

    #[test]
    fn test_product_json_roundtrip() {
        let product = Product::Simple(simple("1000000", &[("color", "red")]));
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }

    #[test]
    fn test_matches_attribute_via_variant() {
        let variants = vec![
            simple("V-S", &[("clothingSize", "S")]),
            simple("V-M", &[("clothingSize", "M")]),
        ];
        let product = Product::Configurable(ConfigurableProduct::new(
            BaseData::new("CONF", "Configurable"),
            variants,
        ));

        assert!(product.matches_attribute("clothingSize", &["M".to_string()]));
        assert!(!product.matches_attribute("clothingSize", &["XL".to_string()]));
    }
}
