//! The immutable catalog index.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Where a marketplace code points inside the index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
enum Slot {
    /// A top-level product, by position in load order.
    Top(usize),
    /// A variant of a configurable, stored as a standalone simple view.
    Variant(usize),
}

/// An immutable, built-once mapping from marketplace code to product.
///
/// Built by [`CatalogBuilder`](crate::catalog::CatalogBuilder); read-only for
/// the lifetime of the process. Enumeration order is the build-time insertion
/// order, which keeps pagination and sort tie-breaking deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogIndex {
    locale: String,
    currency: String,
    /// Top-level products in load order.
    products: Vec<Product>,
    /// Simple-product views of configurable variants, so that variant codes
    /// resolve through `lookup` like any other code.
    variant_views: Vec<Product>,
    by_code: HashMap<String, Slot>,
}

impl CatalogIndex {
    pub(crate) fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
            products: Vec::new(),
            variant_views: Vec::new(),
            by_code: HashMap::new(),
        }
    }

    /// Insert a top-level product, indexing its variants as well.
    pub(crate) fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if let Product::Configurable(configurable) = &product {
            for variant in &configurable.variants {
                let view = Product::Simple(variant.clone());
                let slot = Slot::Variant(self.variant_views.len());
                self.claim_code(variant.marketplace_code().as_str(), slot)?;
                self.variant_views.push(view);
            }
        }

        let slot = Slot::Top(self.products.len());
        self.claim_code(product.marketplace_code().as_str(), slot)?;
        self.products.push(product);
        Ok(())
    }

    fn claim_code(&mut self, code: &str, slot: Slot) -> Result<(), CatalogError> {
        match self.by_code.entry(code.to_string()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateMarketplaceCode(code.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
                Ok(())
            }
        }
    }

    /// Look up a product by exact marketplace code.
    ///
    /// Variant codes resolve to the variant itself, viewed as a simple
    /// product.
    pub fn lookup(&self, code: &str) -> Result<&Product, CatalogError> {
        match self.by_code.get(code) {
            Some(Slot::Top(i)) => Ok(&self.products[*i]),
            Some(Slot::Variant(i)) => Ok(&self.variant_views[*i]),
            None => Err(CatalogError::ProductNotFound(code.to_string())),
        }
    }

    /// All top-level products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over top-level products in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of top-level products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The locale the catalog was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The currency the catalog was built for.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttributeValue, BaseData, ConfigurableProduct, SimpleProduct};

    fn simple(code: &str) -> Product {
        Product::Simple(SimpleProduct::new(BaseData::new(code, code)))
    }

    fn configurable(code: &str, variant_codes: &[&str]) -> Product {
        let variants = variant_codes
            .iter()
            .map(|c| {
                let mut base = BaseData::new(*c, *c);
                base.set_attribute(AttributeValue::new("clothingSize", *c));
                SimpleProduct::new(base)
            })
            .collect();
        Product::Configurable(ConfigurableProduct::new(BaseData::new(code, code), variants))
    }

    #[test]
    fn test_lookup_exact_match() {
        let mut index = CatalogIndex::new("en_GB", "GBP");
        index.insert(simple("1000000")).unwrap();

        let product = index.lookup("1000000").unwrap();
        assert_eq!(product.marketplace_code().as_str(), "1000000");

        // No prefix matching.
        assert!(matches!(
            index.lookup("1000"),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_variant_codes_resolve() {
        let mut index = CatalogIndex::new("en_GB", "GBP");
        index
            .insert(configurable("CONF-1", &["V-S", "V-M"]))
            .unwrap();

        let variant = index.lookup("V-M").unwrap();
        assert_eq!(variant.marketplace_code().as_str(), "V-M");
        assert!(!variant.is_configurable());

        // Variants are not enumerated as top-level products.
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut index = CatalogIndex::new("en_GB", "GBP");
        index.insert(simple("1000000")).unwrap();

        let err = index.insert(simple("1000000")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateMarketplaceCode(code) if code == "1000000"));
    }

    #[test]
    fn test_duplicate_variant_code_rejected() {
        let mut index = CatalogIndex::new("en_GB", "GBP");
        index.insert(simple("V-S")).unwrap();

        let err = index.insert(configurable("CONF-1", &["V-S"])).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateMarketplaceCode(code) if code == "V-S"));
    }

    #[test]
    fn test_enumeration_is_load_order() {
        let mut index = CatalogIndex::new("en_GB", "GBP");
        for code in ["b", "a", "c"] {
            index.insert(simple(code)).unwrap();
        }

        let order: Vec<&str> = index.iter().map(|p| p.marketplace_code().as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);

        // Stable across repeated enumeration.
        let again: Vec<&str> = index.iter().map(|p| p.marketplace_code().as_str()).collect();
        assert_eq!(order, again);
    }
}
