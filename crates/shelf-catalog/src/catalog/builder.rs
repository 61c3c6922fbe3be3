//! Catalog builder: tabular rows in, immutable index out.

use crate::catalog::{
    AttributeValue, BaseData, CatalogIndex, ConfigurableProduct, Product, SimpleProduct,
};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Column carrying the marketplace code.
pub const MARKETPLACE_CODE_COLUMN: &str = "marketplaceCode";

/// Default parent-linkage column.
pub const DEFAULT_PARENT_COLUMN: &str = "parent";

/// Default product-type column.
pub const DEFAULT_TYPE_COLUMN: &str = "productType";

/// Separator for multi-valued attribute cells.
const LIST_SEPARATOR: char = '|';

/// A parsed source row: ordered column/value pairs plus the source line
/// for error reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, String)>,
    line: usize,
}

impl Row {
    /// Create a row from ordered column/value pairs.
    pub fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns, line: 0 }
    }

    /// Set the source line number (1-indexed).
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Source line number, 0 if unknown.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over column/value pairs in source order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Builds a [`CatalogIndex`] from parsed tabular rows.
///
/// Rows with no parent reference become simple products; rows sharing a
/// parent reference become the variant set of the configurable whose own row
/// carries that marketplace code. The source rows are not retained.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    locale: String,
    currency: String,
    parent_column: String,
    type_column: String,
}

impl CatalogBuilder {
    /// Create a builder for the given locale/currency pair.
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
            parent_column: DEFAULT_PARENT_COLUMN.to_string(),
            type_column: DEFAULT_TYPE_COLUMN.to_string(),
        }
    }

    /// Override the parent-linkage column name.
    pub fn with_parent_column(mut self, column: impl Into<String>) -> Self {
        self.parent_column = column.into();
        self
    }

    /// Override the product-type column name.
    pub fn with_type_column(mut self, column: impl Into<String>) -> Self {
        self.type_column = column.into();
        self
    }

    /// Build the catalog index.
    ///
    /// Fails on duplicate marketplace codes, configurables without variants,
    /// and rows that cannot be turned into a product. A failed build leaves
    /// no partial catalog behind.
    pub fn build(&self, rows: Vec<Row>) -> Result<CatalogIndex, CatalogError> {
        let mut top_level: Vec<Row> = Vec::new();
        let mut variant_groups: HashMap<String, Vec<(usize, SimpleProduct)>> = HashMap::new();

        for row in rows {
            let parent = row
                .get(&self.parent_column)
                .map(str::trim)
                .filter(|p| !p.is_empty());
            match parent {
                Some(parent_code) => {
                    let variant = SimpleProduct::new(self.base_data(&row)?);
                    variant_groups
                        .entry(parent_code.to_string())
                        .or_default()
                        .push((row.line(), variant));
                }
                None => top_level.push(row),
            }
        }

        let mut index = CatalogIndex::new(&self.locale, &self.currency);
        for row in &top_level {
            let base = self.base_data(row)?;
            let code = base.marketplace_code.as_str().to_string();
            let is_configurable = row
                .get(&self.type_column)
                .map(|t| t.trim().eq_ignore_ascii_case("configurable"))
                .unwrap_or(false);

            let product = match variant_groups.remove(&code) {
                Some(group) => {
                    let variants = group.into_iter().map(|(_, v)| v).collect();
                    Product::Configurable(ConfigurableProduct::new(base, variants))
                }
                None if is_configurable => {
                    return Err(CatalogError::EmptyConfigurable(code));
                }
                None => Product::Simple(SimpleProduct::new(base)),
            };
            index.insert(product)?;
        }

        // Variant rows whose parent never appeared as a row of its own.
        if let Some((parent, group)) = variant_groups.into_iter().min_by_key(|(p, _)| p.clone()) {
            let line = group.iter().map(|(line, _)| *line).min().unwrap_or(0);
            return Err(CatalogError::malformed(
                line,
                format!("unknown parent marketplace code: {parent}"),
            ));
        }

        debug!(
            products = index.len(),
            locale = %self.locale,
            currency = %self.currency,
            "catalog index built"
        );
        Ok(index)
    }

    /// Turn a row into base data, resolving locale/currency column suffixes.
    ///
    /// A column `title-en_GB` is kept as `title` when building for `en_GB`;
    /// a column `price-GBP` is kept as `price` when building for `GBP`.
    /// Localized columns win over plain ones regardless of column order.
    fn base_data(&self, row: &Row) -> Result<BaseData, CatalogError> {
        let code = row
            .get(MARKETPLACE_CODE_COLUMN)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CatalogError::malformed(row.line(), "missing marketplace code"))?;

        let locale_suffix = format!("-{}", self.locale);
        let currency_suffix = format!("-{}", self.currency);

        let mut base = BaseData::new(code, "");
        for (column, value) in row.columns() {
            if column == MARKETPLACE_CODE_COLUMN
                || column == self.parent_column
                || column == self.type_column
                || value.is_empty()
            {
                continue;
            }

            let resolved = column
                .strip_suffix(&locale_suffix)
                .or_else(|| column.strip_suffix(&currency_suffix))
                .unwrap_or(column);
            if resolved.is_empty() {
                continue;
            }

            let localized = resolved.len() != column.len();
            if localized || !base.has_attribute(resolved) {
                base.set_attribute(attribute_from_cell(resolved, value));
            }
        }

        if let Some(title) = base.attributes.remove("title") {
            base.title = title.raw_value;
        }
        Ok(base)
    }
}

/// Build an attribute from a cell, splitting multi-valued cells on `|`.
fn attribute_from_cell(code: &str, value: &str) -> AttributeValue {
    let attr = AttributeValue::new(code, value);
    if value.contains(LIST_SEPARATOR) {
        let list = value
            .split(LIST_SEPARATOR)
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();
        attr.with_list_values(list)
    } else {
        attr
    }
}
