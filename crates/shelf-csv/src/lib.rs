//! CSV catalog source for Shelfsearch.
//!
//! Reads a product CSV (header row defining attribute columns, one row per
//! simple product, configurable parent or variant) and hands the rows to
//! [`CatalogBuilder`] to produce an immutable [`CatalogIndex`].
//!
//! The CSV is read entirely at build time; queries never touch the file
//! again.

use shelf_catalog::catalog::{CatalogBuilder, CatalogIndex, Row};
use shelf_catalog::CatalogError;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while importing a product CSV.
#[derive(Error, Debug)]
pub enum CsvImportError {
    /// The file could not be read or parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The rows could not be turned into a catalog.
    #[error("Catalog build error: {0}")]
    Build(#[from] CatalogError),
}

/// Load a catalog from a product CSV file for a locale/currency pair.
pub fn load_catalog(
    path: impl AsRef<Path>,
    locale: &str,
    currency: &str,
) -> Result<CatalogIndex, CsvImportError> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    let rows = rows_from_reader(reader)?;
    info!(path = %path.display(), rows = rows.len(), "product CSV read");

    let index = CatalogBuilder::new(locale, currency).build(rows)?;
    Ok(index)
}

/// Load a catalog from any CSV reader (first record is the header).
pub fn load_catalog_from_reader<R: io::Read>(
    reader: R,
    locale: &str,
    currency: &str,
) -> Result<CatalogIndex, CsvImportError> {
    let rows = rows_from_reader(csv::Reader::from_reader(reader))?;
    let index = CatalogBuilder::new(locale, currency).build(rows)?;
    Ok(index)
}

fn rows_from_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Row>, CsvImportError> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 2);
        let columns = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(Row::new(columns).with_line(line));
    }
    Ok(rows)
}
