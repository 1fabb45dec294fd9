//! Product/version CSV input.
//!
//! Rows look like `product,version[,ignored...]`. An optional
//! `product,version` header is accepted on the first non-blank line only.

use crate::error::{EolError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One (product, version) pair as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVersionRequest {
    /// Raw product name, whitespace-trimmed
    pub product: String,
    /// Raw version string, whitespace-trimmed
    pub version: String,
    /// 1-based line number in the input
    pub line: u64,
}

impl ProductVersionRequest {
    /// Build a request without a source line (line 0).
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            line: 0,
        }
    }
}

/// Read requests from a CSV file on disk.
pub fn read_requests_from_path(path: &Path) -> Result<Vec<ProductVersionRequest>> {
    let file = File::open(path).map_err(|e| EolError::io(path, e))?;
    read_requests(file)
}

/// Read requests from any CSV source.
///
/// Fields are split on commas only; quote characters are ordinary data.
/// Blank rows and rows with an empty product or version are skipped without
/// error. Fields past the second are ignored.
pub fn read_requests<R: Read>(source: R) -> Result<Vec<ProductVersionRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut requests = Vec::new();
    let mut seen_content = false;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let product = record.get(0).unwrap_or_default();
        let version = record.get(1).unwrap_or_default();

        if !seen_content {
            seen_content = true;
            if is_header(product, version) {
                tracing::debug!("Skipping header row");
                continue;
            }
        }

        if product.is_empty() || version.is_empty() {
            tracing::debug!(
                "Skipping incomplete row at line {}",
                record.position().map_or(0, csv::Position::line)
            );
            continue;
        }

        requests.push(ProductVersionRequest {
            product: product.to_string(),
            version: version.to_string(),
            line: record.position().map_or(0, csv::Position::line),
        });
    }

    Ok(requests)
}

fn is_header(product: &str, version: &str) -> bool {
    product.eq_ignore_ascii_case("product") && version.eq_ignore_ascii_case("version")
}
