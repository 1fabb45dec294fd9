//! Four-column output rows and their CSV form.

use crate::error::{EolError, Result};
use crate::input::ProductVersionRequest;
use crate::lifecycle::{ProductMetadata, Resolution};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Literal printed for values the API does not publish.
pub const NULL_SENTINEL: &str = "null";

/// One output record: `"label","version","category","eol_date"`.
///
/// Every field is always populated; missing data is [`NULL_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub label: String,
    pub version: String,
    pub category: String,
    pub eol: String,
}

/// Assemble an output row, applying the defaulting rules.
///
/// - label: product label from metadata, else the raw product name
/// - version: resolved release label, else the requested version
/// - category: metadata category, else `"null"`
/// - eol: resolved EOL value, else `"null"`
#[must_use]
pub fn format_row(
    request: &ProductVersionRequest,
    metadata: &ProductMetadata,
    resolution: &Resolution,
) -> OutputRow {
    let (version, eol) = match resolution {
        Resolution::Found(release) => (release.label.clone(), release.eol.clone()),
        Resolution::NotFound => (request.version.clone(), None),
    };

    OutputRow {
        label: metadata
            .label
            .clone()
            .unwrap_or_else(|| request.product.clone()),
        version,
        category: metadata
            .category
            .clone()
            .unwrap_or_else(|| NULL_SENTINEL.to_string()),
        eol: eol.unwrap_or_else(|| NULL_SENTINEL.to_string()),
    }
}

/// Writes rows as always-quoted, `\n`-terminated CSV lines.
///
/// Each row is flushed as soon as it is written, so an interrupted run keeps
/// every completed line.
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RowWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        Self { inner }
    }

    /// Write and flush one row.
    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.inner
            .write_record([&row.label, &row.version, &row.category, &row.eol])?;
        self.inner.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| EolError::from(e.into_error()))
    }
}

/// Serialize a single row to its CSV line, including the trailing newline.
pub fn serialize_row(row: &OutputRow) -> Result<String> {
    let mut writer = RowWriter::new(Vec::new());
    writer.write_row(row)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| EolError::report(e.to_string()))
}

/// Parse rows previously produced by [`RowWriter`].
///
/// Blank lines are ignored; each record must have exactly four fields.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<OutputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(source);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
