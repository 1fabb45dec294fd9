//! Output generation.
//!
//! - [`row`]: the four-column CSV record emitted per lookup
//! - [`html`]: HTML report rendered from those records
//!
//! # Security
//!
//! The `escape` module must be used for every value embedded in HTML.

pub mod escape;
mod html;
mod row;

pub use html::{is_past_eol, HtmlReporter, DEFAULT_MARKER, DEFAULT_TITLE};
pub use row::{format_row, read_rows, serialize_row, OutputRow, RowWriter, NULL_SENTINEL};
