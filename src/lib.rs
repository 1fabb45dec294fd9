//! **End-of-life lookups against the [endoflife.date](https://endoflife.date) API.**
//!
//! `eol-lookup` turns a CSV of `product,version` pairs into normalized
//! four-column records (`label`, `version`, `category`, `eol_date`), and can
//! render those records into a static HTML report.
//!
//! ## Core Concepts & Modules
//!
//! - **[`input`]**: reads the product/version CSV, skipping blanks and an
//!   optional header.
//! - **[`lifecycle`]**: maps product names to API slugs, fetches release data
//!   from the v1 endpoint with a single legacy fallback, and resolves a
//!   requested version to a release record.
//! - **[`reports`]**: formats and serializes output rows, and renders the HTML
//!   report.
//! - **[`pipeline`]**: drives a batch of requests end to end.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use eol_lookup::{
//!     read_requests, run_batch, LifecycleClient, LifecycleClientConfig,
//! };
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let requests = read_requests("debian,13\nansible,12\n".as_bytes())?;
//!     let client = LifecycleClient::new(LifecycleClientConfig::default())?;
//!
//!     let outcome = run_batch(
//!         &requests,
//!         &client,
//!         Duration::ZERO,
//!         std::io::stdout(),
//!         std::io::stderr(),
//!     )?;
//!     println!("{} rows, {} failed", outcome.total(), outcome.failed);
//!     Ok(())
//! }
//! ```
//!
//! ### Resolving a version from a decoded response
//!
//! ```
//! use eol_lookup::{resolve, ReleaseFeed, Resolution};
//!
//! let feed = ReleaseFeed::parse(r#"[{"cycle":"3.12","eol":"2028-10-31"}]"#).unwrap();
//! match resolve(feed.releases(), "3.12") {
//!     Resolution::Found(release) => assert_eq!(release.eol.as_deref(), Some("2028-10-31")),
//!     Resolution::NotFound => unreachable!(),
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, LookupConfig, ReportConfig, Validatable};
pub use error::{ApiErrorKind, EolError, ErrorContext, InputErrorKind, Result};
pub use input::{read_requests, read_requests_from_path, ProductVersionRequest};
pub use lifecycle::{
    map_product, resolve, HttpTransport, LifecycleClient, LifecycleClientConfig, ProductMetadata,
    ProductSlug, ReleaseFeed, ReleaseRecord, Resolution,
};
pub use pipeline::{exit_codes, process_request, run_batch, BatchOutcome};
pub use reports::{format_row, serialize_row, HtmlReporter, OutputRow};
