//! Batch orchestration for product lookups.
//!
//! Drives each request through map → fetch → resolve → format, one at a
//! time and in input order. Resolved rows go to the output writer; failures
//! go to the diagnostic writer as `ERROR: product,version,reason` lines.

use crate::error::Result;
use crate::input::ProductVersionRequest;
use crate::lifecycle::{map_product, resolve, HttpTransport, LifecycleClient, Resolution};
use crate::reports::{format_row, OutputRow, RowWriter};
use std::io::Write;
use std::time::Duration;

/// Exit codes for the command-line tools
pub mod exit_codes {
    /// Every row was resolved or reported with sentinels
    pub const SUCCESS: i32 = 0;
    /// At least one row failed its lookup
    pub const LOOKUP_FAILED: i32 = 1;
    /// A required resource (report template) is unusable
    pub const DEPENDENCY_MISSING: i32 = 1;
    /// Bad arguments, unreadable input, or invalid configuration
    pub const USAGE: i32 = 2;
}

/// Result of looking up a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    /// The formatted output record
    pub row: OutputRow,
    /// Whether a release record matched the requested version
    pub matched: bool,
}

/// Aggregate counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Rows whose version matched a release
    pub succeeded: usize,
    /// Rows written with sentinel values because no release matched
    pub not_found: usize,
    /// Rows that failed and were reported on the diagnostic stream
    pub failed: usize,
}

impl BatchOutcome {
    /// Number of requests processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.not_found + self.failed
    }

    /// Whether any row failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            exit_codes::LOOKUP_FAILED
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Look up one request end to end.
///
/// A version that matches no release is not an error: the row carries the
/// requested version and a `"null"` EOL.
pub fn process_request<T: HttpTransport>(
    client: &LifecycleClient<T>,
    request: &ProductVersionRequest,
) -> Result<LookupRow> {
    let slug = map_product(&request.product);
    let response = client.fetch_product(&slug)?;
    let metadata = response.feed.metadata();
    let resolution = resolve(response.feed.releases(), &request.version);

    match &resolution {
        Resolution::Found(release) => tracing::debug!(
            "{slug} {}: matched by {:?} via {:?} endpoint",
            request.version,
            release.matched_by,
            response.endpoint
        ),
        Resolution::NotFound => tracing::info!(
            "{slug}: no release matches version '{}'",
            request.version
        ),
    }

    Ok(LookupRow {
        row: format_row(request, &metadata, &resolution),
        matched: resolution.is_found(),
    })
}

/// Run every request in order, sleeping `delay` between consecutive rows.
///
/// Output and diagnostic write failures abort the batch; lookup failures
/// are counted and the run continues.
pub fn run_batch<T, W, E>(
    requests: &[ProductVersionRequest],
    client: &LifecycleClient<T>,
    delay: Duration,
    out: W,
    mut diagnostics: E,
) -> Result<BatchOutcome>
where
    T: HttpTransport,
    W: Write,
    E: Write,
{
    let mut writer = RowWriter::new(out);
    let mut outcome = BatchOutcome::default();

    for (index, request) in requests.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }

        match process_request(client, request) {
            Ok(lookup) => {
                writer.write_row(&lookup.row)?;
                if lookup.matched {
                    outcome.succeeded += 1;
                } else {
                    outcome.not_found += 1;
                }
            }
            Err(e) => {
                tracing::debug!("Line {}: {e}", request.line);
                write_failure(&mut diagnostics, request, &e.reason())?;
                outcome.failed += 1;
            }
        }
    }

    writer.into_inner()?;
    tracing::info!(
        "Processed {} rows: {} resolved, {} not found, {} failed",
        outcome.total(),
        outcome.succeeded,
        outcome.not_found,
        outcome.failed
    );
    Ok(outcome)
}

fn write_failure<E: Write>(
    diagnostics: &mut E,
    request: &ProductVersionRequest,
    reason: &str,
) -> Result<()> {
    let reason = reason.replace(['\r', '\n'], " ");
    writeln!(
        diagnostics,
        "ERROR: {},{},{reason}",
        request.product, request.version
    )?;
    diagnostics.flush()?;
    Ok(())
}
