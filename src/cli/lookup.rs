//! Lookup command handler.
//!
//! Reads the product/version CSV and runs the batch against the lifecycle
//! API, streaming rows to stdout and failures to stderr.

use super::UsageError;
use crate::config::LookupConfig;
use crate::input::read_requests_from_path;
use crate::lifecycle::LifecycleClient;
use crate::pipeline::run_batch;
use anyhow::{Context, Result};

/// Run the lookup command, returning the process exit code.
pub fn run_lookup(config: &LookupConfig) -> Result<i32> {
    let requests = read_requests_from_path(&config.input).map_err(|e| {
        UsageError(format!(
            "cannot read input {}: {e}",
            config.input.display()
        ))
    })?;
    tracing::debug!(
        "Read {} requests from {}",
        requests.len(),
        config.input.display()
    );

    let client =
        LifecycleClient::new(config.client.clone()).context("Failed to build HTTP client")?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = run_batch(
        &requests,
        &client,
        config.rate_limit,
        stdout.lock(),
        stderr.lock(),
    )
    .context("Failed to write lookup results")?;

    Ok(outcome.exit_code())
}
