//! CLI command handlers.
//!
//! Testable handlers invoked by the `eol-lookup` and `eol-report` binaries,
//! plus the pieces both binaries share: logging setup, config loading, and
//! the mapping from errors to exit codes.

mod lookup;
mod report;

pub use lookup::run_lookup;
pub use report::run_report;

use crate::config::{load_config, AppConfig, Validatable};
use crate::pipeline::exit_codes;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A problem with how the tool was invoked: bad input path, bad config.
///
/// Binaries exit with [`exit_codes::USAGE`] for this error and
/// [`exit_codes::LOOKUP_FAILED`] for anything else.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Exit code for an error that escaped a handler.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        exit_codes::USAGE
    } else {
        exit_codes::DEPENDENCY_MISSING
    }
}

/// Initialize stderr logging.
///
/// `RUST_LOG` wins when set; otherwise `warn`, `debug` with `verbose`, or
/// `error` with `quiet`.
pub fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load the configuration file, apply CLI overrides, then validate.
pub fn load_app_config<F>(
    explicit_path: Option<&Path>,
    overrides: F,
) -> Result<AppConfig, UsageError>
where
    F: FnOnce(&mut AppConfig),
{
    let (mut config, loaded_from) =
        load_config(explicit_path).map_err(|e| UsageError(e.to_string()))?;
    overrides(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        let source = loaded_from.map_or_else(
            || "configuration".to_string(),
            |p| format!("configuration in {}", p.display()),
        );
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(UsageError(format!(
            "invalid {source}: {}",
            details.join("; ")
        )));
    }
    Ok(config)
}
