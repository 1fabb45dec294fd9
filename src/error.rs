//! Unified error types for eol-lookup.
//!
//! Library code returns [`EolError`]; the binaries wrap it in `anyhow` at the
//! edge. Per-row lookup failures are ordinary values of this type and never
//! abort a batch on their own.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for eol-lookup operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EolError {
    /// Errors talking to the lifecycle API
    #[error("API lookup failed: {context}")]
    Api {
        context: String,
        #[source]
        source: ApiErrorKind,
    },

    /// Errors reading the product/version input
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors rendering the HTML report
    #[error("Report rendering failed: {0}")]
    Report(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific API error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiErrorKind {
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Line {line}: {message}")]
    Line { line: u64, message: String },
}

/// Convenient Result type for eol-lookup operations
pub type Result<T> = std::result::Result<T, EolError>;

impl EolError {
    /// Create an API error with context
    pub fn api(context: impl Into<String>, source: ApiErrorKind) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }

    /// Short, single-line reason suitable for the per-row `ERROR:` diagnostic.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Api { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for EolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<csv::Error> for EolError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        match line {
            Some(line) => Self::input(
                "reading CSV",
                InputErrorKind::Line {
                    line,
                    message: err.to_string(),
                },
            ),
            None => Self::input("reading CSV", InputErrorKind::Csv(err.to_string())),
        }
    }
}

impl From<std::fmt::Error> for EolError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Report(err.to_string())
    }
}

impl From<serde_json::Error> for EolError {
    fn from(err: serde_json::Error) -> Self {
        Self::api(
            "JSON deserialization",
            ApiErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is prepended to any existing context, so nested calls read
/// outermost-first: `"reading products.csv: line 3"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<EolError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: EolError, new_ctx: &str) -> EolError {
    match err {
        EolError::Api {
            context: existing,
            source,
        } => EolError::Api {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EolError::Input {
            context: existing,
            source,
        } => EolError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EolError::Io {
            path,
            message,
            source,
        } => EolError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        EolError::Report(msg) => EolError::Report(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// Returns `"new: existing"`, or just `new` when nothing is there yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
