//! Configuration types for eol-lookup.

use crate::lifecycle::{client::default_user_agent, LifecycleClientConfig, DEFAULT_BASE_URL};
use crate::reports::{DEFAULT_MARKER, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default input file when none is given on the command line.
pub const DEFAULT_INPUT: &str = "products.csv";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// File-level configuration
// ============================================================================

/// Everything that can be set in `.eol-lookup.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lifecycle API settings
    pub api: ApiConfig,
    /// Lookup run settings
    pub lookup: LookupSettings,
    /// HTML report settings
    pub report: ReportSettings,
}

/// Lifecycle API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Client configuration for these settings.
    #[must_use]
    pub fn client_config(&self) -> LifecycleClientConfig {
        LifecycleClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Lookup run settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Fixed delay between products, in seconds
    pub rate_limit_secs: u64,
    /// Input CSV used when no file argument is given
    pub input: PathBuf,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            rate_limit_secs: 0,
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

/// HTML report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Custom template file; the built-in template is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Placeholder in the template replaced by table rows
    pub marker: String,
    /// Title used by the built-in template
    pub title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            template: None,
            marker: DEFAULT_MARKER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

// ============================================================================
// Command configurations
// ============================================================================

/// Resolved configuration for one `eol-lookup` run.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Input CSV path
    pub input: PathBuf,
    /// Delay slept between products
    pub rate_limit: Duration,
    /// Lifecycle API client settings
    pub client: LifecycleClientConfig,
}

impl LookupConfig {
    /// Build a run configuration from file settings.
    #[must_use]
    pub fn from_app(app: &AppConfig) -> Self {
        Self {
            input: app.lookup.input.clone(),
            rate_limit: Duration::from_secs(app.lookup.rate_limit_secs),
            client: app.api.client_config(),
        }
    }
}

/// Resolved configuration for one `eol-report` run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// CSV input; stdin when `None`
    pub input: Option<PathBuf>,
    /// HTML output; stdout when `None`
    pub output: Option<PathBuf>,
    /// Template and marker settings
    pub report: ReportSettings,
}
