//! Configuration for eol-lookup.
//!
//! Settings are layered: built-in defaults, then a YAML file, then CLI
//! flags. The file is discovered automatically unless `--config` names one.
//!
//! # Configuration File
//!
//! Place a `.eol-lookup.yaml` file in the working directory or
//! `~/.config/eol-lookup/`:
//!
//! ```yaml
//! api:
//!   base_url: https://endoflife.date/api
//!   timeout_secs: 10
//! lookup:
//!   rate_limit_secs: 1
//!   input: products.csv
//! report:
//!   title: Fleet EOL
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    ApiConfig, AppConfig, LookupConfig, LookupSettings, ReportConfig, ReportSettings,
    DEFAULT_INPUT, DEFAULT_TIMEOUT_SECS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, load_config, load_config_file, ConfigFileError};
