//! Configuration file loading and discovery.
//!
//! Loads `AppConfig` from YAML with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[".eol-lookup.yaml", ".eol-lookup.yml", "eol-lookup.yaml"];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Current directory
/// 2. User config directory (~/.config/eol-lookup/)
#[must_use]
pub fn discover_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("eol-lookup")))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(PathBuf, std::io::Error),
    /// YAML parsing error
    Parse(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(path, e) => write!(f, "Failed to read config file {}: {e}", path.display()),
            Self::Parse(path, e) => {
                write!(f, "Failed to parse config file {}: {e}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(_, e) => Some(e),
            Self::Parse(_, e) => Some(e),
        }
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io(path.to_path_buf(), e))?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| ConfigFileError::Parse(path.to_path_buf(), e))
}

/// Load the explicit config file, or a discovered one, or defaults.
///
/// An explicit path must exist. A discovered file that fails to parse is
/// an error rather than silently ignored.
pub fn load_config(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    match path {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".eol-lookup.yaml");
        std::fs::write(&config_path, "api:\n  timeout_secs: 3\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("eol-lookup.yaml"), "").unwrap();
        std::fs::write(tmp.path().join(".eol-lookup.yml"), "").unwrap();

        let found = find_config_in_dir(tmp.path()).unwrap();
        assert!(found.ends_with(".eol-lookup.yml"));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(find_config_in_dir(tmp.path()).is_none());
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("eol-lookup.yaml");
        std::fs::write(
            &config_path,
            r#"
api:
  base_url: "http://localhost:9000/api"
lookup:
  rate_limit_secs: 2
report:
  title: "Fleet EOL"
"#,
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.lookup.rate_limit_secs, 2);
        assert_eq!(config.report.title, "Fleet EOL");
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("eol-lookup.yaml");
        std::fs::write(&config_path, "\n").unwrap();
        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/eol-lookup.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("eol-lookup.yaml");
        std::fs::write(&config_path, "api:\n  timeout_secs: soon\n").unwrap();

        let err = load_config_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(..)));
        assert!(err.to_string().contains("eol-lookup.yaml"));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "lookup:\n  input: fleet.csv\n").unwrap();

        let (config, loaded_from) = load_config(Some(&config_path)).unwrap();
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.lookup.input, PathBuf::from("fleet.csv"));
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(Some(&tmp.path().join("missing.yaml"))).is_err());
    }
}
