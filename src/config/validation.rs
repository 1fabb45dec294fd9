//! Configuration validation for eol-lookup.

use super::types::{ApiConfig, AppConfig, ReportSettings};

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.report.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let base = self.base_url.trim();
        if base.is_empty() {
            errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: "Base URL must not be empty".to_string(),
            });
        } else if !(base.starts_with("http://") || base.starts_with("https://")) {
            errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: format!("Base URL must start with http:// or https://, got '{base}'"),
            });
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "api.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        errors
    }
}

impl Validatable for ReportSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.marker.is_empty() {
            errors.push(ConfigError {
                field: "report.marker".to_string(),
                message: "Template marker must not be empty".to_string(),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_base_url_validation() {
        let mut api = ApiConfig::default();
        api.base_url = "endoflife.date/api".to_string();
        let errors = api.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "api.base_url");

        api.base_url = "  ".to_string();
        assert!(!api.is_valid());

        api.base_url = "http://127.0.0.1:8080/api/".to_string();
        assert!(api.is_valid());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let api = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(!api.is_valid());
    }

    #[test]
    fn test_errors_accumulate() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        config.report.marker = String::new();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].to_string(), "report.marker: Template marker must not be empty");
    }
}
