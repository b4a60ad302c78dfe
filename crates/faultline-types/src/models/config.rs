//! Reporting configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::ConfigError;

/// When reports should be produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Report only when running in production
    #[default]
    Production,
    /// Always report
    Always,
    /// Never report
    Never,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Production => write!(f, "production"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl ReportMode {
    /// Parse from string, falling back to `Production`.
    pub fn from_string(s: &str) -> Self {
        match s {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Production,
        }
    }
}

/// Service context overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct ServiceContextConfig {
    /// Service name
    #[validate(length(min = 1))]
    #[serde(default)]
    pub service: Option<String>,
    /// Service version
    #[validate(length(min = 1))]
    #[serde(default)]
    pub version: Option<String>,
}

/// Full reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ReportingConfig {
    /// Service context overrides
    #[validate(nested)]
    #[serde(default)]
    pub service_context: ServiceContextConfig,
    /// Reporting gate
    #[serde(default)]
    pub report_mode: ReportMode,
    /// Log filter directive
    #[validate(length(min = 1))]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ReportingConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            service_context: ServiceContextConfig::default(),
            report_mode: ReportMode::default(),
            log_level: default_log_level(),
        }
    }

    /// Validate field constraints, reporting the first offending field.
    pub fn validate_config(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|errors| ConfigError::ValidationError {
            field: errors.errors().keys().next().map(ToString::to_string).unwrap_or_default(),
            message: errors.to_string(),
        })
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ReportingConfig =
            serde_json::from_str(r#"{"report_mode": "always"}"#).unwrap();

        assert_eq!(config.report_mode, ReportMode::Always);
        assert_eq!(config.log_level, "info");
        assert!(config.service_context.service.is_none());
    }

    #[test]
    fn test_empty_service_rejected() {
        let mut config = ReportingConfig::new();
        config.service_context.service = Some(String::new());

        assert!(config.validate().is_err());
        assert!(ReportingConfig::new().validate_config().is_ok());

        match config.validate_config() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "service_context");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_report_mode_from_string() {
        assert_eq!(ReportMode::from_string("never"), ReportMode::Never);
        assert_eq!(ReportMode::from_string("bogus"), ReportMode::Production);
        assert_eq!(ReportMode::Always.to_string(), "always");
    }
}
