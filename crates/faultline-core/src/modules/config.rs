//! Reporting configuration loading and resolution.

use std::fs;
use std::path::Path;

use faultline_types::{ConfigError, ReportMode, ReportingConfig, ServiceContext, DEFAULT_SERVICE};
use tracing::{debug, info};

/// Environment variable that marks a production deployment.
pub const ENVIRONMENT_VAR: &str = "FAULTLINE_ENV";

/// Service name variables, checked in order.
const SERVICE_VARS: [&str; 3] = ["GAE_SERVICE", "GAE_MODULE_NAME", "K_SERVICE"];

/// Service version variables, checked in order.
const VERSION_VARS: [&str; 3] = ["GAE_VERSION", "GAE_MODULE_VERSION", "K_REVISION"];

/// Load configuration from `path`, or defaults when no path is given.
///
/// An explicit path that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<ReportingConfig, ConfigError> {
    let Some(path) = path else {
        debug!("No config path given, using defaults");
        return Ok(ReportingConfig::new());
    };

    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.display().to_string() });
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&e))?;
    let config: ReportingConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    config.validate_config()?;

    info!(path = %path.display(), mode = %config.report_mode, "Loaded reporting config");
    Ok(config)
}

/// Read a variable from the process environment, treating empty as unset.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolve the service context.
///
/// Platform variables come first; configured values override them; a
/// missing service name falls back to [`DEFAULT_SERVICE`].
pub fn resolve_service_context<F>(config: &ReportingConfig, env: F) -> ServiceContext
where
    F: Fn(&str) -> Option<String>,
{
    let mut service = SERVICE_VARS.iter().find_map(|&key| env(key));
    let mut version = None;
    if service.is_some() {
        version = VERSION_VARS.iter().find_map(|&key| env(key));
    }

    let configured = &config.service_context;
    if let Some(configured_service) = &configured.service {
        service = Some(configured_service.clone());
    }
    if let Some(configured_version) = &configured.version {
        version = Some(configured_version.clone());
    }

    let service = service.unwrap_or_else(|| DEFAULT_SERVICE.to_string());
    let context = ServiceContext::new(service, version);
    debug!(service = %context.service, version = ?context.version, "Resolved service context");
    context
}

/// Whether reports should be produced under the configured mode.
pub fn should_report<F>(config: &ReportingConfig, env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match config.report_mode {
        ReportMode::Always => true,
        ReportMode::Never => false,
        ReportMode::Production => env(ENVIRONMENT_VAR).as_deref() == Some("production"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), ReportingConfig::new());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"service_context": {{"service": "api"}}, "report_mode": "always"}}"#)
            .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.service_context.service.as_deref(), Some("api"));
        assert_eq!(config.report_mode, ReportMode::Always);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_and_validation_errors() {
        let mut bad_json = tempfile::NamedTempFile::new().unwrap();
        write!(bad_json, "{{not json").unwrap();
        assert!(matches!(
            load_config(Some(bad_json.path())).unwrap_err(),
            ConfigError::ParseError { .. }
        ));

        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        write!(invalid, r#"{{"log_level": ""}}"#).unwrap();
        match load_config(Some(invalid.path())).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "log_level"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_service_context_from_env() {
        let env = env_of(&[("K_SERVICE", "frontend"), ("K_REVISION", "frontend-0042")]);
        let context = resolve_service_context(&ReportingConfig::new(), env);

        assert_eq!(context.service, "frontend");
        assert_eq!(context.version.as_deref(), Some("frontend-0042"));
    }

    #[test]
    fn test_env_precedence_order() {
        let env = env_of(&[("GAE_SERVICE", "default"), ("K_SERVICE", "frontend")]);
        let context = resolve_service_context(&ReportingConfig::new(), env);
        assert_eq!(context.service, "default");
    }

    #[test]
    fn test_version_ignored_without_service_var() {
        let env = env_of(&[("GAE_VERSION", "20240101")]);
        let context = resolve_service_context(&ReportingConfig::new(), env);

        assert_eq!(context.service, DEFAULT_SERVICE);
        assert!(context.version.is_none());
    }

    #[test]
    fn test_config_overrides_env() {
        let mut config = ReportingConfig::new();
        config.service_context.service = Some("billing".to_string());

        let env = env_of(&[("GAE_SERVICE", "default"), ("GAE_VERSION", "7")]);
        let context = resolve_service_context(&config, env);

        assert_eq!(context.service, "billing");
        assert_eq!(context.version.as_deref(), Some("7"));
    }

    #[test]
    fn test_report_gate() {
        let mut config = ReportingConfig::new();
        assert!(!should_report(&config, env_of(&[])));
        assert!(should_report(&config, env_of(&[(ENVIRONMENT_VAR, "production")])));

        config.report_mode = ReportMode::Never;
        assert!(!should_report(&config, env_of(&[(ENVIRONMENT_VAR, "production")])));

        config.report_mode = ReportMode::Always;
        assert!(should_report(&config, env_of(&[])));
    }
}
