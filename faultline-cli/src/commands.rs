use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use faultline_core::modules::config::{process_env, resolve_service_context, should_report};
use faultline_core::{extract_request_information, populate, RawValue};
use faultline_types::{ErrorMessage, ReportMode, ReportingConfig};

/// Read a JSON payload from `file`, or stdin when no file is given.
/// Blank input reads as `undefined`.
pub fn read_payload(file: Option<&Path>) -> Result<RawValue> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    if content.trim().is_empty() {
        return Ok(RawValue::Undefined);
    }
    let json: serde_json::Value =
        serde_json::from_str(&content).context("Payload is not valid JSON")?;
    Ok(RawValue::from(json))
}

fn new_report(config: &ReportingConfig) -> ErrorMessage {
    let service_context = resolve_service_context(config, process_env);
    let mut report = ErrorMessage::with_service_context(service_context);
    report.set_event_time_to_now();
    report
}

/// Unknown names fall back to `production`.
pub fn override_report_mode(config: &mut ReportingConfig, mode: &str) {
    config.report_mode = ReportMode::from_string(mode);
    debug!("Report mode overridden to {}", config.report_mode);
}

fn reporting_enabled(config: &ReportingConfig) -> bool {
    let enabled = should_report(config, process_env);
    if !enabled {
        info!("Reporting disabled (mode: {}), nothing emitted", config.report_mode);
    }
    enabled
}

pub fn populate_report(
    config: &ReportingConfig,
    file: Option<&Path>,
    service: Option<String>,
    service_version: Option<String>,
) -> Result<()> {
    let mut config = config.clone();
    if service.is_some() {
        config.service_context.service = service;
    }
    if service_version.is_some() {
        config.service_context.version = service_version;
    }

    if !reporting_enabled(&config) {
        return Ok(());
    }

    let input = read_payload(file)?;
    let mut report = new_report(&config);
    populate(&input, &mut report)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn extract_request(file: Option<&Path>) -> Result<()> {
    let input = read_payload(file)?;
    let info = extract_request_information(&input)?;

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

pub fn build_report(config: &ReportingConfig, error: &Path, request: Option<&Path>) -> Result<()> {
    if !reporting_enabled(config) {
        return Ok(());
    }

    let input = read_payload(Some(error))?;
    let mut report = new_report(config);
    populate(&input, &mut report)?;

    if let Some(request) = request {
        let info = extract_request_information(&read_payload(Some(request))?)?;
        report.consume_request_information(&info);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn show_config(config: &ReportingConfig, json: bool) -> Result<()> {
    let context = resolve_service_context(config, process_env);

    if json {
        let resolved = serde_json::json!({
            "config": config,
            "resolved_service_context": context,
            "reporting_enabled": should_report(config, process_env),
        });
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", "Reporting Configuration:".cyan().bold());
        println!("  Report mode: {}", config.report_mode);
        println!("  Reporting enabled: {}", should_report(config, process_env));
        println!("  Log level: {}", config.log_level);
        println!("  Service: {}", context.service);
        println!("  Version: {}", context.version.as_deref().unwrap_or("-"));
    }
    Ok(())
}
