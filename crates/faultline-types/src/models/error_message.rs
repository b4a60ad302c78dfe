//! Error report container and its wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::request_info::RequestInformation;

/// Service name used when neither configuration nor environment names one.
pub const DEFAULT_SERVICE: &str = "rust";

/// Identifies the service a report originated from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceContext {
    /// Service name
    pub service: String,
    /// Deployed version of the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ServiceContext {
    /// Create a service context.
    pub fn new(service: impl Into<String>, version: Option<String>) -> Self {
        Self { service: service.into(), version }
    }
}

impl Default for ServiceContext {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE, None)
    }
}

/// HTTP request details attached to a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequestContext {
    /// Request method (GET, POST, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Requester user agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Requester referrer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Status code returned for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status_code: Option<u16>,
    /// Requester address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
}

impl HttpRequestContext {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Source location the report points at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocation {
    /// Path of the file where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Line within `file_path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<i64>,
    /// Function the error occurred in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

impl ReportLocation {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Contextual data surrounding a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    /// Request being served when the error occurred
    #[serde(default, skip_serializing_if = "HttpRequestContext::is_empty")]
    pub http_request: HttpRequestContext,
    /// User affected by the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Where the error occurred
    #[serde(default, skip_serializing_if = "ReportLocation::is_empty")]
    pub report_location: ReportLocation,
}

/// A normalized error report, ready for hand-off to a transport.
///
/// Setters here are typed. Raw, untyped input is validated by the
/// `ReportSink` implementation in `faultline-core` before it reaches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    /// Time the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,
    /// Originating service
    pub service_context: ServiceContext,
    /// Stack trace or message text
    pub message: String,
    /// Surrounding context
    #[serde(default)]
    pub context: ErrorContext,
}

impl ErrorMessage {
    /// Create an empty report with the default service context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty report for the given service.
    pub fn with_service_context(service_context: ServiceContext) -> Self {
        Self { service_context, ..Self::default() }
    }

    /// Stamp the report with the current time.
    pub fn set_event_time_to_now(&mut self) -> &mut Self {
        self.event_time = Some(Utc::now());
        self
    }

    /// Set the report message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Set or clear the affected user.
    pub fn set_user(&mut self, user: Option<String>) -> &mut Self {
        self.context.user = user;
        self
    }

    /// Set or clear the file path.
    pub fn set_file_path(&mut self, file_path: Option<String>) -> &mut Self {
        self.context.report_location.file_path = file_path;
        self
    }

    /// Set or clear the line number.
    pub fn set_line_number(&mut self, line_number: Option<i64>) -> &mut Self {
        self.context.report_location.line_number = line_number;
        self
    }

    /// Set or clear the function name.
    pub fn set_function_name(&mut self, function_name: Option<String>) -> &mut Self {
        self.context.report_location.function_name = function_name;
        self
    }

    /// Replace the service context.
    pub fn set_service_context(
        &mut self,
        service: impl Into<String>,
        version: Option<String>,
    ) -> &mut Self {
        self.service_context = ServiceContext::new(service, version);
        self
    }

    /// Copy extracted request information into the HTTP request context.
    ///
    /// Only fields set on `info` are written; existing values survive.
    pub fn consume_request_information(&mut self, info: &RequestInformation) -> &mut Self {
        let http = &mut self.context.http_request;
        if let Some(method) = &info.method {
            http.method = Some(method.clone());
        }
        if let Some(url) = &info.url {
            http.url = Some(url.clone());
        }
        if let Some(user_agent) = &info.user_agent {
            http.user_agent = Some(user_agent.clone());
        }
        if let Some(referrer) = &info.referrer {
            http.referrer = Some(referrer.clone());
        }
        if let Some(status_code) = info.status_code {
            http.response_status_code = Some(status_code);
        }
        if let Some(remote_address) = &info.remote_address {
            http.remote_ip = Some(remote_address.clone());
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_context() {
        let report = ErrorMessage::new();
        assert_eq!(report.service_context.service, DEFAULT_SERVICE);
        assert!(report.service_context.version.is_none());
        assert!(report.message.is_empty());
    }

    #[test]
    fn test_wire_shape_omits_unset_fields() {
        let mut report = ErrorMessage::new();
        report.set_message("boom").set_line_number(Some(0));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["message"], "boom");
        assert_eq!(json["serviceContext"]["service"], DEFAULT_SERVICE);
        assert!(json["serviceContext"].get("version").is_none());
        assert!(json.get("eventTime").is_none());
        assert_eq!(json["context"]["reportLocation"]["lineNumber"], 0);
        assert!(json["context"].get("httpRequest").is_none());
        assert!(json["context"].get("user").is_none());
    }

    #[test]
    fn test_consume_request_information() {
        let info = RequestInformation {
            method: Some("GET".to_string()),
            status_code: Some(0),
            remote_address: Some("10.0.0.1".to_string()),
            ..RequestInformation::default()
        };

        let mut report = ErrorMessage::new();
        report.context.http_request.url = Some("/kept".to_string());
        report.consume_request_information(&info);

        let http = &report.context.http_request;
        assert_eq!(http.method.as_deref(), Some("GET"));
        assert_eq!(http.url.as_deref(), Some("/kept"));
        assert_eq!(http.response_status_code, Some(0));
        assert_eq!(http.remote_ip.as_deref(), Some("10.0.0.1"));
        assert!(http.user_agent.is_none());
    }

    #[test]
    fn test_event_time_stamped() {
        let mut report = ErrorMessage::new();
        report.set_event_time_to_now();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["eventTime"].is_string());
    }
}
