//! Request information container.

use serde::{Deserialize, Serialize};

/// HTTP request/response details extracted from a caller-supplied record.
///
/// Every field is optional; an absent source field leaves it `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestInformation {
    /// Request method
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
    /// Response status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Requester address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<String>,
}

impl RequestInformation {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
