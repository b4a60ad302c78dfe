//! Request information extraction from caller-supplied records.

use faultline_types::{FieldError, RequestInformation};
use tracing::debug;

use crate::sink::RequestSink;
use crate::value::RawValue;

/// Extract request information into a fresh [`RequestInformation`].
///
/// See [`extract_into`] for the rules.
pub fn extract_request_information(input: &RawValue) -> Result<RequestInformation, FieldError> {
    extract_into(input)
}

/// Extract the whitelisted request fields from `input` into a fresh sink.
///
/// Anything that is not a plain record (string form other than the generic
/// object tag, arrays, functions) yields an empty sink. Otherwise `method`,
/// `url`, `userAgent`, `referrer`, `statusCode` and `remoteAddress` are
/// copied when not undefined. Only the sink's setters can fail.
pub fn extract_into<R: RequestSink + Default>(input: &RawValue) -> Result<R, R::Error> {
    let mut info = R::default();

    if !input.has_object_tag() || matches!(input, RawValue::Array(_) | RawValue::Function(_)) {
        debug!(input_type = input.type_name(), "Skipping request extraction: not a record");
        return Ok(info);
    }

    let method = input.get("method");
    if !method.is_undefined() {
        info.set_method(method)?;
    }

    let url = input.get("url");
    if !url.is_undefined() {
        info.set_url(url)?;
    }

    let user_agent = input.get("userAgent");
    if !user_agent.is_undefined() {
        info.set_user_agent(user_agent)?;
    }

    let referrer = input.get("referrer");
    if !referrer.is_undefined() {
        info.set_referrer(referrer)?;
    }

    let status_code = input.get("statusCode");
    if !status_code.is_undefined() {
        info.set_status_code(status_code)?;
    }

    let remote_address = input.get("remoteAddress");
    if !remote_address.is_undefined() {
        info.set_remote_address(remote_address)?;
    }

    Ok(info)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::value::Fields;
    use serde_json::json;

    #[test]
    fn test_zero_status_code_kept() {
        let input = RawValue::from(json!({"method": "GET", "url": "/x", "statusCode": 0}));
        let info = extract_request_information(&input).unwrap();

        assert_eq!(
            info,
            RequestInformation {
                method: Some("GET".to_string()),
                url: Some("/x".to_string()),
                status_code: Some(0),
                ..RequestInformation::default()
            }
        );
    }

    #[test]
    fn test_all_fields() {
        let input = RawValue::from(json!({
            "method": "POST",
            "url": "/api/orders",
            "userAgent": "curl/8.0",
            "referrer": "",
            "statusCode": 502,
            "remoteAddress": "192.0.2.7",
            "body": "not whitelisted"
        }));
        let info = extract_request_information(&input).unwrap();

        assert_eq!(info.method.as_deref(), Some("POST"));
        assert_eq!(info.url.as_deref(), Some("/api/orders"));
        assert_eq!(info.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(info.referrer.as_deref(), Some(""));
        assert_eq!(info.status_code, Some(502));
        assert_eq!(info.remote_address.as_deref(), Some("192.0.2.7"));
    }

    #[test]
    fn test_non_records_yield_empty_container() {
        let inputs = [
            RawValue::Null,
            RawValue::Undefined,
            RawValue::from("GET /x"),
            RawValue::from(200_i64),
            RawValue::from(json!([{"method": "GET"}])),
            RawValue::function("handler"),
            RawValue::instance(
                "Request",
                Some("GET /x".to_string()),
                Fields::new().with("method", "GET"),
            ),
        ];

        for input in &inputs {
            let info = extract_request_information(input).unwrap();
            assert!(info.is_empty(), "{input:?}");
        }
    }

    #[test]
    fn test_instance_with_object_tag_is_extracted() {
        let input =
            RawValue::instance("IncomingMessage", None, Fields::new().with("method", "PUT"));
        let info = extract_request_information(&input).unwrap();
        assert_eq!(info.method.as_deref(), Some("PUT"));
    }

    #[test]
    fn test_setter_rejection_propagates() {
        let input = RawValue::from(json!({"method": "GET", "statusCode": "500"}));
        let err = extract_request_information(&input).unwrap_err();
        assert_eq!(err, FieldError::type_mismatch("statusCode", "integer", "string"));
    }
}
