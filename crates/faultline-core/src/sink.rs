//! Containers that receive normalized fields.
//!
//! The populator and extractor hand raw values to these setters without
//! checking their types. Each setter decides what it accepts; a rejection is
//! returned as `Self::Error` and propagated to the caller unchanged.

use faultline_types::{ErrorMessage, FieldError, RequestInformation, DEFAULT_SERVICE};

use crate::value::RawValue;

/// Receives fields extracted by [`crate::populate`].
pub trait ReportSink {
    /// Setter rejection.
    type Error;

    /// Store the report message.
    fn set_message(&mut self, message: &RawValue) -> Result<(), Self::Error>;

    /// Store the affected user.
    fn set_user(&mut self, user: &RawValue) -> Result<(), Self::Error>;

    /// Store the source file path.
    fn set_file_path(&mut self, file_path: &RawValue) -> Result<(), Self::Error>;

    /// Store the source line number.
    fn set_line_number(&mut self, line_number: &RawValue) -> Result<(), Self::Error>;

    /// Store the function name.
    fn set_function_name(&mut self, function_name: &RawValue) -> Result<(), Self::Error>;

    /// Store the service context. `version` may be `Undefined`.
    fn set_service_context(
        &mut self,
        service: &RawValue,
        version: &RawValue,
    ) -> Result<(), Self::Error>;
}

/// Receives fields extracted by [`crate::extract_into`].
pub trait RequestSink {
    /// Setter rejection.
    type Error;

    /// Store the request method.
    fn set_method(&mut self, method: &RawValue) -> Result<(), Self::Error>;

    /// Store the request URL.
    fn set_url(&mut self, url: &RawValue) -> Result<(), Self::Error>;

    /// Store the user agent.
    fn set_user_agent(&mut self, user_agent: &RawValue) -> Result<(), Self::Error>;

    /// Store the referrer.
    fn set_referrer(&mut self, referrer: &RawValue) -> Result<(), Self::Error>;

    /// Store the response status code.
    fn set_status_code(&mut self, status_code: &RawValue) -> Result<(), Self::Error>;

    /// Store the remote address.
    fn set_remote_address(&mut self, remote_address: &RawValue) -> Result<(), Self::Error>;
}

fn required_string(field: &str, value: &RawValue) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FieldError::type_mismatch(field, "string", value.type_name()))
}

/// `null` and `undefined` clear the field.
fn optional_string(field: &str, value: &RawValue) -> Result<Option<String>, FieldError> {
    if value.is_nullish() {
        return Ok(None);
    }
    required_string(field, value).map(Some)
}

fn optional_integer(field: &str, value: &RawValue) -> Result<Option<i64>, FieldError> {
    if value.is_nullish() {
        return Ok(None);
    }
    let n = value
        .as_f64()
        .ok_or_else(|| FieldError::type_mismatch(field, "integer", value.type_name()))?;
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(FieldError::type_mismatch(field, "integer", "number"));
    }
    if n.abs() >= i64::MAX as f64 {
        return Err(FieldError::out_of_range(field, value.to_js_string()));
    }
    Ok(Some(n as i64))
}

impl ReportSink for ErrorMessage {
    type Error = FieldError;

    fn set_message(&mut self, message: &RawValue) -> Result<(), FieldError> {
        ErrorMessage::set_message(self, required_string("message", message)?);
        Ok(())
    }

    fn set_user(&mut self, user: &RawValue) -> Result<(), FieldError> {
        ErrorMessage::set_user(self, optional_string("user", user)?);
        Ok(())
    }

    fn set_file_path(&mut self, file_path: &RawValue) -> Result<(), FieldError> {
        ErrorMessage::set_file_path(self, optional_string("filePath", file_path)?);
        Ok(())
    }

    fn set_line_number(&mut self, line_number: &RawValue) -> Result<(), FieldError> {
        ErrorMessage::set_line_number(self, optional_integer("lineNumber", line_number)?);
        Ok(())
    }

    fn set_function_name(&mut self, function_name: &RawValue) -> Result<(), FieldError> {
        ErrorMessage::set_function_name(self, optional_string("functionName", function_name)?);
        Ok(())
    }

    fn set_service_context(
        &mut self,
        service: &RawValue,
        version: &RawValue,
    ) -> Result<(), FieldError> {
        let service = optional_string("serviceContext.service", service)?
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let version = optional_string("serviceContext.version", version)?;
        ErrorMessage::set_service_context(self, service, version);
        Ok(())
    }
}

impl RequestSink for RequestInformation {
    type Error = FieldError;

    fn set_method(&mut self, method: &RawValue) -> Result<(), FieldError> {
        self.method = optional_string("method", method)?;
        Ok(())
    }

    fn set_url(&mut self, url: &RawValue) -> Result<(), FieldError> {
        self.url = optional_string("url", url)?;
        Ok(())
    }

    fn set_user_agent(&mut self, user_agent: &RawValue) -> Result<(), FieldError> {
        self.user_agent = optional_string("userAgent", user_agent)?;
        Ok(())
    }

    fn set_referrer(&mut self, referrer: &RawValue) -> Result<(), FieldError> {
        self.referrer = optional_string("referrer", referrer)?;
        Ok(())
    }

    fn set_status_code(&mut self, status_code: &RawValue) -> Result<(), FieldError> {
        self.status_code = optional_integer("statusCode", status_code)?
            .map(|code| {
                u16::try_from(code)
                    .map_err(|_| FieldError::out_of_range("statusCode", code.to_string()))
            })
            .transpose()?;
        Ok(())
    }

    fn set_remote_address(&mut self, remote_address: &RawValue) -> Result<(), FieldError> {
        self.remote_address = optional_string("remoteAddress", remote_address)?;
        Ok(())
    }
}
