//! Conversions into `RawValue`.

use std::error::Error;
use std::fmt::Write as _;

use super::{Fields, RawValue};
use crate::trace::build_trace;

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(map.into_iter().collect()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Fields> for RawValue {
    fn from(fields: Fields) -> Self {
        Self::Object(fields)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl RawValue {
    /// Wrap a Rust error as an error-like instance.
    ///
    /// `message` holds the error's display text; `stack` holds the display
    /// text plus its `source()` chain, followed by the capturing call stack.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let message = err.to_string();
        let headline = format!("Error: {message}");

        let mut rendered = headline.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(rendered, "\nCaused by: {cause}");
            source = cause.source();
        }

        let fields =
            Fields::new().with("message", message).with("stack", build_trace(&rendered));
        Self::instance("Error", Some(headline), fields)
    }
}
