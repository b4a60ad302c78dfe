//! Truthiness and default string conversion.

use super::{Function, RawValue, OBJECT_TAG};

impl RawValue {
    /// Loose truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""`
    /// are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Instance(_) | Self::Function(_) => true,
        }
    }

    /// Default string conversion.
    ///
    /// Records and instances without a custom form yield [`OBJECT_TAG`];
    /// arrays join their elements with `,`, rendering nullish elements empty.
    pub fn to_js_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::Array(items) => items
                .iter()
                .map(|item| if item.is_nullish() { String::new() } else { item.to_js_string() })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => OBJECT_TAG.to_string(),
            Self::Instance(instance) => {
                instance.display.clone().unwrap_or_else(|| OBJECT_TAG.to_string())
            }
            Self::Function(Function { name, source }) => source.clone().unwrap_or_else(|| {
                format!("function {}() {{ [native code] }}", name.as_deref().unwrap_or(""))
            }),
        }
    }
}

/// Render a number the way dynamic runtimes print it: integral values
/// without a fraction, exponent form outside `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    let shortest = n.to_string();
    match shortest.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => shortest,
    }
}
