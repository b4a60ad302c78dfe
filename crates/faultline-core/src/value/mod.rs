//! Dynamic value model for untyped error input.
//!
//! `RawValue` keeps the three-way distinction the normalizer depends on:
//! a property can be absent/undefined, explicitly `null`, or set. Presence is
//! always `!is_undefined()`, never truthiness.

mod coerce;
mod convert;

pub use coerce::format_number;

/// The generic tag produced by the default string conversion of a record.
pub const OBJECT_TAG: &str = "[object Object]";

static UNDEFINED: RawValue = RawValue::Undefined;

/// An arbitrary input value of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number (integral or not)
    Number(f64),
    /// String
    String(String),
    /// Ordered list
    Array(Vec<RawValue>),
    /// Plain data record
    Object(Fields),
    /// Instance of a named class
    Instance(Instance),
    /// Callable
    Function(Function),
}

/// Instance of a named class, such as an error object.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Class name, e.g. `Error`
    pub class: String,
    /// Custom string form; `None` means the default object tag
    pub display: Option<String>,
    /// Own properties
    pub fields: Fields,
}

/// A callable value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    /// Declared name, if any
    pub name: Option<String>,
    /// Source text returned by its string conversion
    pub source: Option<String>,
}

/// Insertion-ordered property list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(Vec<(String, RawValue)>);

impl Fields {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert or replace a property, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl RawValue {
    /// Build a plain record from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(entries.into_iter().collect())
    }

    /// Build a class instance.
    pub fn instance(class: impl Into<String>, display: Option<String>, fields: Fields) -> Self {
        Self::Instance(Instance { class: class.into(), display, fields })
    }

    /// Build a named function value.
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(Function { name: Some(name.into()), source: None })
    }

    /// Property lookup. Missing properties, and properties of values that
    /// carry none, read as `Undefined`.
    pub fn get(&self, key: &str) -> &RawValue {
        self.fields().and_then(|f| f.get(key)).unwrap_or(&UNDEFINED)
    }

    /// Own properties of records and instances.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Self::Object(fields) | Self::Instance(Instance { fields, .. }) => Some(fields),
            _ => None,
        }
    }

    /// True only for `Undefined`.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// True for `Undefined` and `Null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// True for values that behave as objects (records, instances, arrays,
    /// functions).
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Instance(_) | Self::Array(_) | Self::Function(_))
    }

    /// True when the default string conversion yields the generic object tag.
    pub fn has_object_tag(&self) -> bool {
        match self {
            Self::Object(_) => true,
            Self::Instance(instance) => instance.display.is_none(),
            _ => false,
        }
    }

    /// Borrow the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short shape name used in diagnostics. Instances report their class.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Instance(instance) => &instance.class,
            Self::Function(_) => "function",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_on_missing_and_primitives_is_undefined() {
        let record = RawValue::object([("a", 1_i64)]);
        assert_eq!(record.get("a"), &RawValue::Number(1.0));
        assert!(record.get("b").is_undefined());
        assert!(RawValue::from("text").get("length").is_undefined());
        assert!(RawValue::Null.get("stack").is_undefined());
    }

    #[test]
    fn test_explicit_undefined_property_reads_as_absent() {
        let record = RawValue::object([("service", RawValue::Undefined)]);
        assert!(record.get("service").is_undefined());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut fields = Fields::new().with("a", 1_i64).with("b", 2_i64);
        fields.insert("a", 3_i64);

        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(fields.get("a"), Some(&RawValue::Number(3.0)));
    }

    #[test]
    fn test_object_tag() {
        assert!(RawValue::object(Vec::<(String, RawValue)>::new()).has_object_tag());
        assert!(RawValue::instance("Widget", None, Fields::new()).has_object_tag());
        assert!(!RawValue::instance("Error", Some("Error: x".into()), Fields::new())
            .has_object_tag());
        assert!(!RawValue::Array(vec![]).has_object_tag());
        assert!(!RawValue::function("handler").has_object_tag());
        assert!(!RawValue::Null.has_object_tag());
    }

    #[test]
    fn test_type_name_reports_class() {
        let err = RawValue::instance("TypeError", None, Fields::new());
        assert_eq!(err.type_name(), "TypeError");
        assert_eq!(RawValue::Bool(true).type_name(), "boolean");
    }
}
