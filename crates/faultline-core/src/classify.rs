//! Input shape classification.

use crate::value::RawValue;

/// The shape an input is handled as. Produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// `null` or `undefined`
    Nullish(&'a RawValue),
    /// Carries a truthy `stack` property
    ErrorLike {
        /// The `stack` property
        stack: &'a RawValue,
        /// The whole input
        value: &'a RawValue,
    },
    /// A data record whose string form is the generic object tag
    PlainObject(&'a RawValue),
    /// Anything else: primitives, arrays, functions, custom-formatted instances
    Other(&'a RawValue),
}

impl Shape<'_> {
    /// Short label for logging.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nullish(_) => "nullish",
            Self::ErrorLike { .. } => "error_like",
            Self::PlainObject(_) => "plain_object",
            Self::Other(_) => "other",
        }
    }
}

/// Classify an input. The first matching rule wins:
///
/// 1. `null` / `undefined`
/// 2. truthy `stack` property (duck-typed, any class)
/// 3. object whose string form is `[object Object]`
/// 4. everything else
pub fn classify(value: &RawValue) -> Shape<'_> {
    if value.is_nullish() {
        return Shape::Nullish(value);
    }

    let stack = value.get("stack");
    if stack.is_truthy() {
        return Shape::ErrorLike { stack, value };
    }

    if value.is_object() && value.has_object_tag() {
        return Shape::PlainObject(value);
    }

    Shape::Other(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Fields;
    use serde_json::json;

    #[test]
    fn test_nullish() {
        assert!(matches!(classify(&RawValue::Null), Shape::Nullish(_)));
        assert!(matches!(classify(&RawValue::Undefined), Shape::Nullish(_)));
    }

    #[test]
    fn test_stack_wins_over_object_tag() {
        let value = RawValue::from(json!({"stack": "Error: x\n    at f", "message": "x"}));
        assert!(matches!(classify(&value), Shape::ErrorLike { .. }));
    }

    #[test]
    fn test_falsy_stack_is_not_error_like() {
        let value = RawValue::from(json!({"stack": "", "message": "x"}));
        assert!(matches!(classify(&value), Shape::PlainObject(_)));
    }

    #[test]
    fn test_custom_formatted_instance_without_stack_is_other() {
        let value = RawValue::instance("Money", Some("$5".to_string()), Fields::new());
        assert!(matches!(classify(&value), Shape::Other(_)));

        let tagged = RawValue::instance("Widget", None, Fields::new().with("id", 1_i64));
        assert!(matches!(classify(&tagged), Shape::PlainObject(_)));
    }

    #[test]
    fn test_primitives_arrays_functions_are_other() {
        for value in [
            RawValue::from("text"),
            RawValue::from(0_i64),
            RawValue::Bool(false),
            RawValue::from(json!([1, 2])),
            RawValue::function("cb"),
        ] {
            assert_eq!(classify(&value).label(), "other", "{value:?}");
        }
    }
}
