//! Human-readable rendering of arbitrary values.
//!
//! Output follows the familiar REPL style: `{ key: 'value', list: [ 1, 2 ] }`,
//! with nesting beyond the configured depth collapsed to `[Object]` /
//! `[Array]` and long output broken over indented lines.

use crate::value::{format_number, Fields, Function, RawValue};

/// Rendering options for [`inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspector {
    /// Deepest nesting level whose contents are rendered
    pub depth: usize,
    /// Widest single-line rendering before breaking into lines
    pub break_length: usize,
}

impl Default for Inspector {
    fn default() -> Self {
        Self { depth: 2, break_length: 80 }
    }
}

/// Render a value with default options.
pub fn inspect(value: &RawValue) -> String {
    Inspector::default().inspect(value)
}

impl Inspector {
    /// Render a value.
    pub fn inspect(&self, value: &RawValue) -> String {
        self.render(value, 0, 0)
    }

    fn render(&self, value: &RawValue, level: usize, indent: usize) -> String {
        match value {
            RawValue::Undefined => "undefined".to_string(),
            RawValue::Null => "null".to_string(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Number(n) => format_number(*n),
            RawValue::String(s) => quote(s),
            RawValue::Function(Function { name, .. }) => match name.as_deref() {
                Some(name) if !name.is_empty() => format!("[Function: {name}]"),
                _ => "[Function (anonymous)]".to_string(),
            },
            RawValue::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                if level > self.depth {
                    return "[Array]".to_string();
                }
                let entries: Vec<String> =
                    items.iter().map(|item| self.render(item, level + 1, indent + 2)).collect();
                self.wrap("", ('[', ']'), &entries, indent)
            }
            RawValue::Object(fields) => {
                self.render_record("", fields, "[Object]", level, indent)
            }
            RawValue::Instance(instance) => {
                let prefix = format!("{} ", instance.class);
                let placeholder = format!("[{}]", instance.class);
                self.render_record(&prefix, &instance.fields, &placeholder, level, indent)
            }
        }
    }

    fn render_record(
        &self,
        prefix: &str,
        fields: &Fields,
        placeholder: &str,
        level: usize,
        indent: usize,
    ) -> String {
        if fields.is_empty() {
            return format!("{prefix}{{}}");
        }
        if level > self.depth {
            return placeholder.to_string();
        }
        let entries: Vec<String> = fields
            .iter()
            .map(|(key, value)| {
                format!("{}: {}", quote_key(key), self.render(value, level + 1, indent + 2))
            })
            .collect();
        self.wrap(prefix, ('{', '}'), &entries, indent)
    }

    fn wrap(
        &self,
        prefix: &str,
        (open, close): (char, char),
        entries: &[String],
        indent: usize,
    ) -> String {
        let single = format!("{prefix}{open} {} {close}", entries.join(", "));
        if indent + single.chars().count() <= self.break_length && !single.contains('\n') {
            return single;
        }

        let pad = " ".repeat(indent + 2);
        let body = entries.iter().map(|entry| format!("{pad}{entry}")).collect::<Vec<_>>();
        format!("{prefix}{open}\n{}\n{}{close}", body.join(",\n"), " ".repeat(indent))
    }
}

fn quote(s: &str) -> String {
    let delimiter = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(delimiter);
    for c in s.chars() {
        match c {
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\\' => quoted.push_str("\\\\"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

fn quote_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}
