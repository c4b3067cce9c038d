//! Diagnostic rendering of runtime values.
//!
//! Failure messages need a short, stable description of the arguments that
//! were (or were not) matched. [`ValueSerializer`] renders any [`Value`] as a
//! type-tagged string; it never fails, and long strings are elided so a
//! message stays readable.

use crate::value::Value;

/// Renders values as short diagnostic strings.
///
/// The serializer is a small configuration struct; components that render
/// diagnostics receive one explicitly rather than reaching for a global.
///
/// # Example
///
/// ```rust
/// use standin::{Value, ValueSerializer};
///
/// let serializer = ValueSerializer::new();
/// assert_eq!(serializer.serialize_value(&Value::Int(42)), "Integer: 42");
/// assert_eq!(serializer.serialize_value(&Value::Float(42.0)), "Float: 42.0");
/// ```
#[derive(Debug, Clone)]
pub struct ValueSerializer {
    preview_limit: usize,
}

impl Default for ValueSerializer {
    fn default() -> Self {
        Self { preview_limit: 30 }
    }
}

impl ValueSerializer {
    /// Create a serializer with the default string preview limit (30 chars).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of characters shown of a string value.
    ///
    /// Strings longer than the limit render a `limit - 1` character preview
    /// followed by `...`.
    pub fn preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Render a single value as a type-tagged diagnostic string.
    pub fn serialize_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("Boolean: {}", b),
            Value::Int(i) => format!("Integer: {}", i),
            // {:?} keeps the decimal point, so a float never reads as an integer
            Value::Float(f) => format!("Float: {:?}", f),
            Value::Str(s) => format!("String: {} bytes: \"{}\"", s.len(), self.preview(s)),
            Value::List(items) => {
                let parts: Vec<String> =
                    items.iter().map(|item| self.serialize_value(item)).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Map(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, item)| format!("{} => {}", key, self.serialize_value(item)))
                    .collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Timestamp(ts) => format!("Timestamp: {}", ts.to_rfc3339()),
            Value::Resource { kind, id } => format!("Resource: {} #{}", kind, id),
        }
    }

    /// Render an argument list element-wise, preserving order.
    pub fn serialize_args(&self, args: &[Value]) -> Vec<String> {
        args.iter().map(|arg| self.serialize_value(arg)).collect()
    }

    /// Elide a string to the configured preview limit.
    /// Truncation is on character boundaries, so multi-byte text stays valid.
    fn preview(&self, s: &str) -> String {
        let char_count = s.chars().count();
        if char_count <= self.preview_limit {
            s.to_string()
        } else {
            let truncated: String = s.chars().take(self.preview_limit.saturating_sub(1)).collect();
            format!("{}...", truncated)
        }
    }
}
