//! Uniform runtime value for recorded calls.
//!
//! Every component of the engine speaks [`Value`]: matchers test them,
//! expectations return them, the serializer renders them. A call is an
//! ordered `Vec<Value>` of positional arguments, most conveniently built
//! with the [`args!`](crate::args) macro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A map key: maps carry integer or string keys, in insertion order.
///
/// Also used as the lookup key for mapped return values, where only
/// non-negative integers and non-empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MapKey {
    Int(i64),
    Str(String),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Int(i) => write!(f, "{}", i),
            MapKey::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Int(i)
    }
}

impl From<i32> for MapKey {
    fn from(i: i32) -> Self {
        MapKey::Int(i64::from(i))
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Str(s)
    }
}

/// A runtime value recorded from (or returned to) a mocked call.
///
/// # Example
///
/// ```rust
/// use standin::Value;
///
/// let v = Value::from(42);
/// assert_eq!(v.type_name(), "Integer");
/// assert!(v.loose_eq(&Value::from("42")));
/// assert_ne!(v, Value::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Insertion-ordered entries; keys may be integers or strings.
    Map(Vec<(MapKey, Value)>),
    Timestamp(DateTime<Utc>),
    /// An opaque handle-like value, identified by category and id.
    Resource { kind: String, id: u64 },
}

impl Value {
    /// Returns the type name of the value as a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::Value;
    ///
    /// assert_eq!(Value::Bool(true).type_name(), "Boolean");
    /// assert_eq!(Value::Float(1.5).type_name(), "Float");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Str(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Timestamp(_) => "Timestamp",
            Value::Resource { .. } => "Resource",
        }
    }

    /// Returns true if the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained integer if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained string slice if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric interpretation of this value, if it has one.
    ///
    /// Integers, floats, and strings that parse as a number are all part of
    /// the numeric family; everything else is `None`.
    fn numeric_value(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Type-coercing equality, as used by the `Equal` matcher.
    ///
    /// Values in the numeric family (integers, floats, numeric strings)
    /// compare by numeric value. Lists compare element-wise loosely; maps
    /// compare entry-wise loosely, ignoring entry order. Every other pairing
    /// falls back to strict equality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::Value;
    ///
    /// assert!(Value::Int(1).loose_eq(&Value::from("1")));
    /// assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    /// assert!(!Value::Int(1).loose_eq(&Value::from("one")));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(k, v)| k == key && value.loose_eq(v))
                    })
            }
            _ => {
                if let (Some(a), Some(b)) = (self.numeric_value(), other.numeric_value()) {
                    a == b
                } else {
                    self == other
                }
            }
        }
    }

    /// Natural ordering between two values, as used by the `Between` matcher.
    ///
    /// Defined within the numeric family (integers and floats compare by
    /// value), between strings, and between timestamps. Cross-family
    /// comparisons are undefined.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                let (a, b) = (self.numeric_value()?, other.numeric_value()?);
                a.partial_cmp(&b)
            }
            _ => None,
        }
    }

    /// Convenience constructor for a keyed map from `(key, value)` pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::Value;
    ///
    /// let v = Value::map([("name", Value::from("ada")), ("age", Value::from(36))]);
    /// assert_eq!(v.type_name(), "Map");
    /// ```
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<MapKey>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Convenience constructor for a resource handle.
    pub fn resource(kind: impl Into<String>, id: u64) -> Value {
        Value::Resource { kind: kind.into(), id }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (MapKey::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Build an argument list from plain Rust values.
///
/// Each element is converted with `Value::from`.
///
/// # Example
///
/// ```rust
/// use standin::{args, Value};
///
/// let call = args!["login", 3, true];
/// assert_eq!(call[0], Value::from("login"));
/// assert_eq!(call.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {{
        vec![$($crate::Value::from($value)),*]
    }};
}
