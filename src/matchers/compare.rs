//! Matchers that compare the actual argument against expected values.

use regex::Regex;
use std::cmp::Ordering;

use super::ArgumentMatcher;
use crate::serializer::ValueSerializer;
use crate::value::Value;

/// Matches values loosely equal to the expected one.
///
/// Loose equality coerces across the numeric family, so `Equal::new(1)`
/// accepts the string `"1"` and the float `1.0`. Use [`Identical`] when the
/// type must match too.
///
/// # Example
///
/// ```rust
/// use standin::{ArgumentMatcher, Equal, Value};
///
/// let matcher = Equal::new(1);
/// assert!(matcher.matches(&Value::from("1")));
/// assert!(matcher.matches(&Value::Float(1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Equal {
    expected: Value,
}

impl Equal {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl ArgumentMatcher for Equal {
    fn matches(&self, actual: &Value) -> bool {
        actual.loose_eq(&self.expected)
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        format!("equal to {}", serializer.serialize_value(&self.expected))
    }
}

/// Matches only the exact same value with the exact same type.
///
/// # Example
///
/// ```rust
/// use standin::{ArgumentMatcher, Identical, Value};
///
/// let matcher = Identical::new(1);
/// assert!(matcher.matches(&Value::Int(1)));
/// assert!(!matcher.matches(&Value::from("1")));
/// ```
#[derive(Debug, Clone)]
pub struct Identical {
    expected: Value,
}

impl Identical {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl ArgumentMatcher for Identical {
    fn matches(&self, actual: &Value) -> bool {
        actual == &self.expected
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        format!("identical to {}", serializer.serialize_value(&self.expected))
    }
}

/// Matches values inside an inclusive range under natural ordering.
///
/// Bounds must share a comparable family (numeric, string, or timestamp).
/// An actual value outside that family never matches; it is not an error.
///
/// # Example
///
/// ```rust
/// use standin::{ArgumentMatcher, Between, Value};
///
/// let matcher = Between::new(1, 10);
/// assert!(matcher.matches(&Value::Int(10)));
/// assert!(!matcher.matches(&Value::Int(11)));
/// assert!(!matcher.matches(&Value::from("five")));
/// ```
///
/// # Panics
///
/// Construction panics if the bounds are not comparable with each other or
/// if `lower` exceeds `upper`.
#[derive(Debug, Clone)]
pub struct Between {
    lower: Value,
    upper: Value,
}

impl Between {
    pub fn new(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        let lower = lower.into();
        let upper = upper.into();
        match lower.compare(&upper) {
            Some(Ordering::Less | Ordering::Equal) => Self { lower, upper },
            Some(Ordering::Greater) => {
                panic!("Between bounds are inverted: lower must not exceed upper")
            }
            None => panic!("Between bounds do not share a comparable type"),
        }
    }
}

impl ArgumentMatcher for Between {
    fn matches(&self, actual: &Value) -> bool {
        matches!(
            self.lower.compare(actual),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            actual.compare(&self.upper),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        format!(
            "between {} and {}",
            serializer.serialize_value(&self.lower),
            serializer.serialize_value(&self.upper)
        )
    }
}

/// Matches string values against a regular expression.
///
/// Non-string values never match.
///
/// # Example
///
/// ```rust
/// use standin::{ArgumentMatcher, Pattern, Value};
///
/// let matcher = Pattern::new(r"^user-\d+$");
/// assert!(matcher.matches(&Value::from("user-42")));
/// assert!(!matcher.matches(&Value::Int(42)));
/// ```
///
/// # Panics
///
/// Construction panics if the pattern is not a valid regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => Self { regex },
            Err(e) => panic!("invalid pattern '{}': {}", pattern, e),
        }
    }
}

impl ArgumentMatcher for Pattern {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_str()
            .map(|s| self.regex.is_match(s))
            .unwrap_or(false)
    }

    fn describe(&self, _serializer: &ValueSerializer) -> String {
        format!("matching pattern /{}/", self.regex.as_str())
    }
}
