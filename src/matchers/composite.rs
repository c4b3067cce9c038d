//! Boolean combinators over other matchers.
//!
//! Each combinator owns an ordered list of child matchers, built from one
//! required first child plus any number of chained ones, so an empty
//! combinator cannot be constructed. Children are evaluated in insertion
//! order with short-circuiting.

use super::ArgumentMatcher;
use crate::serializer::ValueSerializer;
use crate::value::Value;

/// Matches when every child matches. Stops at the first failing child.
///
/// # Example
///
/// ```rust
/// use standin::{AllOf, ArgumentMatcher, Between, Callback, Value};
///
/// let matcher = AllOf::new(Between::new(1, 10))
///     .with(Callback::new(|v| matches!(v, Value::Int(i) if i % 2 == 1)));
/// assert!(matcher.matches(&Value::Int(5)));
/// assert!(!matcher.matches(&Value::Int(4)));
/// ```
pub struct AllOf {
    children: Vec<Box<dyn ArgumentMatcher>>,
}

impl AllOf {
    pub fn new(first: impl ArgumentMatcher + 'static) -> Self {
        Self {
            children: vec![Box::new(first)],
        }
    }

    /// Append another child matcher.
    pub fn with(mut self, next: impl ArgumentMatcher + 'static) -> Self {
        self.children.push(Box::new(next));
        self
    }
}

impl ArgumentMatcher for AllOf {
    fn matches(&self, actual: &Value) -> bool {
        self.children.iter().all(|child| child.matches(actual))
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        let parts: Vec<String> = self
            .children
            .iter()
            .map(|child| child.describe(serializer))
            .collect();
        parts.join(" && ")
    }
}

/// Matches when at least one child matches. Stops at the first success.
pub struct AnyOf {
    children: Vec<Box<dyn ArgumentMatcher>>,
}

impl AnyOf {
    pub fn new(first: impl ArgumentMatcher + 'static) -> Self {
        Self {
            children: vec![Box::new(first)],
        }
    }

    /// Append another child matcher.
    pub fn with(mut self, next: impl ArgumentMatcher + 'static) -> Self {
        self.children.push(Box::new(next));
        self
    }
}

impl ArgumentMatcher for AnyOf {
    fn matches(&self, actual: &Value) -> bool {
        self.children.iter().any(|child| child.matches(actual))
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        let parts: Vec<String> = self
            .children
            .iter()
            .map(|child| child.describe(serializer))
            .collect();
        parts.join(" || ")
    }
}

/// Matches when no child matches. Any child success is a failure.
///
/// # Example
///
/// ```rust
/// use standin::{ArgumentMatcher, Equal, NoneOf, Value};
///
/// let matcher = NoneOf::new(Equal::new(1)).with(Equal::new(2));
/// assert!(matcher.matches(&Value::Int(3)));
/// assert!(!matcher.matches(&Value::Int(2)));
/// ```
pub struct NoneOf {
    children: Vec<Box<dyn ArgumentMatcher>>,
}

impl NoneOf {
    pub fn new(first: impl ArgumentMatcher + 'static) -> Self {
        Self {
            children: vec![Box::new(first)],
        }
    }

    /// Append another child matcher.
    pub fn with(mut self, next: impl ArgumentMatcher + 'static) -> Self {
        self.children.push(Box::new(next));
        self
    }
}

impl ArgumentMatcher for NoneOf {
    fn matches(&self, actual: &Value) -> bool {
        !self.children.iter().any(|child| child.matches(actual))
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        let parts: Vec<String> = self
            .children
            .iter()
            .map(|child| format!("not ({})", child.describe(serializer)))
            .collect();
        parts.join(" && ")
    }
}
