//! Argument matchers: per-position predicates over recorded call arguments.
//!
//! A matcher answers one question — does this single actual value satisfy
//! me? — and can describe itself for failure messages. Matchers compose:
//! [`AllOf`], [`AnyOf`], and [`NoneOf`] combine any other matchers, nested
//! arbitrarily.
//!
//! # Example
//!
//! ```rust
//! use standin::{AllOf, ArgumentMatcher, Between, Callback, Value};
//!
//! let odd_digit = AllOf::new(Between::new(0, 9))
//!     .with(Callback::new(|v| matches!(v, Value::Int(i) if i % 2 == 1)));
//!
//! assert!(odd_digit.matches(&Value::Int(5)));
//! assert!(!odd_digit.matches(&Value::Int(4)));
//! assert!(!odd_digit.matches(&Value::Int(11)));
//! ```

use crate::serializer::ValueSerializer;
use crate::value::Value;

mod compare;
mod composite;
mod predicate;
mod shape;

pub use compare::{Between, Equal, Identical, Pattern};
pub use composite::{AllOf, AnyOf, NoneOf};
pub use predicate::{AnyValue, Callback};
pub use shape::{EmptyCollection, KeyedMap, NonEmptyCollection, StringKeyedMap};

/// Capability of deciding whether one actual argument satisfies a pattern.
///
/// `matches` is a pure predicate: no side effects, no errors, always a
/// boolean. `describe` renders the expected pattern for diagnostics, using
/// the serializer it is handed.
pub trait ArgumentMatcher {
    fn matches(&self, actual: &Value) -> bool;
    fn describe(&self, serializer: &ValueSerializer) -> String;
}

impl<M: ArgumentMatcher + ?Sized> ArgumentMatcher for Box<M> {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self, serializer: &ValueSerializer) -> String {
        (**self).describe(serializer)
    }
}
