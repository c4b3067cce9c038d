//! The expectation engine: call matching, match counting, and stubbed
//! return computation.
//!
//! An [`Expectation`] holds a call pattern (one matcher per positional
//! argument, or "any arguments"), a counter of how many calls it has
//! answered, an advisory call-count policy, and a return strategy. Matching
//! (`matches`) is a side-effect-free probe; answering (`match_call`) is what
//! increments the counter and computes the return value.
//!
//! # Example
//!
//! ```rust
//! use standin::{args, Expectation, Value};
//!
//! let mut expectation = Expectation::equal_to(args!["user", 42]);
//! expectation.set_return_value("found");
//!
//! let returned = expectation.match_call(&args!["user", 42]).unwrap();
//! assert_eq!(returned, Value::from("found"));
//! assert_eq!(expectation.match_count(), 1);
//!
//! assert!(expectation.match_call(&args!["user", 7]).is_err());
//! assert_eq!(expectation.match_count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::MatchError;
use crate::keymap::KeyMap;
use crate::matchers::{ArgumentMatcher, Equal};
use crate::serializer::ValueSerializer;
use crate::value::{MapKey, Value};

/// Stored return-computation closure, invoked with the exact call arguments.
type ReturnFn = Box<dyn Fn(&[Value]) -> Value>;

/// Which calls an expectation accepts.
enum CallPattern {
    /// Accept every call, regardless of arity.
    AnyArguments,
    /// One matcher per positional argument; arity must match exactly.
    /// An empty list accepts only zero-argument calls.
    Positional(Vec<Box<dyn ArgumentMatcher>>),
}

/// Advisory call-count policy, read by the expectation's owner.
///
/// The engine itself never enforces this; it only counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpectedCalls {
    #[default]
    Unlimited,
    Times(usize),
}

/// Return strategy. Each mode carries exactly the payload it needs, so a
/// payload can never disagree with its mode.
enum ReturnMode {
    Value(Value),
    Callback(ReturnFn),
    Sequence(Vec<Value>),
    Mapped {
        keys: Box<dyn KeyMap>,
        table: HashMap<MapKey, Value>,
    },
}

/// A configured rule: which calls it accepts, and what it returns for them.
pub struct Expectation {
    pattern: CallPattern,
    matched: usize,
    expected: ExpectedCalls,
    return_mode: ReturnMode,
    serializer: ValueSerializer,
}

impl Expectation {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an expectation with one matcher per positional argument.
    ///
    /// An empty matcher list accepts only zero-argument calls; use
    /// [`Expectation::any_arguments`] to accept every call.
    pub fn new(matchers: Vec<Box<dyn ArgumentMatcher>>) -> Self {
        Self::with_pattern(CallPattern::Positional(matchers))
    }

    /// Create an expectation that accepts every call, whatever its arity.
    pub fn any_arguments() -> Self {
        Self::with_pattern(CallPattern::AnyArguments)
    }

    /// Create an expectation that loosely compares each argument against the
    /// given values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::{args, Expectation};
    ///
    /// let expectation = Expectation::equal_to(args!["save", 3]);
    /// assert!(expectation.matches(&args!["save", 3]));
    /// assert!(!expectation.matches(&args!["save"]));
    /// ```
    pub fn equal_to<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let matchers: Vec<Box<dyn ArgumentMatcher>> = values
            .into_iter()
            .map(|value| Box::new(Equal::new(value)) as Box<dyn ArgumentMatcher>)
            .collect();
        Self::new(matchers)
    }

    /// Replace the serializer used when rendering this expectation.
    pub fn with_serializer(mut self, serializer: ValueSerializer) -> Self {
        self.serializer = serializer;
        self
    }

    fn with_pattern(pattern: CallPattern) -> Self {
        Self {
            pattern,
            matched: 0,
            expected: ExpectedCalls::Unlimited,
            return_mode: ReturnMode::Value(Value::Null),
            serializer: ValueSerializer::new(),
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Probe whether a call would be accepted. Never mutates the counter.
    ///
    /// True iff the argument count equals the matcher count and every
    /// positional matcher accepts its argument, left to right, stopping at
    /// the first rejection. The any-arguments variant accepts everything.
    pub fn matches(&self, args: &[Value]) -> bool {
        match &self.pattern {
            CallPattern::AnyArguments => true,
            CallPattern::Positional(matchers) => {
                args.len() == matchers.len()
                    && matchers
                        .iter()
                        .zip(args)
                        .all(|(matcher, arg)| matcher.matches(arg))
            }
        }
    }

    /// Answer a call: re-validate, count the match, compute the return value.
    ///
    /// A rejected call fails with [`MatchError::NotMatched`] carrying this
    /// expectation's description and the offending arguments, and leaves the
    /// counter untouched. An accepted call increments the counter first,
    /// then computes the return value for the active mode; a panic inside a
    /// return callback propagates unmodified.
    pub fn match_call(&mut self, args: &[Value]) -> Result<Value, MatchError> {
        if !self.matches(args) {
            return Err(MatchError::NotMatched {
                expectation: self.describe(),
                args: args.to_vec(),
            });
        }

        let position = self.matched;
        self.matched += 1;

        match &self.return_mode {
            ReturnMode::Value(value) => Ok(value.clone()),
            ReturnMode::Callback(callback) => Ok(callback(args)),
            ReturnMode::Sequence(values) => Ok(values[position % values.len()].clone()),
            ReturnMode::Mapped { keys, table } => {
                let key = keys.map_key(args)?;
                table
                    .get(&key)
                    .cloned()
                    .ok_or(MatchError::MissingKey { key })
            }
        }
    }

    /// How many calls this expectation has answered.
    ///
    /// Incremented exactly once per accepted [`match_call`](Self::match_call);
    /// probes via [`matches`](Self::matches) and rejected calls do not count.
    pub fn match_count(&self) -> usize {
        self.matched
    }

    // =========================================================================
    // Call-count policy (advisory)
    // =========================================================================

    /// The advisory call-count target.
    pub fn expected_calls(&self) -> ExpectedCalls {
        self.expected
    }

    /// Set the advisory call-count target. Nothing in the engine enforces
    /// it; the owning collaborator reads it back for verification.
    pub fn set_expected_calls(&mut self, expected: ExpectedCalls) {
        self.expected = expected;
    }

    /// Whether the match counter has reached the advisory target.
    /// `Unlimited` is always satisfied.
    pub fn is_satisfied(&self) -> bool {
        match self.expected {
            ExpectedCalls::Unlimited => true,
            ExpectedCalls::Times(n) => self.matched == n,
        }
    }

    // =========================================================================
    // Return configuration
    // =========================================================================

    /// Return the same value for every accepted call.
    pub fn set_return_value(&mut self, value: impl Into<Value>) {
        self.return_mode = ReturnMode::Value(value.into());
    }

    /// Compute the return value by invoking a callback with the exact call
    /// arguments. Failures inside the callback are not caught.
    pub fn set_return_callback(&mut self, callback: impl Fn(&[Value]) -> Value + 'static) {
        self.return_mode = ReturnMode::Callback(Box::new(callback));
    }

    /// Return values round-robin from a list: the first accepted call gets
    /// index 0, and the position wraps after the final element.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty; a sequence needs at least one element.
    pub fn set_return_sequence(&mut self, values: Vec<Value>) {
        if values.is_empty() {
            panic!("a return sequence requires at least one value");
        }
        self.return_mode = ReturnMode::Sequence(values);
    }

    /// Select the return value by looking up a key derived from the call's
    /// arguments. A key with no table entry is a
    /// [`MatchError::MissingKey`] fault at match time, never a default.
    pub fn set_return_map(&mut self, keys: impl KeyMap + 'static, table: HashMap<MapKey, Value>) {
        self.return_mode = ReturnMode::Mapped {
            keys: Box::new(keys),
            table,
        };
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Human-readable description of the calls this expectation accepts.
    pub fn describe(&self) -> String {
        match &self.pattern {
            CallPattern::AnyArguments => "any arguments".to_string(),
            CallPattern::Positional(matchers) if matchers.is_empty() => {
                "no arguments".to_string()
            }
            CallPattern::Positional(matchers) => {
                let parts: Vec<String> = matchers
                    .iter()
                    .map(|matcher| matcher.describe(&self.serializer))
                    .collect();
                parts.join(", ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::KeyError;
    use crate::keymap::IndexedArgument;
    use crate::matchers::{AnyValue, Between, Callback};

    #[test]
    fn test_matches_requires_exact_arity() {
        let expectation = Expectation::equal_to(args![1, 2]);
        assert!(expectation.matches(&args![1, 2]));
        assert!(!expectation.matches(&args![1]));
        assert!(!expectation.matches(&args![1, 2, 3]));
        assert!(!expectation.matches(&args![]));
    }

    #[test]
    fn test_any_arguments_accepts_every_arity() {
        let expectation = Expectation::any_arguments();
        assert!(expectation.matches(&args![]));
        assert!(expectation.matches(&args![1]));
        assert!(expectation.matches(&args!["a", 2.5, true, Value::Null]));
    }

    #[test]
    fn test_empty_matcher_list_accepts_only_zero_arguments() {
        let expectation = Expectation::new(vec![]);
        assert!(expectation.matches(&args![]));
        assert!(!expectation.matches(&args![1]));
    }

    #[test]
    fn test_matchers_are_positional() {
        let expectation = Expectation::new(vec![
            Box::new(Between::new(1, 10)),
            Box::new(AnyValue::new()),
        ]);
        assert!(expectation.matches(&args![5, "whatever"]));
        assert!(!expectation.matches(&args!["whatever", 5]));
    }

    #[test]
    fn test_probing_never_counts() {
        let mut expectation = Expectation::equal_to(args![1]);
        assert!(expectation.matches(&args![1]));
        assert!(expectation.matches(&args![1]));
        assert_eq!(expectation.match_count(), 0);

        expectation.match_call(&args![1]).unwrap();
        assert_eq!(expectation.match_count(), 1);
    }

    #[test]
    fn test_rejected_calls_never_count() {
        let mut expectation = Expectation::equal_to(args![1]);
        let err = expectation.match_call(&args![2]).unwrap_err();
        match err {
            MatchError::NotMatched { expectation, args } => {
                assert_eq!(expectation, "equal to Integer: 1");
                assert_eq!(args, vec![Value::Int(2)]);
            }
            other => panic!("expected NotMatched, got {:?}", other),
        }
        assert_eq!(expectation.match_count(), 0);
    }

    #[test]
    fn test_default_return_is_null() {
        let mut expectation = Expectation::any_arguments();
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::Null);
    }

    #[test]
    fn test_fixed_return_value() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_value(99);
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::Int(99));
        assert_eq!(expectation.match_call(&args![1]).unwrap(), Value::Int(99));
    }

    #[test]
    fn test_callback_return_sees_exact_arguments() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_callback(|call_args| Value::Int(call_args.len() as i64));

        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::Int(0));
        assert_eq!(
            expectation.match_call(&args!["a", "b", "c"]).unwrap(),
            Value::Int(3)
        );
    }

    #[test]
    fn test_sequence_wraps_around() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_sequence(args!["a", "b", "c"]);

        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("a"));
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("b"));
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("c"));
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("a"));
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn test_empty_sequence_panics_at_configuration() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_sequence(vec![]);
    }

    #[test]
    fn test_mapped_return_hits_and_misses() {
        let mut expectation = Expectation::any_arguments();
        let table = HashMap::from([
            (MapKey::from("read"), Value::Int(1)),
            (MapKey::from("write"), Value::Int(2)),
        ]);
        expectation.set_return_map(IndexedArgument::new(0), table);

        assert_eq!(expectation.match_call(&args!["read"]).unwrap(), Value::Int(1));
        assert_eq!(expectation.match_call(&args!["write"]).unwrap(), Value::Int(2));

        let err = expectation.match_call(&args!["delete"]).unwrap_err();
        assert_eq!(
            err,
            MatchError::MissingKey {
                key: MapKey::from("delete")
            }
        );
    }

    #[test]
    fn test_mapped_return_propagates_key_errors() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_map(IndexedArgument::new(1), HashMap::new());

        let err = expectation.match_call(&args!["only-one"]).unwrap_err();
        assert_eq!(
            err,
            MatchError::Key(KeyError::InsufficientArguments { index: 1, got: 1 })
        );
    }

    #[test]
    fn test_counter_still_advances_when_lookup_faults() {
        // The call was accepted; only the lookup failed afterwards.
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_map(IndexedArgument::new(0), HashMap::new());

        assert!(expectation.match_call(&args!["missing"]).is_err());
        assert_eq!(expectation.match_count(), 1);
    }

    #[test]
    fn test_expected_calls_is_advisory() {
        let mut expectation = Expectation::any_arguments();
        assert_eq!(expectation.expected_calls(), ExpectedCalls::Unlimited);
        assert!(expectation.is_satisfied());

        expectation.set_expected_calls(ExpectedCalls::Times(2));
        assert!(!expectation.is_satisfied());

        expectation.match_call(&args![]).unwrap();
        expectation.match_call(&args![]).unwrap();
        assert!(expectation.is_satisfied());

        // The engine keeps answering past the target; enforcement is external.
        expectation.match_call(&args![]).unwrap();
        assert_eq!(expectation.match_count(), 3);
        assert!(!expectation.is_satisfied());
    }

    #[test]
    fn test_describe_variants() {
        assert_eq!(Expectation::any_arguments().describe(), "any arguments");
        assert_eq!(Expectation::new(vec![]).describe(), "no arguments");
        assert_eq!(
            Expectation::equal_to(args![1, "x"]).describe(),
            "equal to Integer: 1, equal to String: 1 bytes: \"x\""
        );
    }

    #[test]
    fn test_describe_uses_injected_serializer() {
        let expectation = Expectation::equal_to(args!["abcdefghij"])
            .with_serializer(ValueSerializer::new().preview_limit(4));
        assert_eq!(
            expectation.describe(),
            "equal to String: 10 bytes: \"abc...\""
        );
    }

    #[test]
    fn test_reconfiguring_return_mode_replaces_the_old_one() {
        let mut expectation = Expectation::any_arguments();
        expectation.set_return_sequence(args![1, 2]);
        expectation.set_return_value("fixed");

        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("fixed"));
        assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("fixed"));
    }

    #[test]
    fn test_composed_matchers_inside_expectation() {
        let is_odd = |v: &Value| matches!(v, Value::Int(i) if i % 2 == 1);
        let mut expectation = Expectation::new(vec![Box::new(
            crate::matchers::AllOf::new(Between::new(1, 10)).with(Callback::new(is_odd)),
        )]);
        expectation.set_return_value(true);

        assert_eq!(expectation.match_call(&args![5]).unwrap(), Value::Bool(true));
        assert!(expectation.match_call(&args![4]).is_err());
        assert!(expectation.match_call(&args![11]).is_err());
        assert_eq!(expectation.match_count(), 1);
    }
}
