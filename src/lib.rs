//! # standin
//!
//! A test-double engine: given a recorded call (an ordered list of argument
//! values), decide whether a configured expectation applies, count how many
//! times it has answered, and compute the stubbed value to return.
//!
//! The crate is the matching core of a mocking library. Call interception
//! (proxying, trait mocking) is deliberately out of scope: once a call has
//! been routed here as a `Vec<Value>`, the engine does the rest.
//!
//! ## Quick Start
//!
//! ```rust
//! use standin::{args, Expectation, Value};
//!
//! let mut expectation = Expectation::equal_to(args!["load", 42]);
//! expectation.set_return_value("row");
//!
//! assert_eq!(
//!     expectation.match_call(&args!["load", 42]).unwrap(),
//!     Value::from("row"),
//! );
//! assert_eq!(expectation.match_count(), 1);
//! ```
//!
//! ## Matchers
//!
//! Arguments are matched position by position, and matchers compose:
//!
//! ```rust
//! use standin::{args, AllOf, Between, Callback, Expectation, Pattern, Value};
//!
//! let mut expectation = Expectation::new(vec![
//!     Box::new(Pattern::new(r"^user-\d+$")),
//!     Box::new(AllOf::new(Between::new(0, 120))
//!         .with(Callback::new(|v| matches!(v, Value::Int(_))))),
//! ]);
//! expectation.set_return_value(true);
//!
//! assert!(expectation.matches(&args!["user-7", 36]));
//! assert!(!expectation.matches(&args!["guest", 36]));
//! ```
//!
//! ## Return strategies
//!
//! An expectation answers with a fixed value, a computed callback, a
//! round-robin sequence, or a lookup keyed on one of the arguments:
//!
//! ```rust
//! use standin::{args, Expectation, Value};
//!
//! let mut expectation = Expectation::any_arguments();
//! expectation.set_return_sequence(args!["a", "b"]);
//!
//! assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("a"));
//! assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("b"));
//! assert_eq!(expectation.match_call(&args![]).unwrap(), Value::from("a"));
//! ```

pub mod error;
pub mod expectation;
pub mod keymap;
pub mod matchers;
pub mod serializer;
pub mod value;

// Core types
pub use expectation::{Expectation, ExpectedCalls};
pub use value::{MapKey, Value};

// Matchers
pub use matchers::{
    AllOf, AnyOf, AnyValue, ArgumentMatcher, Between, Callback, EmptyCollection, Equal,
    Identical, KeyedMap, NoneOf, NonEmptyCollection, Pattern, StringKeyedMap,
};

// Return-key mapping
pub use keymap::{IndexedArgument, KeyMap};

// Diagnostics
pub use serializer::ValueSerializer;

// Errors
pub use error::{KeyError, MatchError, UnexpectedCallError};
