//! Fault taxonomy for call matching and key mapping.
//!
//! Every fault propagates to the immediate caller; nothing is retried or
//! swallowed. Construction-time misuse of the API (inverted range bounds,
//! an empty return sequence) is a panic, not an error value — those are
//! documented under `# Panics` on the methods that raise them.

use crate::value::{MapKey, Value};
use thiserror::Error;

/// Raised while deriving a lookup key from a call's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The call has fewer positional arguments than the key index requires.
    #[error("call supplied {got} argument(s) but the key is read from index {index}")]
    InsufficientArguments { index: usize, got: usize },

    /// The selected argument is not a non-empty string or non-negative integer.
    #[error("argument at index {index} is not usable as a lookup key")]
    InvalidKey { index: usize },
}

/// Raised by [`Expectation::match_call`](crate::Expectation::match_call).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The call's arguments were rejected. Carries the rejecting
    /// expectation's description and the arguments, so the owner can render
    /// a full diagnostic with a [`ValueSerializer`](crate::ValueSerializer).
    #[error("call did not match expectation of {expectation}")]
    NotMatched { expectation: String, args: Vec<Value> },

    /// Mapped-return lookup found no entry for the derived key.
    #[error("no return value mapped for key {key}")]
    MissingKey { key: MapKey },

    /// Key derivation failed before the lookup could happen.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Ties a rejected call to the name of the function or method being mocked.
///
/// This is the carrier the call-interception layer hands back to the test:
/// the mocked name, an optional message, and the underlying [`MatchError`]
/// as a chained cause.
#[derive(Debug, Error)]
#[error("unexpected call to {method}: {}", .message.as_deref().unwrap_or("call was rejected"))]
pub struct UnexpectedCallError {
    method: String,
    message: Option<String>,
    #[source]
    source: Option<MatchError>,
}

impl UnexpectedCallError {
    /// Create a carrier for the named mocked function or method.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            message: None,
            source: None,
        }
    }

    /// Attach a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the underlying match failure as the chained cause.
    pub fn with_cause(mut self, cause: MatchError) -> Self {
        self.source = Some(cause);
        self
    }

    /// The name of the mocked function or method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The optional message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The underlying match failure, if one was attached.
    pub fn cause(&self) -> Option<&MatchError> {
        self.source.as_ref()
    }
}
