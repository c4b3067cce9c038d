//! Deriving a lookup key from a call's arguments.
//!
//! Mapped return mode needs a key to look up in its table. A [`KeyMap`] is
//! the strategy that produces one from the full argument list; the shipped
//! strategy, [`IndexedArgument`], selects a single positional argument.

use crate::error::KeyError;
use crate::value::{MapKey, Value};

/// Strategy capability: derive a lookup key from an argument list.
///
/// Implementations are pure; the same arguments always produce the same key.
pub trait KeyMap {
    fn map_key(&self, args: &[Value]) -> Result<MapKey, KeyError>;
}

/// Selects the argument at a fixed position as the lookup key.
///
/// The index is set at construction and immutable. Only non-empty strings
/// and non-negative integers are legal keys; anything else at the selected
/// position is an [`KeyError::InvalidKey`] fault.
///
/// # Example
///
/// ```rust
/// use standin::{args, IndexedArgument, KeyMap, MapKey};
///
/// let mapper = IndexedArgument::new(1);
/// let key = mapper.map_key(&args!["a", "ok"]).unwrap();
/// assert_eq!(key, MapKey::Str("ok".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedArgument {
    index: usize,
}

impl IndexedArgument {
    /// Create a mapper reading the argument at `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// The position this mapper reads.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl KeyMap for IndexedArgument {
    fn map_key(&self, args: &[Value]) -> Result<MapKey, KeyError> {
        let value = args.get(self.index).ok_or(KeyError::InsufficientArguments {
            index: self.index,
            got: args.len(),
        })?;
        match value {
            Value::Str(s) if !s.is_empty() => Ok(MapKey::Str(s.clone())),
            Value::Int(i) if *i >= 0 => Ok(MapKey::Int(*i)),
            _ => Err(KeyError::InvalidKey { index: self.index }),
        }
    }
}
