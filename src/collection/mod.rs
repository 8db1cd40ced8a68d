//! The collection abstraction every utility traverses.
//!
//! A collection is either an ordered sequence or a string-keyed mapping.
//! Concrete containers pick their shape statically by implementing
//! [`Collection`]; [`AnyCollection`] and `serde_json::Value` pick it at
//! runtime.

mod any;
mod entries;

pub use any::AnyCollection;
pub use entries::{Entries, Key};

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A container that can be traversed as `(key, value)` entries.
pub trait Collection {
    /// Element type stored in the collection
    type Item;

    /// Traverse the collection's entries in traversal order
    fn entries(&self) -> Entries<'_, Self::Item>;

    /// Number of entries a traversal visits
    fn entry_count(&self) -> usize;

    /// Whether the collection is an ordered sequence (keys are indices)
    fn is_sequence(&self) -> bool;
}

impl<T> Collection for [T] {
    type Item = T;

    fn entries(&self) -> Entries<'_, T> {
        Entries::sequence(self)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn is_sequence(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn entries(&self) -> Entries<'_, T> {
        Entries::sequence(self)
    }

    fn entry_count(&self) -> usize {
        N
    }

    fn is_sequence(&self) -> bool {
        true
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn entries(&self) -> Entries<'_, T> {
        Entries::sequence(self)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn is_sequence(&self) -> bool {
        true
    }
}

impl<V, S> Collection for HashMap<String, V, S> {
    type Item = V;

    fn entries(&self) -> Entries<'_, V> {
        Entries::mapping(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn is_sequence(&self) -> bool {
        false
    }
}

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;

    fn entries(&self) -> Entries<'_, V> {
        Entries::mapping(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn is_sequence(&self) -> bool {
        false
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn entries(&self) -> Entries<'_, Value> {
        Entries::mapping(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn is_sequence(&self) -> bool {
        false
    }
}

/// Arrays traverse as sequences and objects as mappings. Scalars and
/// `null` have no entries.
impl Collection for Value {
    type Item = Value;

    fn entries(&self) -> Entries<'_, Value> {
        match self {
            Value::Array(items) => Entries::sequence(items),
            Value::Object(map) => map.entries(),
            _ => Entries::empty(),
        }
    }

    fn entry_count(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    fn is_sequence(&self) -> bool {
        self.is_array()
    }
}
