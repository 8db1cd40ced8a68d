//! Owned collection whose shape is decided at runtime.

use super::{Collection, Entries};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// An ordered sequence or an ordered list of named entries.
///
/// Mapping entries keep the order they were built in, so traversal order is
/// insertion order. Names are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyCollection<T> {
    Sequence(Vec<T>),
    Mapping(Vec<(String, T)>),
}

impl<T> AnyCollection<T> {
    /// Build a mapping from `(name, value)` pairs
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Look up a value by index (sequences) or name (mappings)
    pub fn get(&self, name: &str) -> Option<&T> {
        match self {
            Self::Sequence(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == name).map(|(_, v)| v),
        }
    }
}

impl<T> Default for AnyCollection<T> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<T> Collection for AnyCollection<T> {
    type Item = T;

    fn entries(&self) -> Entries<'_, T> {
        match self {
            Self::Sequence(items) => Entries::sequence(items),
            Self::Mapping(entries) => {
                Entries::mapping(entries.iter().map(|(name, value)| (name.as_str(), value)))
            }
        }
    }

    fn entry_count(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl<T> From<Vec<T>> for AnyCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<BTreeMap<String, T>> for AnyCollection<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        Self::Mapping(map.into_iter().collect())
    }
}

impl<T, S> From<HashMap<String, T, S>> for AnyCollection<T> {
    fn from(map: HashMap<String, T, S>) -> Self {
        Self::Mapping(map.into_iter().collect())
    }
}

impl<T> FromIterator<T> for AnyCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
