//! Entry keys and the traversal iterator shared by every collection shape.

use std::fmt;
use std::iter::Enumerate;
use std::slice;

/// Position of an entry within a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Index into an ordered sequence
    Index(usize),
    /// Name of an entry in a mapping
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

type MappingIter<'c, T> = Box<dyn Iterator<Item = (&'c str, &'c T)> + 'c>;

enum Inner<'c, T> {
    Sequence(Enumerate<slice::Iter<'c, T>>),
    Mapping(MappingIter<'c, T>),
    Empty,
}

/// Lazy traversal over a collection, yielding `(key, value)` in traversal order.
///
/// Sequences yield ascending indices. Mappings yield their own entries in
/// whatever order the underlying container enumerates them.
/// The mapping iterator is boxed without thread-safety bounds, so a
/// traversal stays on the thread that started it.
pub struct Entries<'c, T> {
    inner: Inner<'c, T>,
}

impl<'c, T> Entries<'c, T> {
    /// Traverse an ordered sequence
    pub fn sequence(items: &'c [T]) -> Self {
        Self {
            inner: Inner::Sequence(items.iter().enumerate()),
        }
    }

    /// Traverse named entries
    pub fn mapping(entries: impl Iterator<Item = (&'c str, &'c T)> + 'c) -> Self {
        Self {
            inner: Inner::Mapping(Box::new(entries)),
        }
    }

    /// A traversal that visits nothing
    pub fn empty() -> Self {
        Self { inner: Inner::Empty }
    }
}

impl<'c, T> Iterator for Entries<'c, T> {
    type Item = (Key<'c>, &'c T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Sequence(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
            Inner::Mapping(iter) => iter.next().map(|(name, value)| (Key::Name(name), value)),
            Inner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Sequence(iter) => iter.size_hint(),
            Inner::Mapping(iter) => iter.size_hint(),
            Inner::Empty => (0, Some(0)),
        }
    }
}

impl<T> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self.inner {
            Inner::Sequence(_) => "sequence",
            Inner::Mapping(_) => "mapping",
            Inner::Empty => "empty",
        };
        f.debug_struct("Entries").field("shape", &shape).finish()
    }
}
