//! Collection utility functions.
//!
//! Every function here accepts any [`Collection`]: slices, arrays, `Vec`,
//! string-keyed maps, [`AnyCollection`](crate::AnyCollection) or a
//! `serde_json::Value`. Callbacks receive `(value, key, collection)`.

use crate::collection::{Collection, Key};

/// Apply a function to each entry of a collection, returning the collection
///
/// Sequences are visited in ascending index order, mappings in their own
/// enumeration order. The callback cannot stop the traversal.
pub fn each<'c, C, F>(collection: &'c C, mut callback: F) -> &'c C
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C),
{
    for (key, value) in collection.entries() {
        callback(value, key, collection);
    }
    collection
}

/// Like [`each`], stopping at and returning the first callback error
pub fn try_each<'c, C, E, F>(collection: &'c C, mut callback: F) -> Result<&'c C, E>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> Result<(), E>,
{
    for (key, value) in collection.entries() {
        callback(value, key, collection)?;
    }
    Ok(collection)
}

/// Map a function over a collection
pub fn map<'c, C, U, F>(collection: &'c C, mut callback: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> U,
{
    let mut result = Vec::with_capacity(collection.entry_count());
    each(collection, |value, key, coll| result.push(callback(value, key, coll)));
    result
}

/// Map a fallible function over a collection
pub fn try_map<'c, C, U, E, F>(collection: &'c C, mut callback: F) -> Result<Vec<U>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> Result<U, E>,
{
    collection
        .entries()
        .map(|(key, value)| callback(value, key, collection))
        .collect()
}

/// Reduce a collection to a single value, left to right
///
/// With `seed` set the fold starts from it. Without a seed the first visited
/// value becomes the accumulator and folding starts at the second entry, so
/// an empty collection yields `None`.
pub fn reduce<'c, C, F>(collection: &'c C, mut callback: F, seed: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'c C::Item, Key<'c>, &'c C) -> C::Item,
{
    let mut entries = collection.entries();
    let mut acc = match seed {
        Some(seed) => seed,
        None => entries.next()?.1.clone(),
    };
    for (key, value) in entries {
        acc = callback(acc, value, key, collection);
    }
    Some(acc)
}

/// [`reduce`] with a fallible callback
pub fn try_reduce<'c, C, E, F>(
    collection: &'c C,
    mut callback: F,
    seed: Option<C::Item>,
) -> Result<Option<C::Item>, E>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'c C::Item, Key<'c>, &'c C) -> Result<C::Item, E>,
{
    let mut entries = collection.entries();
    let mut acc = match seed {
        Some(seed) => seed,
        None => match entries.next() {
            Some((_, first)) => first.clone(),
            None => return Ok(None),
        },
    };
    for (key, value) in entries {
        acc = callback(acc, value, key, collection)?;
    }
    Ok(Some(acc))
}

/// Fold a collection into an accumulator of any type
pub fn fold<'c, C, A, F>(collection: &'c C, init: A, mut callback: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'c C::Item, Key<'c>, &'c C) -> A,
{
    collection
        .entries()
        .fold(init, |acc, (key, value)| callback(acc, value, key, collection))
}

/// Find the first value matching a predicate
///
/// Stops visiting entries as soon as one matches.
pub fn find<'c, C, F>(collection: &'c C, mut predicate: F) -> Option<&'c C::Item>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> bool,
{
    collection
        .entries()
        .find(|&(key, value)| predicate(value, key, collection))
        .map(|(_, value)| value)
}

/// [`find`] with a fallible predicate; an error also stops the search
pub fn try_find<'c, C, E, F>(collection: &'c C, mut predicate: F) -> Result<Option<&'c C::Item>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> Result<bool, E>,
{
    for (key, value) in collection.entries() {
        if predicate(value, key, collection)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Filter a collection
pub fn filter<'c, C, F>(collection: &'c C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> bool,
{
    collection
        .entries()
        .filter(|&(key, value)| predicate(value, key, collection))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Filter a collection with a fallible predicate
pub fn try_filter<'c, C, E, F>(collection: &'c C, mut predicate: F) -> Result<Vec<C::Item>, E>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item, Key<'c>, &'c C) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for (key, value) in collection.entries() {
        if predicate(value, key, collection)? {
            result.push(value.clone());
        }
    }
    Ok(result)
}

/// Number of entries in a collection
pub fn size<C: Collection + ?Sized>(collection: &C) -> usize {
    collection.entry_count()
}

/// Get the key names of a collection, in traversal order
///
/// Sequence indices are rendered as decimal strings.
pub fn keys<C: Collection + ?Sized>(collection: &C) -> Vec<String> {
    collection.entries().map(|(key, _)| key.to_string()).collect()
}

/// Get the values of a collection, aligned with [`keys`]
pub fn values<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
{
    collection.entries().map(|(_, value)| value.clone()).collect()
}
