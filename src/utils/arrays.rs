//! Array utility functions: slicing, sorting and flattening.

use crate::options::FlattenOptions;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::trace;

/// A value that is either a leaf or a nested sequence of further values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A nested sequence
    Seq(Vec<Nested<T>>),
    /// A plain value
    Leaf(T),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    pub fn seq(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Self::Seq(items.into_iter().collect())
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Get the first element of an array
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Get the first `n` elements of an array (fewer if the array is shorter)
pub fn first_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..n.min(items.len())].to_vec()
}

/// Get the last element of an array
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Get the last `n` elements of an array, in their original order
pub fn last_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len() - n.min(items.len())..].to_vec()
}

/// Sort a copy of an array by a key function, ascending
///
/// The sort is stable. Keys are computed once per element. Keys that do not
/// compare equal to themselves (`NaN`) sort after every other key and keep
/// their input order. Keys only need a partial order: an element moves ahead
/// of another only when its key is strictly less, so incomparable keys never
/// panic and come out in an unspecified but complete order.
pub fn sort_by<T, K, F>(items: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (ordered, unordered): (Vec<(K, &T)>, Vec<(K, &T)>) = items
        .iter()
        .map(|item| (key_fn(item), item))
        .partition(|(key, _)| key.partial_cmp(key).is_some());

    if !unordered.is_empty() {
        trace!("sort_by: moving {} keys without an ordering to the end", unordered.len());
    }

    merge_sort(ordered)
        .into_iter()
        .chain(unordered)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Stable merge sort that only relies on `partial_cmp` reporting `Less`
fn merge_sort<K: PartialOrd, T>(mut items: Vec<(K, T)>) -> Vec<(K, T)> {
    if items.len() <= 1 {
        return items;
    }
    let right = merge_sort(items.split_off(items.len() / 2));
    let left = merge_sort(items);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some((a, _)), Some((b, _))) => b.partial_cmp(a) == Some(Ordering::Less),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Flatten nested sequences, deeply or one level when `shallow` is set
pub fn flatten<T: Clone>(items: &[Nested<T>], shallow: bool) -> Vec<Nested<T>> {
    flatten_with(items, &FlattenOptions::from(shallow))
}

/// Flatten nested sequences as far as `options` allows
pub fn flatten_with<T: Clone>(items: &[Nested<T>], options: &FlattenOptions) -> Vec<Nested<T>> {
    trace!("Flattening {} items with depth {:?}", items.len(), options.depth);
    let mut result = Vec::with_capacity(items.len());
    flatten_levels(items, options.depth.limit(), nested_children, &mut result);
    result
}

fn nested_children<T>(item: &Nested<T>) -> Option<&[Nested<T>]> {
    match item {
        Nested::Seq(inner) => Some(inner.as_slice()),
        Nested::Leaf(_) => None,
    }
}

/// Depth-limited flatten shared by every nested representation.
///
/// `children` returns the inner items of an element that is itself a
/// sequence. A `limit` of `None` expands every level.
pub(crate) fn flatten_levels<T: Clone>(
    items: &[T],
    limit: Option<usize>,
    children: fn(&T) -> Option<&[T]>,
    out: &mut Vec<T>,
) {
    for item in items {
        match children(item) {
            Some(inner) if limit != Some(0) => {
                flatten_levels(inner, limit.map(|levels| levels - 1), children, out)
            }
            _ => out.push(item.clone()),
        }
    }
}

/// Flatten every level, returning the bare leaf values
pub fn flatten_deep<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(items.len());
    collect_leaves(items, &mut result);
    result
}

fn collect_leaves<T: Clone>(items: &[Nested<T>], out: &mut Vec<T>) {
    for item in items {
        match item {
            Nested::Seq(inner) => collect_leaves(inner, out),
            Nested::Leaf(value) => out.push(value.clone()),
        }
    }
}
