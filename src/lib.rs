//! # Collection Kit
//!
//! Functional utilities for traversing and reshaping collections: ordered
//! sequences and string-keyed mappings.
//!
//! ## Features
//!
//! - One traversal primitive ([`each`]) shared by sequences and mappings
//! - Derived operations: `map`, `reduce`, `fold`, `find`, `filter`, `size`
//! - Array operations: `first`, `last`, `sort_by`, `flatten`
//! - Object operations: `keys`, `values`
//! - Fallible `try_*` variants that stop at the first callback error
//! - Shape-checked operations over dynamic `serde_json::Value` input
//!
//! ## Example
//!
//! ```
//! use collection_kit::{filter, find, map, reduce, Key};
//!
//! let items = vec![1, 2, 3, 4];
//!
//! let doubled = map(&items, |x, _, _| x * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let evens = filter(&items, |x, _, _| x % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! assert_eq!(reduce(&items, |acc, x, _, _| acc + x, None), Some(10));
//! assert_eq!(find(&items, |_, key, _| key == Key::Index(2)), Some(&3));
//! ```

pub mod collection;
pub mod json;
pub mod utils;

mod error;
mod options;

// Re-exports
pub use collection::{AnyCollection, Collection, Entries, Key};
pub use error::{CollectionError, Result};
pub use options::{FlattenDepth, FlattenOptions};
pub use utils::arrays::{
    first, first_n, flatten, flatten_deep, flatten_with, last, last_n, sort_by, Nested,
};
pub use utils::collections::{
    each, filter, find, fold, keys, map, reduce, size, try_each, try_filter, try_find, try_map,
    try_reduce, values,
};
