//! Shape-checked utilities over dynamic JSON values.
//!
//! `serde_json::Value` already implements [`Collection`](crate::Collection),
//! so `each`, `map`, `reduce`, `find`, `filter` and `size` work on it
//! directly. The functions here cover operations that only make sense for
//! one shape and reject the other with a [`CollectionError`].

use crate::error::{shape_name, CollectionError, Result};
use crate::options::FlattenOptions;
use crate::utils::arrays;
use serde_json::{Map, Value};
use tracing::{debug, trace};

fn as_array(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| {
        debug!("Rejecting {} where an array was expected", shape_name(value));
        CollectionError::not_a_sequence(shape_name(value))
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        debug!("Rejecting {} where an object was expected", shape_name(value));
        CollectionError::not_a_mapping(shape_name(value))
    })
}

/// Negative counts select nothing
fn count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// First element of a JSON array
pub fn first(value: &Value) -> Result<Option<&Value>> {
    Ok(arrays::first(as_array(value)?))
}

/// First `n` elements of a JSON array
pub fn first_n(value: &Value, n: i64) -> Result<Vec<Value>> {
    Ok(arrays::first_n(as_array(value)?, count(n)))
}

/// Last element of a JSON array
pub fn last(value: &Value) -> Result<Option<&Value>> {
    Ok(arrays::last(as_array(value)?))
}

/// Last `n` elements of a JSON array
pub fn last_n(value: &Value, n: i64) -> Result<Vec<Value>> {
    Ok(arrays::last_n(as_array(value)?, count(n)))
}

/// Sort a copy of a JSON array by a key function
pub fn sort_by<K, F>(value: &Value, key_fn: F) -> Result<Vec<Value>>
where
    K: PartialOrd,
    F: FnMut(&Value) -> K,
{
    Ok(arrays::sort_by(as_array(value)?, key_fn))
}

/// Flatten nested JSON arrays, deeply or one level when `shallow` is set
pub fn flatten(value: &Value, shallow: bool) -> Result<Vec<Value>> {
    flatten_with(value, &FlattenOptions::from(shallow))
}

/// Flatten nested JSON arrays as far as `options` allows
pub fn flatten_with(value: &Value, options: &FlattenOptions) -> Result<Vec<Value>> {
    let items = as_array(value)?;
    trace!("Flattening JSON array of {} items with depth {:?}", items.len(), options.depth);
    let mut result = Vec::with_capacity(items.len());
    arrays::flatten_levels(items, options.depth.limit(), json_children, &mut result);
    Ok(result)
}

fn json_children(value: &Value) -> Option<&[Value]> {
    value.as_array().map(Vec::as_slice)
}

/// Key names of a JSON object
pub fn keys(value: &Value) -> Result<Vec<String>> {
    Ok(as_object(value)?.keys().cloned().collect())
}

/// Values of a JSON object, aligned with [`keys`]
pub fn values(value: &Value) -> Result<Vec<Value>> {
    Ok(as_object(value)?.values().cloned().collect())
}
