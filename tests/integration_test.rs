//! Integration tests for the collection utilities.
//!
//! These exercise the public API across every collection shape: slices,
//! `Vec`, string-keyed maps, `AnyCollection` and `serde_json::Value`.

use collection_kit::{
    each, filter, find, first, first_n, flatten, flatten_deep, fold, json, keys, last, last_n,
    map, reduce, size, sort_by, try_each, try_filter, try_map, values, AnyCollection,
    CollectionError, Key, Nested,
};
use serde_json::{json, Value};
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

fn sample_mapping() -> AnyCollection<i32> {
    AnyCollection::mapping([("a", 1), ("b", 2)])
}

// ============================================================================
// Traversal Tests
// ============================================================================

#[test]
fn test_each_returns_same_collection() {
    let items = vec![1, 2, 3];
    let returned = each(&items, |_, _, _| {});
    assert!(std::ptr::eq(returned, &items));
    assert_eq!(returned, &vec![1, 2, 3]);
}

#[test]
fn test_each_visits_mapping_entries_only() {
    let mapping = sample_mapping();
    let mut visited = Vec::new();
    let returned = each(&mapping, |value, key, _| visited.push((key.to_string(), *value)));

    assert_eq!(visited, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    assert_eq!(returned, &sample_mapping());
}

#[test]
fn test_each_over_json_value() {
    let document = json!({"x": 1, "y": [1, 2]});
    let mut names = Vec::new();
    each(&document, |_, key, _| names.extend(key.as_name()));
    assert_eq!(names, vec!["x", "y"]);

    let mut calls = 0;
    each(&json!("scalar"), |_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_try_each_propagates_callback_error() {
    let items = vec!["ok", "bad", "never"];
    let result = try_each(&items, |item, key, _| {
        if *item == "bad" {
            Err(format!("failed at {}", key))
        } else {
            Ok(())
        }
    });
    assert_eq!(result.unwrap_err(), "failed at 1");
}

#[test]
#[should_panic(expected = "callback failure")]
fn test_panicking_callback_propagates() {
    let items = vec![1];
    each(&items, |_, _, _| panic!("callback failure"));
}

// ============================================================================
// Derived Operation Tests
// ============================================================================

#[test]
fn test_map_matches_callback_per_index() {
    let items = vec![4, 5, 6];
    let f = |x: &i32, key: Key<'_>, coll: &Vec<i32>| {
        x * 10 + key.as_index().unwrap_or(0) as i32 + coll.len() as i32
    };
    let mapped = map(&items, f);

    assert_eq!(mapped.len(), items.len());
    for (i, value) in items.iter().enumerate() {
        assert_eq!(mapped[i], f(value, Key::Index(i), &items));
    }
}

#[test]
fn test_map_over_mapping_follows_traversal_order() {
    let described = map(&sample_mapping(), |value, key, _| format!("{}={}", key, value));
    assert_eq!(described, vec!["a=1", "b=2"]);
}

#[test]
fn test_filter_is_ordered_subsequence() {
    let items = vec![5, 8, 1, 9, 2, 7];
    let kept = filter(&items, |x, _, _| *x > 4);
    assert_eq!(kept, vec![5, 8, 9, 7]);
    assert_eq!(items, vec![5, 8, 1, 9, 2, 7]);
}

#[test]
fn test_reduce_seed_rules() {
    let empty: Vec<i32> = vec![];
    assert_eq!(reduce(&empty, |a, b, _, _| a + b, None), None);
    assert_eq!(reduce(&empty, |a, b, _, _| a + b, Some(0)), Some(0));

    let items = vec![1, 2, 3, 4];
    assert_eq!(reduce(&items, |a, b, _, _| a + b, None), Some(10));
    assert_eq!(reduce(&items, |a, b, _, _| a + b, Some(10)), Some(20));
}

#[test]
fn test_reduce_with_optional_item_type() {
    // A seed that is itself "absent" is still a supplied seed
    let items: Vec<Option<i32>> = vec![Some(1), Some(2)];
    let result = reduce(
        &items,
        |acc, x, _, _| match (acc, x) {
            (Some(a), Some(b)) => Some(a + b),
            (acc, _) => acc,
        },
        Some(None),
    );
    assert_eq!(result, Some(None));
}

#[test]
fn test_fold_over_json_object() {
    let document = json!({"a": 1, "b": 2, "c": 3});
    let total = fold(&document, 0, |acc, value, _, _| acc + value.as_i64().unwrap_or(0));
    assert_eq!(total, 6);
}

#[test]
fn test_find_short_circuits() {
    let items = vec![1, 2, 3];
    let highest_visited = Cell::new(0usize);
    let found = find(&items, |x, key, _| {
        highest_visited.set(key.as_index().unwrap());
        *x > 1
    });

    assert_eq!(found, Some(&2));
    assert_eq!(highest_visited.get(), 1);
}

#[test]
fn test_find_in_hash_map() {
    let mut map = HashMap::new();
    map.insert("left".to_string(), 1);
    map.insert("right".to_string(), 2);
    assert_eq!(find(&map, |v, _, _| *v == 2), Some(&2));
    assert_eq!(find(&map, |v, _, _| *v == 3), None);
}

#[test]
fn test_try_map_and_try_filter() {
    let raw = vec!["3", "x", "5"];
    let parsed = try_map(&raw, |s, _, _| s.parse::<i32>());
    assert!(parsed.is_err());

    let short: Result<Vec<&str>, String> = try_filter(&raw, |s, _, _| Ok(s.len() == 1));
    assert_eq!(short.unwrap(), vec!["3", "x", "5"]);
}

#[test]
fn test_size() {
    assert_eq!(size(&[1, 2, 3]), 3);
    assert_eq!(size(&sample_mapping()), 2);
    assert_eq!(size(&json!({"a": 1})), 1);
    assert_eq!(size(&json!(null)), 0);
}

// ============================================================================
// Array Operation Tests
// ============================================================================

#[test]
fn test_first_and_last() {
    assert_eq!(first(&[1, 2, 3]), Some(&1));
    assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
    assert_eq!(first_n::<i32>(&[], 2), Vec::<i32>::new());
    assert_eq!(last(&[1, 2, 3]), Some(&3));
    assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
    assert_eq!(last::<i32>(&[]), None);
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    k: i32,
    v: &'static str,
}

#[test]
fn test_sort_by() {
    assert_eq!(sort_by(&[3, 1, 2], |x| *x), vec![1, 2, 3]);

    let records = vec![Record { k: 1, v: "a" }, Record { k: 1, v: "b" }];
    let sorted = sort_by(&records, |r| r.k);
    let order: Vec<_> = sorted.iter().map(|r| r.v).collect();
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn test_flatten() {
    let nested: Vec<Nested<i32>> = serde_json::from_value(json!([1, [2, [3, [4]]]])).unwrap();

    let deep = flatten(&nested, false);
    assert_eq!(serde_json::to_value(&deep).unwrap(), json!([1, 2, 3, 4]));

    let shallow = flatten(&nested, true);
    assert_eq!(serde_json::to_value(&shallow).unwrap(), json!([1, 2, [3, [4]]]));

    assert_eq!(flatten_deep(&nested), vec![1, 2, 3, 4]);
}

// ============================================================================
// Object Operation Tests
// ============================================================================

#[test]
fn test_keys_and_values_are_aligned() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);

    assert_eq!(keys(&map), vec!["a", "b"]);
    assert_eq!(values(&map), vec![1, 2]);

    let mapping = sample_mapping();
    let pairs: Vec<_> = keys(&mapping).into_iter().zip(values(&mapping)).collect();
    assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_json_keys_keep_document_order() {
    let document: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
    assert_eq!(json::keys(&document).unwrap(), vec!["zeta", "alpha"]);
    assert_eq!(json::values(&document).unwrap(), vec![json!(1), json!(2)]);
}

#[test]
fn test_json_shape_errors() {
    assert_eq!(
        json::last(&json!({"a": 1})).unwrap_err(),
        CollectionError::not_a_sequence("object")
    );
    assert_eq!(
        json::values(&json!([1])).unwrap_err(),
        CollectionError::not_a_mapping("array")
    );
}

#[test]
fn test_json_array_operations() {
    let items = json!([3, 1, 2]);
    let sorted = json::sort_by(&items, |v| v.as_i64()).unwrap();
    assert_eq!(sorted, vec![json!(1), json!(2), json!(3)]);
    assert_eq!(json::first_n(&items, 5).unwrap().len(), 3);
    assert_eq!(json::last_n(&items, 1).unwrap(), vec![json!(2)]);
}
