//! Example usage of the collection utilities.

use collection_kit::{
    each, filter, find, first_n, flatten_deep, json, keys, last, map, reduce, size, sort_by,
    values, AnyCollection, Nested,
};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let scores = vec![72, 95, 58, 88];

    each(&scores, |score, key, _| println!("score[{}] = {}", key, score));

    let curved = map(&scores, |score, _, _| score + 5);
    println!("Curved: {:?}", curved);

    let passing = filter(&scores, |score, _, _| *score >= 60);
    println!("Passing: {:?}", passing);

    let total = reduce(&scores, |acc, score, _, _| acc + score, None);
    println!("Total: {:?}", total);

    println!("First above 90: {:?}", find(&scores, |s, _, _| *s > 90));
    println!("Top two: {:?}", first_n(&sort_by(&scores, |s| -s), 2));
    println!("Lowest: {:?}", last(&sort_by(&scores, |s| -s)));

    // Mappings keep their insertion order
    let inventory = AnyCollection::mapping([("apples", 3), ("pears", 0), ("plums", 7)]);
    println!("Items: {:?} = {:?}", keys(&inventory), values(&inventory));
    println!("In stock: {}", size(&filter(&inventory, |n, _, _| *n > 0)));

    let nested = vec![
        Nested::leaf(1),
        Nested::seq([Nested::leaf(2), Nested::seq([Nested::leaf(3)])]),
    ];
    println!("Flattened: {:?}", flatten_deep(&nested));

    // Dynamic JSON input is checked at runtime
    let document = json!({"tags": ["a", ["b", ["c"]]], "count": 3});
    println!("Document keys: {:?}", json::keys(&document)?);
    println!("Tags: {:?}", json::flatten(&document["tags"], false)?);
    if let Err(err) = json::first(&document) {
        println!("Expected failure: {}", err);
    }

    Ok(())
}
