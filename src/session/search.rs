//! Depth-first search over arbitrarily nested JSON.

use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Returns the first value, in pre-order, for which `predicate` holds.
///
/// A node is tested before its children; object members are visited in
/// document order, array items in index order.
pub fn find_first<'a, F>(value: &'a Value, predicate: &F) -> Option<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    if predicate(value) {
        return Some(value);
    }
    match value {
        Value::Object(map) => map.values().find_map(|child| find_first(child, predicate)),
        Value::Array(items) => items.iter().find_map(|child| find_first(child, predicate)),
        _ => None,
    }
}

/// Whether `value` is an object whose `url` field decodes to `url`.
///
/// `url` must already be percent-decoded; the stored field is decoded here.
pub fn has_matching_url(value: &Value, url: &str) -> bool {
    value
        .get("url")
        .and_then(Value::as_str)
        .is_some_and(|stored| percent_decode_str(stored).decode_utf8_lossy() == url)
}

/// Finds the first session entry for `url` and returns its title.
///
/// A matching entry without a string `title` yields an empty title.
pub fn find_title(data: &Value, url: &str) -> Option<String> {
    find_first(data, &|value| has_matching_url(value, url)).map(|entry| {
        entry
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    })
}
