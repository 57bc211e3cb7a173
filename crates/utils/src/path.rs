//! Dot-notation access into nested JSON values.
//!
//! `"items.1.id"` walks object keys and array indices alike.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Look up the value at `path`. An explicit `null` at the end is returned.
pub fn get<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(obj, child)
}

/// Cloned value at `path`, or `default` when the path does not resolve.
pub fn get_or(obj: &Value, path: &str, default: Value) -> Value {
    get(obj, path).cloned().unwrap_or(default)
}

/// Typed lookup; falls back to `default` when the path is missing or the
/// value does not deserialize into `T`.
pub fn get_as<T: DeserializeOwned>(obj: &Value, path: &str, default: T) -> T {
    get(obj, path)
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or(default)
}

/// Mutable slot for `key` inside `container`, creating it if needed.
///
/// A non-index key turns an array into an object keyed by the old indices.
fn slot<'a>(container: &'a mut Value, key: &str) -> &'a mut Value {
    match (container, key.parse::<usize>().ok()) {
        (Value::Array(items), Some(i)) => {
            if i >= items.len() {
                items.resize(i + 1, Value::Null);
            }
            &mut items[i]
        }
        (container, _) => {
            let map: Map<String, Value> = match std::mem::take(container) {
                Value::Object(map) => map,
                Value::Array(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
                _ => Map::new(),
            };
            *container = Value::Object(map);
            &mut container[key]
        }
    }
}

/// Assign `value` at `path`, creating intermediate objects along the way.
///
/// Missing, `null` or scalar intermediates are replaced with `{}`. Array
/// indices past the end pad the array with `null`. Returns `obj`.
pub fn set<'a>(obj: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
    if !(obj.is_object() || obj.is_array()) {
        *obj = Value::Object(Map::new());
    }

    let keys: Vec<&str> = path.split('.').collect();
    let (last, parents) = match keys.split_last() {
        Some(split) => split,
        None => return obj,
    };

    let mut current: &mut Value = obj;
    for key in parents {
        let next = slot(current, key);
        if !(next.is_object() || next.is_array()) {
            *next = Value::Object(Map::new());
        }
        current = next;
    }
    *slot(current, last) = value;
    obj
}
