//! Cartesian products over lists of values or JSON objects.

use serde_json::{Map, Value};

/// Cartesian product of `arrays`, first array varying slowest.
///
/// An empty `arrays` yields a single empty combination; any empty input
/// array yields no combinations. Mix element types with `serde_json::Value`.
pub fn cross_join<T: Clone>(arrays: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut result: Vec<Vec<T>> = vec![Vec::with_capacity(arrays.len())];
    for array in arrays {
        result = result
            .iter()
            .flat_map(|prefix| {
                array.iter().map(move |item| {
                    let mut combo = prefix.clone();
                    combo.push(item.clone());
                    combo
                })
            })
            .collect();
    }
    result
}

/// Cartesian product of object lists, each combination merged into one object.
///
/// Keys from later arrays override the same keys from earlier ones.
pub fn cross_join_objects(arrays: &[Vec<Map<String, Value>>]) -> Vec<Map<String, Value>> {
    let mut result = vec![Map::new()];
    for array in arrays {
        result = result
            .iter()
            .flat_map(|merged| {
                array.iter().map(move |obj| {
                    let mut combo = merged.clone();
                    combo.extend(obj.iter().map(|(k, v)| (k.clone(), v.clone())));
                    combo
                })
            })
            .collect();
    }
    result
}
