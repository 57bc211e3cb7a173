//! "Blank" checks for strings, collections, options and JSON values.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Types that can be empty in a user-facing sense.
///
/// Whitespace-only strings are blank; numbers and booleans never are.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

/// Returns true if `value` is blank.
pub fn blank<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(v) => v.is_blank(),
            None => true,
        }
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

macro_rules! never_blank {
    ($($t:ty),*) => {
        $(impl Blank for $t {
            fn is_blank(&self) -> bool {
                false
            }
        })*
    };
}

never_blank!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_whitespace_strings_are_blank() {
        assert!(blank(""));
        assert!(blank("   "));
        assert!(blank(&String::from("\t\n")));
        assert!(!blank(" x "));
    }

    #[test]
    fn null_and_none_are_blank() {
        assert!(blank(&Value::Null));
        assert!(blank(&None::<String>));
        assert!(blank(&Some("  ")));
        assert!(!blank(&Some(0)));
    }

    #[test]
    fn empty_collections_are_blank() {
        assert!(blank(&json!({})));
        assert!(blank(&json!([])));
        assert!(blank(&Vec::<u8>::new()));
        assert!(blank(&HashMap::<String, i32>::new()));
        assert!(!blank(&vec![1]));
        assert!(!blank(&json!({ "a": null })));
    }

    #[test]
    fn numbers_and_booleans_are_never_blank() {
        assert!(!blank(&0));
        assert!(!blank(&true));
        assert!(!blank(&false));
        assert!(!blank(&json!(0)));
        assert!(!blank(&json!(false)));
    }
}
