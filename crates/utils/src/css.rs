//! Conditional CSS class string builder.

/// One entry of a class list: a literal class or a group of flagged classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssClass {
    Name(String),
    Conditional(Vec<(String, bool)>),
}

impl From<&str> for CssClass {
    fn from(name: &str) -> Self {
        CssClass::Name(name.to_string())
    }
}

impl From<String> for CssClass {
    fn from(name: String) -> Self {
        CssClass::Name(name)
    }
}

impl From<Vec<(&str, bool)>> for CssClass {
    fn from(pairs: Vec<(&str, bool)>) -> Self {
        CssClass::Conditional(pairs.into_iter().map(|(k, on)| (k.to_string(), on)).collect())
    }
}

impl<const N: usize> From<[(&str, bool); N]> for CssClass {
    fn from(pairs: [(&str, bool); N]) -> Self {
        CssClass::from(Vec::from(pairs))
    }
}

/// Canonical array-index keys (`"0"`, `"17"`, not `"01"`) sort ahead of
/// named keys.
fn index_key(key: &str) -> Option<u32> {
    let n: u32 = key.parse().ok()?;
    (n.to_string() == key && n != u32::MAX).then_some(n)
}

impl CssClass {
    fn render(&self) -> String {
        match self {
            CssClass::Name(name) => name.clone(),
            CssClass::Conditional(pairs) => {
                let (mut indexed, named): (Vec<_>, Vec<_>) = pairs
                    .iter()
                    .filter(|(_, on)| *on)
                    .map(|(key, _)| (index_key(key), key.as_str()))
                    .partition(|(idx, _)| idx.is_some());
                indexed.sort_by_key(|(idx, _)| *idx);
                indexed
                    .into_iter()
                    .chain(named)
                    .map(|(_, key)| key)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}

/// Join the enabled classes into one space-separated string.
///
/// ```
/// use utils::css::{to_css_classes, CssClass};
///
/// let classes = to_css_classes(&[
///     CssClass::from("p-4"),
///     CssClass::from([("font-bold", false), ("bg-red", true), ("1", true)]),
/// ]);
/// assert_eq!(classes, "p-4 1 bg-red");
/// ```
pub fn to_css_classes(classes: &[CssClass]) -> String {
    classes
        .iter()
        .map(CssClass::render)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_key_is_included() {
        assert_eq!(to_css_classes(&["p-4".into(), [("1", true)].into()]), "p-4 1");
    }

    #[test]
    fn true_flags_are_included() {
        assert_eq!(to_css_classes(&["p-4".into(), [("font-bold", true)].into()]), "p-4 font-bold");
    }

    #[test]
    fn false_flags_are_excluded() {
        assert_eq!(to_css_classes(&["p-4".into(), [("font-bold", false)].into()]), "p-4");
    }

    #[test]
    fn index_keys_sort_before_named_keys() {
        let is_active = false;
        let has_error = true;
        let classes = to_css_classes(&[
            "p-4".into(),
            [("font-bold", is_active), ("bg-red", has_error), ("10", true), ("2", true), ("07", true)].into(),
        ]);
        assert_eq!(classes, "p-4 2 10 bg-red 07");
    }

    #[test]
    fn nothing_enabled_gives_empty_string() {
        assert_eq!(to_css_classes(&[[("font-bold", false), ("bg-red", false)].into()]), "");
        assert_eq!(to_css_classes(&["".into(), "m-2".into()]), "m-2");
    }
}
