//! Shorthand key expansion.

use super::merge::merge;
use super::value::Node;

/// Separator marking a key as shorthand for several targets.
const KEY_SEPARATOR: &str = ", ";

/// Expands comma-separated top-level keys into one entry per name.
///
/// A key like `"input, textarea"` is split on `", "` and each resulting
/// key is bound to its own deep copy of the value, so one override can
/// cover several component families without repetition. The expanded
/// single-key mappings are folded through [`merge`], so a family named
/// both in a shorthand and on its own ends up with the deep-merged
/// union of the two. Keys without the separator pass through unchanged.
///
/// Only top-level keys are expanded; nested keys are left alone.
///
/// # Example
///
/// ```rust
/// use uistrap::{expand, style};
///
/// let raw = style! { "input, textarea": { "borderColor": "crimson" } };
/// let expanded = expand(&raw);
///
/// assert!(expanded.child("input").is_some());
/// assert!(expanded.child("textarea").is_some());
/// assert!(!expanded.contains_key("input, textarea"));
/// ```
pub fn expand(node: &Node) -> Node {
    let singles: Vec<Node> = node
        .iter()
        .flat_map(|(key, value)| {
            key.split(KEY_SEPARATOR)
                .map(|name| Node::new().set(name, value.clone()))
                .collect::<Vec<_>>()
        })
        .collect();
    merge(&singles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use crate::Value;

    #[test]
    fn test_expands_shorthand_keys() {
        let raw = style! { "a, b": { "x": 1 } };
        let expanded = expand(&raw);
        assert_eq!(expanded.child("a").unwrap(), &style! { "x": 1 });
        assert_eq!(expanded.child("b").unwrap(), &style! { "x": 1 });
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_copies_are_independent() {
        let raw = style! { "a, b": { "x": 1 } };
        let expanded = expand(&raw);
        let mut a = expanded.child("a").unwrap().clone();
        a.insert("x", 99);
        assert_eq!(expanded.child("b").unwrap().get("x"), Some(&Value::Num(1.0)));
    }

    #[test]
    fn test_plain_keys_pass_through() {
        let raw = style! { "button": { "color": "red" } };
        assert_eq!(expand(&raw), raw);
    }

    #[test]
    fn test_shorthand_merges_with_explicit_entry() {
        let raw = style! {
            "a": { "x": "explicit" },
            "a, b": { "y": "shared" },
        };
        let expanded = expand(&raw);
        let a = expanded.child("a").unwrap();
        assert_eq!(a.get("x").and_then(Value::as_str), Some("explicit"));
        assert_eq!(a.get("y").and_then(Value::as_str), Some("shared"));
        assert_eq!(expanded.child("b").unwrap(), &style! { "y": "shared" });
    }

    #[test]
    fn test_comma_without_space_is_not_a_separator() {
        let raw = style! { "a,b": { "x": 1 } };
        let expanded = expand(&raw);
        assert!(expanded.contains_key("a,b"));
        assert_eq!(expanded.len(), 1);
    }

    #[test]
    fn test_nested_keys_untouched() {
        let raw = style! { "card": { "head, foot": { "x": 1 } } };
        let expanded = expand(&raw);
        assert!(expanded.child("card").unwrap().contains_key("head, foot"));
    }

    #[test]
    fn test_empty_input() {
        assert!(expand(&Node::new()).is_empty());
    }
}
