//! Deep merge over configuration trees.

use super::value::{Node, Value};

/// Deep-merges configuration trees, later sources taking precedence.
///
/// The conflict policy, applied key by key:
///
/// - an incoming [`Value::Map`] merges recursively into the existing map
///   at that key (an existing non-map is treated as empty);
/// - any other incoming value — scalars, generators, and notably
///   [`Value::Remove`] — replaces the existing value outright;
/// - keys present only in earlier sources are preserved untouched.
///
/// No key is ever deleted: removal is expressed by overriding with
/// [`Value::Remove`], which sinks later omit. The inputs are never
/// mutated; the result is a fresh tree.
///
/// # Example
///
/// ```rust
/// use uistrap::{merge, style, Value};
///
/// let base = style! { "color": "gray", "&:focus": { "outline": "none" } };
/// let over = style! { "color": "red", "&:focus": { "boxShadow": "ring" } };
/// let merged = merge([&base, &over]);
///
/// assert_eq!(merged.get("color"), Some(&Value::from("red")));
/// let focus = merged.child("&:focus").unwrap();
/// assert!(focus.contains_key("outline"));
/// assert!(focus.contains_key("boxShadow"));
/// ```
pub fn merge<'a, I>(sources: I) -> Node
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut result = Node::new();
    for source in sources {
        merge_into(&mut result, source);
    }
    result
}

fn merge_into(dest: &mut Node, source: &Node) {
    for (key, incoming) in source {
        match incoming {
            Value::Map(child) => {
                let mut base = match dest.remove(key) {
                    Some(Value::Map(existing)) => existing,
                    _ => Node::new(),
                };
                merge_into(&mut base, child);
                dest.insert(key.clone(), Value::Map(base));
            }
            other => dest.insert(key.clone(), other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use proptest::prelude::*;

    #[test]
    fn test_single_source_identity() {
        let node = style! {
            "a": "1",
            "b": { "c": "2", "d": { "e": 3 } },
        };
        assert_eq!(merge([&node]), node);
    }

    #[test]
    fn test_later_source_wins() {
        let a = style! { "color": "gray" };
        let b = style! { "color": "red" };
        assert_eq!(merge([&a, &b]).get("color").and_then(Value::as_str), Some("red"));
    }

    #[test]
    fn test_nested_maps_merge_recursively() {
        let a = style! { "&:focus": { "outline": "none", "borderColor": "blue" } };
        let b = style! { "&:focus": { "borderColor": "red" } };
        let merged = merge([&a, &b]);
        let focus = merged.child("&:focus").unwrap();
        assert_eq!(focus.get("outline").and_then(Value::as_str), Some("none"));
        assert_eq!(focus.get("borderColor").and_then(Value::as_str), Some("red"));
    }

    #[test]
    fn test_remove_overrides_existing_value() {
        let a = style! { "boxShadow": "0 0 0 3px blue" };
        let b = Node::new().set("boxShadow", Value::Remove);
        let merged = merge([&a, &b]);
        assert_eq!(merged.get("boxShadow"), Some(&Value::Remove));
    }

    #[test]
    fn test_map_replaces_scalar() {
        let a = style! { "padding": ".6rem 1rem" };
        let b = style! { "padding": { "top": "1rem" } };
        let merged = merge([&a, &b]);
        assert_eq!(merged.child("padding").unwrap(), &style! { "top": "1rem" });
    }

    #[test]
    fn test_scalar_replaces_map() {
        let a = style! { "padding": { "top": "1rem" } };
        let b = style! { "padding": ".6rem 1rem" };
        let merged = merge([&a, &b]);
        assert_eq!(merged.get("padding").and_then(Value::as_str), Some(".6rem 1rem"));
    }

    #[test]
    fn test_earlier_only_keys_preserved() {
        let a = style! { "display": "block", "appearance": "none" };
        let b = style! { "display": "flex" };
        let merged = merge([&a, &b]);
        assert_eq!(merged.get("appearance").and_then(Value::as_str), Some("none"));
    }

    #[test]
    fn test_inputs_untouched() {
        let a = style! { "x": { "y": "1" } };
        let b = style! { "x": { "z": "2" } };
        let before = (a.clone(), b.clone());
        let _ = merge([&a, &b]);
        assert_eq!((a, b), before);
    }

    #[test]
    fn test_empty_sources() {
        assert!(merge(std::iter::empty::<&Node>()).is_empty());
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            "[a-z]{1,6}".prop_map(Value::Str),
            (0i64..100).prop_map(|n| Value::Num(n as f64)),
            Just(Value::Remove),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|map| {
                    Value::Map(map.into_iter().collect())
                })
        })
    }

    fn node_strategy() -> impl Strategy<Value = Node> {
        prop::collection::btree_map("[a-d]", value_strategy(), 0..4)
            .prop_map(|map| map.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_merge_idempotent_under_reapplication(a in node_strategy(), b in node_strategy()) {
            let once = merge([&a, &b]);
            let twice = merge([&once, &b]);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_single_source_is_identity(a in node_strategy()) {
            prop_assert_eq!(merge([&a]), a);
        }

        #[test]
        fn prop_empty_base_is_identity(a in node_strategy()) {
            prop_assert_eq!(merge([&Node::new(), &a]), a);
        }
    }
}
