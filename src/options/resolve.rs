//! Resolution of user overrides against the default catalog.

use std::collections::BTreeMap;

use super::expand::expand;
use super::merge::merge;
use super::value::{Node, Value};
use crate::catalog::default_options;

/// The fully resolved configuration, keyed by variant name.
///
/// The `default` variant is always present and holds the default catalog
/// deep-merged with whatever the user registered under `default`. Every
/// other variant holds exactly what the user wrote for it — named
/// variants start from an empty base and are not required to redeclare
/// the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    default: Node,
    named: BTreeMap<String, Node>,
}

impl ResolvedOptions {
    /// The `default` variant: catalog ⊕ user overrides.
    pub fn default_variant(&self) -> &Node {
        &self.default
    }

    /// Looks up a variant by name; `"default"` is always present.
    pub fn get(&self, name: &str) -> Option<&Node> {
        if name == "default" {
            Some(&self.default)
        } else {
            self.named.get(name)
        }
    }

    /// Iterates the non-default variants in sorted name order.
    pub fn named_variants(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.named.iter()
    }
}

/// Resolves raw user options into a [`ResolvedOptions`].
///
/// The input maps variant names to raw (un-expanded) configuration
/// nodes. Each variant's node is first run through [`expand`], then the
/// whole mapping is merged over `{ default: <catalog> }` — so the user's
/// `default` entry refines the catalog while every other variant passes
/// through untouched. A variant whose value is not a map resolves to an
/// empty variant.
///
/// # Example
///
/// ```rust
/// use uistrap::{resolve, style, Value};
///
/// let user = style! {
///     "default": { "button": { "color": "tomato" } },
///     "dark": { "button": { "color": "black" } },
/// };
/// let resolved = resolve(&user);
///
/// let button = resolved.default_variant().child("button").unwrap();
/// assert_eq!(button.get("color").and_then(Value::as_str), Some("tomato"));
/// // Catalog values the user did not touch survive:
/// assert_eq!(button.get("display").and_then(Value::as_str), Some("inline-block"));
/// // Named variants carry only what the user wrote:
/// let dark = resolved.get("dark").unwrap();
/// assert_eq!(dark.child("button").unwrap().len(), 1);
/// ```
pub fn resolve(user: &Node) -> ResolvedOptions {
    let mut expanded = Node::new();
    for (name, value) in user {
        let variant = match value {
            Value::Map(raw) => expand(raw),
            _ => Node::new(),
        };
        expanded.insert(name.clone(), variant);
    }

    let base = Node::new().set("default", default_options());
    let merged = merge([&base, &expanded]);

    let mut default = Node::new();
    let mut named = BTreeMap::new();
    for (name, value) in &merged {
        let node = value.as_map().cloned().unwrap_or_default();
        if name == "default" {
            default = node;
        } else {
            named.insert(name.clone(), node);
        }
    }
    ResolvedOptions { default, named }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_empty_input_yields_catalog() {
        let resolved = resolve(&Node::new());
        assert_eq!(resolved.default_variant(), &default_options());
        assert_eq!(resolved.named_variants().count(), 0);
    }

    #[test]
    fn test_default_override_merges_into_catalog() {
        let user = style! { "default": { "button": { "color": "red" } } };
        let resolved = resolve(&user);
        let button = resolved.default_variant().child("button").unwrap();
        assert_eq!(button.get("color").and_then(Value::as_str), Some("red"));

        // Every other button property is unchanged from the catalog.
        let stock = default_options();
        let stock_button = stock.child("button").unwrap();
        for (key, value) in stock_button {
            if key != "color" {
                assert_eq!(button.get(key), Some(value), "property {key} changed");
            }
        }
    }

    #[test]
    fn test_named_variant_does_not_inherit_catalog() {
        let user = style! { "dark": { "button": { "color": "black" } } };
        let resolved = resolve(&user);

        assert_eq!(resolved.default_variant(), &default_options());
        let dark = resolved.get("dark").unwrap();
        assert_eq!(dark, &style! { "button": { "color": "black" } });
    }

    #[test]
    fn test_variant_keys_are_expanded() {
        let user = style! { "compact": { "input, textarea": { "paddingTop": "0" } } };
        let resolved = resolve(&user);
        let compact = resolved.get("compact").unwrap();
        assert!(compact.child("input").is_some());
        assert!(compact.child("textarea").is_some());
        assert!(!compact.contains_key("input, textarea"));
    }

    #[test]
    fn test_non_map_variant_resolves_empty() {
        let user = Node::new().set("broken", "not a mapping");
        let resolved = resolve(&user);
        assert!(resolved.get("broken").unwrap().is_empty());
    }

    #[test]
    fn test_get_default_by_name() {
        let resolved = resolve(&Node::new());
        assert_eq!(resolved.get("default"), Some(resolved.default_variant()));
        assert_eq!(resolved.get("missing"), None);
    }

    #[test]
    fn test_named_variants_sorted() {
        let user = style! {
            "zeta": { "well": { "padding": "0" } },
            "alpha": { "well": { "padding": "1rem" } },
        };
        let resolved = resolve(&user);
        let names: Vec<&String> = resolved.named_variants().map(|(name, _)| name).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
