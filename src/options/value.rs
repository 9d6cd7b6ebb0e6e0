//! The configuration tree type.
//!
//! Everything in this crate flows through [`Node`], a nested string-keyed
//! mapping whose values are the [`Value`] union: scalars, nested nodes,
//! icon generators, or the explicit-removal sentinel. Keys are opaque to
//! the tree — style properties, pseudo-state scopes (`&:focus`) and
//! nested selectors are all just keys; only the sink gives them meaning.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ConfigError;

/// A callable that renders icon markup for a given color.
///
/// Generators appear only at the reserved `icon` leaf of a node and are
/// consumed by icon rewriting before any rule body reaches a sink.
#[derive(Clone)]
pub struct IconGenerator(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl IconGenerator {
    /// Wraps a closure taking an icon color and returning markup.
    pub fn new(render: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Invokes the generator with the given color.
    pub fn render(&self, color: &str) -> String {
        (self.0)(color)
    }
}

impl fmt::Debug for IconGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IconGenerator(..)")
    }
}

impl PartialEq for IconGenerator {
    fn eq(&self, other: &Self) -> bool {
        // Two generators are equal only when they are clones of the same
        // closure; structural comparison of functions is not possible.
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A value in a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string scalar (`"block"`, `"1px solid red"`).
    Str(String),
    /// A numeric scalar (`0`, `1.5`).
    Num(f64),
    /// A nested node.
    Map(Node),
    /// An icon generator, valid only at the reserved `icon` leaf.
    Generator(IconGenerator),
    /// Explicit removal: overrides an inherited value with "nothing".
    ///
    /// Sinks omit properties whose value is `Remove`, so overriding a
    /// default with `Remove` drops the property from the final output
    /// without deleting the key mid-merge.
    Remove,
}

impl Value {
    /// Shorthand for building a [`Value::Generator`].
    pub fn generator(render: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Value::Generator(IconGenerator::new(render))
    }

    /// Returns the string scalar, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested node, if this is one.
    pub fn as_map(&self) -> Option<&Node> {
        match self {
            Value::Map(node) => Some(node),
            _ => None,
        }
    }

    /// True when this value is a nested node.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True when this value is the removal sentinel.
    pub fn is_remove(&self) -> bool {
        matches!(self, Value::Remove)
    }

    /// Renders a scalar to its textual form; `None` for non-scalars.
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Num(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Num(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Map(node)
    }
}

/// A nested, string-keyed configuration tree.
///
/// Nodes are immutable-by-convention: the merge engine, key expander and
/// icon rewriter all return fresh trees. Iteration order is the sorted
/// key order, making every pass over a node deterministic.
///
/// # Example
///
/// ```rust
/// use uistrap::{Node, Value};
///
/// let focus = Node::new()
///     .set("outline", "none")
///     .set("borderColor", "#63b3ed");
/// let input = Node::new()
///     .set("display", "block")
///     .set("&:focus", focus);
///
/// assert_eq!(input.len(), 2);
/// assert!(input.child("&:focus").is_some());
/// assert_eq!(input.get("display"), Some(&Value::from("block")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    entries: BTreeMap<String, Value>,
}

impl Node {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the updated node for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Inserts an entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes an entry, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up a map-valued child by key.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.get(key).and_then(Value::as_map)
    }

    /// True when the key is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Iterates keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Builds a node from a JSON document.
    ///
    /// The root must be an object. `null` becomes [`Value::Remove`] so a
    /// JSON override can blank out an inherited default. Arrays have no
    /// tree representation and are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uistrap::Node;
    ///
    /// let json = serde_json::json!({
    ///     "button": { "color": "tomato", "boxShadow": null }
    /// });
    /// let node = Node::from_json(&json).unwrap();
    /// assert!(node.child("button").unwrap().get("boxShadow").unwrap().is_remove());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        match value {
            serde_json::Value::Object(map) => from_json_object(map, ""),
            other => Err(ConfigError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    /// Converts the node to JSON.
    ///
    /// [`Value::Remove`] maps to `null`. Generators also map to `null`:
    /// they are consumed by icon rewriting before a body reaches a sink,
    /// so a serialized tree never carries one in practice.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value_to_json(value)))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn from_json_object(
    map: &serde_json::Map<String, serde_json::Value>,
    path: &str,
) -> Result<Node, ConfigError> {
    let mut node = Node::new();
    for (key, value) in map {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        node.insert(key.clone(), from_json_value(value, &child_path)?);
    }
    Ok(node)
}

fn from_json_value(value: &serde_json::Value, path: &str) -> Result<Value, ConfigError> {
    match value {
        serde_json::Value::Null => Ok(Value::Remove),
        serde_json::Value::Bool(b) => Ok(Value::Str(b.to_string())),
        serde_json::Value::Number(n) => Ok(Value::Num(n.as_f64().unwrap_or(0.0))),
        serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
        serde_json::Value::Array(_) => Err(ConfigError::UnsupportedValue {
            path: path.to_string(),
        }),
        serde_json::Value::Object(map) => Ok(Value::Map(from_json_object(map, path)?)),
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Num(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Map(node) => node.to_json(),
        Value::Generator(_) | Value::Remove => serde_json::Value::Null,
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::Map(node) => node.serialize(serializer),
            Value::Generator(_) | Value::Remove => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Node::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Builds a [`Node`] from a nested literal.
///
/// Keys are string literals; values are expressions convertible to
/// [`Value`], or nested `{ ... }` blocks which become child nodes.
///
/// # Example
///
/// ```rust
/// use uistrap::style;
///
/// let button = style! {
///     "display": "inline-block",
///     "&:hover": {
///         "color": "#718096",
///     },
/// };
/// assert_eq!(button.len(), 2);
/// assert!(button.child("&:hover").is_some());
/// ```
#[macro_export]
macro_rules! style {
    () => { $crate::Node::new() };
    ($($entries:tt)+) => {{
        let mut node = $crate::Node::new();
        $crate::__style_entries!(node; $($entries)+);
        node
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __style_entries {
    ($node:ident;) => {};
    ($node:ident; $key:literal : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $node.insert($key, $crate::style! { $($inner)* });
        $crate::__style_entries!($node; $($($rest)*)?);
    };
    ($node:ident; $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $node.insert($key, $value);
        $crate::__style_entries!($node; $($($rest)*)?);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chains() {
        let node = Node::new().set("a", "1").set("b", Node::new().set("c", 2));
        assert_eq!(node.get("a"), Some(&Value::from("1")));
        assert_eq!(
            node.child("b").and_then(|b| b.get("c")),
            Some(&Value::Num(2.0))
        );
    }

    #[test]
    fn test_child_rejects_scalars() {
        let node = Node::new().set("a", "scalar");
        assert!(node.child("a").is_none());
    }

    #[test]
    fn test_style_macro_nesting() {
        let node = style! {
            "display": "block",
            "&:focus": {
                "outline": "none",
                "nested": {
                    "depth": 3,
                },
            },
        };
        assert_eq!(node.get("display").and_then(Value::as_str), Some("block"));
        let focus = node.child("&:focus").unwrap();
        assert_eq!(focus.get("outline").and_then(Value::as_str), Some("none"));
        assert_eq!(
            focus.child("nested").and_then(|n| n.get("depth")),
            Some(&Value::Num(3.0))
        );
    }

    #[test]
    fn test_style_macro_empty() {
        assert!(style! {}.is_empty());
    }

    #[test]
    fn test_generator_equality_is_identity() {
        let a = Value::generator(|color| format!("<svg fill=\"{color}\"/>"));
        let b = a.clone();
        let c = Value::generator(|color| format!("<svg fill=\"{color}\"/>"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generator_render() {
        let gen = IconGenerator::new(|color| format!("fill={color}"));
        assert_eq!(gen.render("#fff"), "fill=#fff");
    }

    #[test]
    fn test_from_json_round_trip() {
        let json = serde_json::json!({
            "button": { "color": "red", "flexShrink": 0, "boxShadow": null }
        });
        let node = Node::from_json(&json).unwrap();
        let button = node.child("button").unwrap();
        assert_eq!(button.get("color").and_then(Value::as_str), Some("red"));
        assert_eq!(button.get("flexShrink"), Some(&Value::Num(0.0)));
        assert!(button.get("boxShadow").unwrap().is_remove());
    }

    #[test]
    fn test_from_json_rejects_scalar_root() {
        let err = Node::from_json(&serde_json::json!("nope")).unwrap_err();
        assert_eq!(err, ConfigError::NotAnObject { found: "string" });
    }

    #[test]
    fn test_from_json_rejects_arrays_with_path() {
        let json = serde_json::json!({ "button": { "padding": [1, 2] } });
        let err = Node::from_json(&json).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedValue {
                path: "button.padding".to_string()
            }
        );
    }

    #[test]
    fn test_serialize_remove_as_null() {
        let node = Node::new().set("gone", Value::Remove).set("kept", "x");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({ "gone": null, "kept": "x" }));
    }

    #[test]
    fn test_deserialize_via_serde() {
        let node: Node = serde_json::from_str(r#"{"a": {"b": "c"}}"#).unwrap();
        assert_eq!(
            node.child("a").and_then(|a| a.get("b")).and_then(Value::as_str),
            Some("c")
        );
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Value::Num(0.0).scalar_string().unwrap(), "0");
        assert_eq!(Value::Num(1.5).scalar_string().unwrap(), "1.5");
        assert_eq!(Value::from(42).scalar_string().unwrap(), "42");
    }
}
