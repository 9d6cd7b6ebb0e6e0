//! Icon declaration rewriting.
//!
//! Select, checkbox and radio options carry two reserved keys — `icon`
//! (literal SVG markup or a color-taking generator) and `iconColor` —
//! that have no meaning to a style sink. The rewriter walks a resolved
//! tree and replaces every node carrying either key with the node a
//! family-specific transform derives from them, typically a
//! `backgroundImage` declaration pointing at an embedded data URI.

use crate::options::{merge, Node, Value};

/// Reserved key holding icon markup or a generator.
pub const ICON_KEY: &str = "icon";

/// Reserved key holding the icon's fill color.
pub const ICON_COLOR_KEY: &str = "iconColor";

/// The pair of reserved values extracted from an icon-bearing node.
///
/// Either field may be absent at the node; transforms supply their own
/// ambient defaults (usually the family root's values) when it is.
#[derive(Clone, Debug, PartialEq)]
pub struct IconDeclaration {
    /// The `icon` value: markup string or generator.
    pub icon: Option<Value>,
    /// The `iconColor` value.
    pub icon_color: Option<Value>,
}

/// Rewrites every icon-bearing node in a tree.
///
/// The tree is visited depth-first. At each map node containing
/// [`ICON_KEY`] or [`ICON_COLOR_KEY`], both reserved keys are extracted
/// and removed, the transform is called with them, and the returned
/// fragment is merged over the remaining siblings with the fragment's
/// keys taking precedence. Nodes without either key pass through
/// unchanged. The rewriter never invokes a generator itself — rendering
/// markup (and choosing ambient defaults) is the transform's business.
///
/// After rewriting, neither reserved key appears anywhere in the result,
/// and no non-icon key has been added or removed.
///
/// # Example
///
/// ```rust
/// use uistrap::{rewrite_icons, style, Value};
///
/// let node = style! {
///     "icon": "<svg/>",
///     "iconColor": "#fff",
///     "borderWidth": "1px",
/// };
/// let rewritten = rewrite_icons(&node, |decl| {
///     assert_eq!(decl.icon.unwrap().as_str(), Some("<svg/>"));
///     style! { "backgroundImage": "url(...)" }
/// });
///
/// assert!(!rewritten.contains_key("icon"));
/// assert!(!rewritten.contains_key("iconColor"));
/// assert_eq!(rewritten.get("borderWidth"), Some(&Value::from("1px")));
/// assert!(rewritten.contains_key("backgroundImage"));
/// ```
pub fn rewrite_icons<F>(tree: &Node, transform: F) -> Node
where
    F: Fn(IconDeclaration) -> Node,
{
    rewrite_node(tree, &transform)
}

fn rewrite_node<F>(node: &Node, transform: &F) -> Node
where
    F: Fn(IconDeclaration) -> Node,
{
    let mut out = Node::new();
    for (key, value) in node {
        match value {
            Value::Map(child) => out.insert(key.clone(), rewrite_node(child, transform)),
            other => out.insert(key.clone(), other.clone()),
        }
    }

    if out.contains_key(ICON_KEY) || out.contains_key(ICON_COLOR_KEY) {
        let declaration = IconDeclaration {
            icon: out.remove(ICON_KEY),
            icon_color: out.remove(ICON_COLOR_KEY),
        };
        let fragment = transform(declaration);
        merge([&out, &fragment])
    } else {
        out
    }
}

/// Renders an icon value to markup for a given color.
///
/// Literal markup passes through untouched; a generator is invoked with
/// the color. Maps and [`Value::Remove`] yield `None`.
pub fn icon_markup(icon: &Value, color: &str) -> Option<String> {
    match icon {
        Value::Generator(generator) => Some(generator.render(color)),
        Value::Str(_) | Value::Num(_) => icon.scalar_string(),
        Value::Map(_) | Value::Remove => None,
    }
}
