//! Rule sinks: where resolved declarations are registered.
//!
//! The generator does not serialize anything itself — it hands finished
//! declaration trees to a [`StyleSink`], the seam the host build
//! pipeline implements. [`RuleRegistry`] is the bundled implementation:
//! it records registrations in order and can render them to CSS text,
//! which is also what the integration tests assert against.

use serde::Serialize;

use crate::options::{Node, Value};

/// The three registration sinks a host pipeline provides.
///
/// Bodies are [`Node`]s. A sink must treat an empty body as a no-op and
/// omit any property whose value is [`Value::Remove`].
pub trait StyleSink {
    /// Registers a low-specificity utility rule.
    fn add_utility(&mut self, name: &str, body: Node);
    /// Registers a rule for a base element selector (`input`, `label`).
    fn add_base(&mut self, selector: &str, body: Node);
    /// Registers a named component rule (`.btn`, `.card-header`).
    fn add_component(&mut self, name: &str, body: Node);
}

/// One recorded registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rule {
    /// The registered name or selector.
    pub name: String,
    /// The declaration tree.
    pub body: Node,
}

/// A [`StyleSink`] that collects registrations in call order.
///
/// # Example
///
/// ```rust
/// use uistrap::{RuleRegistry, StylePlugin};
///
/// let mut rules = RuleRegistry::new();
/// StylePlugin::new().register(&mut rules);
///
/// assert!(rules.component(".btn").is_some());
/// assert!(rules.css().contains(".btn {"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RuleRegistry {
    utilities: Vec<Rule>,
    base: Vec<Rule>,
    components: Vec<Rule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// All utility registrations, in call order.
    pub fn utilities(&self) -> &[Rule] {
        &self.utilities
    }

    /// All base-element registrations, in call order.
    pub fn base(&self) -> &[Rule] {
        &self.base
    }

    /// All component registrations, in call order.
    pub fn components(&self) -> &[Rule] {
        &self.components
    }

    /// The first component registration with the given name.
    pub fn component(&self, name: &str) -> Option<&Node> {
        self.components
            .iter()
            .find(|rule| rule.name == name)
            .map(|rule| &rule.body)
    }

    /// The first base registration with the given selector.
    pub fn base_rule(&self, selector: &str) -> Option<&Node> {
        self.base
            .iter()
            .find(|rule| rule.name == selector)
            .map(|rule| &rule.body)
    }

    /// Names of all component registrations, in call order.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|rule| rule.name.as_str()).collect()
    }

    /// Renders everything registered so far as CSS text.
    ///
    /// Base rules come first, then components, then utilities. Property
    /// names are kebab-cased from their camelCase configuration form;
    /// map-valued keys become nested blocks with the key as written
    /// (pseudo-state scopes and nested selectors pass through verbatim);
    /// [`Value::Remove`] properties are omitted; rules with empty bodies
    /// produce no output.
    pub fn css(&self) -> String {
        let mut out = String::new();
        for rule in self.base.iter().chain(&self.components).chain(&self.utilities) {
            write_rule(&mut out, &rule.name, &rule.body, 0);
        }
        out
    }
}

impl StyleSink for RuleRegistry {
    fn add_utility(&mut self, name: &str, body: Node) {
        self.utilities.push(Rule {
            name: name.to_string(),
            body,
        });
    }

    fn add_base(&mut self, selector: &str, body: Node) {
        self.base.push(Rule {
            name: selector.to_string(),
            body,
        });
    }

    fn add_component(&mut self, name: &str, body: Node) {
        self.components.push(Rule {
            name: name.to_string(),
            body,
        });
    }
}

fn write_rule(out: &mut String, selector: &str, body: &Node, depth: usize) {
    if !has_renderable_content(body) {
        return;
    }
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push_str(selector);
    out.push_str(" {\n");
    for (key, value) in body {
        match value {
            Value::Map(child) => write_rule(out, key, child, depth + 1),
            Value::Remove | Value::Generator(_) => {}
            scalar => {
                if let Some(text) = scalar.scalar_string() {
                    out.push_str(&indent);
                    out.push_str("  ");
                    out.push_str(&kebab_case(key));
                    out.push_str(": ");
                    out.push_str(&text);
                    out.push_str(";\n");
                }
            }
        }
    }
    out.push_str(&indent);
    out.push_str("}\n");
}

fn has_renderable_content(body: &Node) -> bool {
    body.iter().any(|(_, value)| match value {
        Value::Map(child) => has_renderable_content(child),
        Value::Remove | Value::Generator(_) => false,
        _ => true,
    })
}

/// Converts a camelCase property name to its kebab-case CSS form.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_registry_preserves_call_order() {
        let mut rules = RuleRegistry::new();
        rules.add_component(".b", style! { "x": "1" });
        rules.add_component(".a", style! { "x": "2" });
        assert_eq!(rules.component_names(), [".b", ".a"]);
    }

    #[test]
    fn test_component_lookup() {
        let mut rules = RuleRegistry::new();
        rules.add_component(".btn", style! { "color": "red" });
        assert!(rules.component(".btn").is_some());
        assert!(rules.component(".missing").is_none());
    }

    #[test]
    fn test_css_kebab_cases_properties() {
        let mut rules = RuleRegistry::new();
        rules.add_base("input", style! { "backgroundColor": "#fff", "colorAdjust": "exact" });
        let css = rules.css();
        assert!(css.contains("background-color: #fff;"));
        assert!(css.contains("color-adjust: exact;"));
    }

    #[test]
    fn test_css_nests_map_values() {
        let mut rules = RuleRegistry::new();
        rules.add_component(".btn", style! {
            "color": "red",
            "&:hover": { "color": "blue" },
        });
        let css = rules.css();
        assert!(css.contains(".btn {\n"));
        assert!(css.contains("  &:hover {\n"));
        assert!(css.contains("    color: blue;\n"));
    }

    #[test]
    fn test_css_omits_removed_properties() {
        let mut rules = RuleRegistry::new();
        let body = style! { "color": "red" }.set("boxShadow", Value::Remove);
        rules.add_component(".btn", body);
        let css = rules.css();
        assert!(css.contains("color: red;"));
        assert!(!css.contains("box-shadow"));
    }

    #[test]
    fn test_css_skips_empty_bodies() {
        let mut rules = RuleRegistry::new();
        rules.add_component(".empty", Node::new());
        rules.add_component(".removed-only", Node::new().set("x", Value::Remove));
        assert_eq!(rules.css(), "");
    }

    #[test]
    fn test_css_section_order() {
        let mut rules = RuleRegistry::new();
        rules.add_utility(".u", style! { "x": "3" });
        rules.add_component(".c", style! { "x": "2" });
        rules.add_base("b", style! { "x": "1" });
        let css = rules.css();
        let base_at = css.find("b {").unwrap();
        let comp_at = css.find(".c {").unwrap();
        let util_at = css.find(".u {").unwrap();
        assert!(base_at < comp_at && comp_at < util_at);
    }

    #[test]
    fn test_numeric_values_render() {
        let mut rules = RuleRegistry::new();
        rules.add_component(".box", style! { "flexShrink": 0 });
        assert!(rules.css().contains("flex-shrink: 0;"));
    }
}
