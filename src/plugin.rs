//! The plugin entry point: builder plus orchestration.

use std::fmt;

use crate::components;
use crate::options::{resolve, Node};
use crate::sink::StyleSink;
use crate::util::svg_data_uri;

/// Builds and runs one style-generation pass.
///
/// A plugin holds the raw user options (a mapping from variant name to
/// configuration node) and the icon-embedding collaborator. Calling
/// [`register`](StylePlugin::register) resolves the options against the
/// default catalog and emits every component family's rules to the
/// sink — first the `default` variant, then each named variant with a
/// `-{name}` suffix on its rule names.
///
/// Nothing is cached between calls: each `register` builds its trees
/// fresh and hands them off.
///
/// # Example
///
/// ```rust
/// use uistrap::{style, RuleRegistry, StylePlugin};
///
/// let mut rules = RuleRegistry::new();
/// StylePlugin::new()
///     .variant("default", style! { "button": { "color": "tomato" } })
///     .variant("dark", style! { "well": { "background": "#1a202c" } })
///     .register(&mut rules);
///
/// let button = rules.component(".btn").unwrap();
/// assert_eq!(button.get("color").and_then(|v| v.as_str()), Some("tomato"));
/// assert!(rules.component(".well-dark").is_some());
/// ```
pub struct StylePlugin {
    options: Node,
    embed_icon: Box<dyn Fn(&str) -> String>,
}

impl StylePlugin {
    /// Creates a plugin with no user overrides and the bundled
    /// [`svg_data_uri`] icon embedder.
    pub fn new() -> Self {
        Self {
            options: Node::new(),
            embed_icon: Box::new(|markup| svg_data_uri(markup)),
        }
    }

    /// Registers a variant's raw configuration, returning the plugin for
    /// chaining. `"default"` refines the built-in catalog; any other
    /// name defines a named variant that starts from an empty base.
    pub fn variant(mut self, name: &str, options: Node) -> Self {
        self.options.insert(name, options);
        self
    }

    /// Replaces the whole variant mapping at once, e.g. with a node
    /// ingested from JSON.
    pub fn with_options(mut self, options: Node) -> Self {
        self.options = options;
        self
    }

    /// Swaps the icon-embedding collaborator. The default encodes SVG
    /// markup as a `data:` URI; a host pipeline that writes icon assets
    /// elsewhere can substitute its own markup-to-reference function.
    pub fn with_icon_embedder(mut self, embed: impl Fn(&str) -> String + 'static) -> Self {
        self.embed_icon = Box::new(embed);
        self
    }

    /// Resolves the configuration and registers every component family
    /// with the sink.
    pub fn register(&self, sink: &mut dyn StyleSink) {
        let resolved = resolve(&self.options);
        components::register_all(sink, &self.embed_icon, &resolved);
    }
}

impl Default for StylePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StylePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylePlugin")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RuleRegistry;
    use crate::style;

    #[test]
    fn test_default_run_registers_catalog() {
        let mut rules = RuleRegistry::new();
        StylePlugin::new().register(&mut rules);
        assert!(rules.component(".btn").is_some());
        assert!(rules.base_rule("input").is_some());
        assert!(rules.component(".card").is_some());
    }

    #[test]
    fn test_variant_builder_accumulates() {
        let mut rules = RuleRegistry::new();
        StylePlugin::new()
            .variant("dark", style! { "well": { "background": "#000" } })
            .variant("compact", style! { "well": { "padding": "0" } })
            .register(&mut rules);
        assert!(rules.component(".well-dark").is_some());
        assert!(rules.component(".well-compact").is_some());
    }

    #[test]
    fn test_with_options_replaces_mapping() {
        let mut rules = RuleRegistry::new();
        StylePlugin::new()
            .variant("dark", style! { "well": { "background": "#000" } })
            .with_options(style! { "zen": { "well": { "padding": "0" } } })
            .register(&mut rules);
        assert!(rules.component(".well-dark").is_none());
        assert!(rules.component(".well-zen").is_some());
    }

    #[test]
    fn test_custom_icon_embedder() {
        let mut rules = RuleRegistry::new();
        StylePlugin::new()
            .with_icon_embedder(|_| "embedded://icon".to_string())
            .register(&mut rules);
        let select = rules.base_rule("select").unwrap();
        assert_eq!(
            select.get("backgroundImage").and_then(|v| v.as_str()),
            Some("url(\"embedded://icon\")")
        );
    }

    #[test]
    fn test_register_twice_is_deterministic() {
        let plugin = StylePlugin::new().variant("dark", style! { "well": { "background": "#000" } });
        let mut first = RuleRegistry::new();
        let mut second = RuleRegistry::new();
        plugin.register(&mut first);
        plugin.register(&mut second);
        assert_eq!(first, second);
    }
}
