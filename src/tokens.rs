//! The default design-token catalog.
//!
//! Tokens are the scalar design values — colors, spacing, type scales,
//! borders, shadows — the default component catalog is written against.
//! They are data, not logic: the only operation is lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

static STANDARD: Lazy<DesignTokens> = Lazy::new(DesignTokens::default);

/// The design-token table: named scalar values grouped by category.
///
/// Accessors are total: an unknown token name resolves to the CSS
/// `inherit` keyword rather than failing, consistent with the crate's
/// no-validation stance — a typo surfaces as odd output, not an abort.
///
/// # Example
///
/// ```rust
/// use uistrap::DesignTokens;
///
/// let tokens = DesignTokens::standard();
/// assert_eq!(tokens.color("blue-500"), "#4299e1");
/// assert_eq!(tokens.spacing("4"), "1rem");
/// assert_eq!(tokens.lookup("fontSize.base"), Some("1rem"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignTokens {
    /// Flat color palette: `white`, `gray-100`…`gray-900`, `blue-400`, …
    pub colors: BTreeMap<String, String>,
    /// Spacing scale in rem, keyed `1`…`10` (plus the negative `-2`).
    pub spacing: BTreeMap<String, String>,
    /// Font-size scale: `xs`…`4xl` plus the display sizes `d-1`…`d-4`.
    pub font_size: BTreeMap<String, String>,
    /// Font weights: `light`, `normal`, `medium`.
    pub font_weight: BTreeMap<String, String>,
    /// Line heights: `none`, `tight`, `normal`, `loose`.
    pub line_height: BTreeMap<String, String>,
    /// Border widths, keyed `default`.
    pub border_width: BTreeMap<String, String>,
    /// Border radii: `default`, `md`.
    pub border_radius: BTreeMap<String, String>,
    /// Border colors, keyed `default`.
    pub border_color: BTreeMap<String, String>,
    /// Box shadows: `outline`, `sm`.
    pub box_shadow: BTreeMap<String, String>,
    /// Transition timing functions, keyed `in-out`.
    pub transition_timing: BTreeMap<String, String>,
}

impl DesignTokens {
    /// The process-wide default token table.
    pub fn standard() -> &'static DesignTokens {
        &STANDARD
    }

    /// Looks up a token by dotted path, e.g. `colors.gray-500` or
    /// `fontSize.base`. Category names follow the configuration-facing
    /// camelCase spelling.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let (category, name) = path.split_once('.')?;
        let map = match category {
            "colors" => &self.colors,
            "spacing" | "padding" | "margin" => &self.spacing,
            "fontSize" => &self.font_size,
            "fontWeight" => &self.font_weight,
            "lineHeight" => &self.line_height,
            "borderWidth" => &self.border_width,
            "borderRadius" => &self.border_radius,
            "borderColor" => &self.border_color,
            "boxShadow" => &self.box_shadow,
            "transitionTimingFunction" => &self.transition_timing,
            _ => return None,
        };
        map.get(name).map(String::as_str)
    }

    /// A palette color by name (`white`, `gray-700`, `blue-400`, …).
    pub fn color(&self, name: &str) -> &str {
        token(&self.colors, name)
    }

    /// A spacing step by name (`2`, `4`, `10`, `-2`).
    pub fn spacing(&self, name: &str) -> &str {
        token(&self.spacing, name)
    }

    /// A font size by name (`base`, `xs`, `2xl`, `d-1`).
    pub fn font_size(&self, name: &str) -> &str {
        token(&self.font_size, name)
    }

    /// A font weight by name (`light`, `normal`, `medium`).
    pub fn font_weight(&self, name: &str) -> &str {
        token(&self.font_weight, name)
    }

    /// A line height by name (`none`, `tight`, `normal`, `loose`).
    pub fn line_height(&self, name: &str) -> &str {
        token(&self.line_height, name)
    }

    /// A border width by name (`default`).
    pub fn border_width(&self, name: &str) -> &str {
        token(&self.border_width, name)
    }

    /// A border radius by name (`default`, `md`).
    pub fn border_radius(&self, name: &str) -> &str {
        token(&self.border_radius, name)
    }

    /// A border color by name (`default`).
    pub fn border_color(&self, name: &str) -> &str {
        token(&self.border_color, name)
    }

    /// A box shadow by name (`outline`, `sm`).
    pub fn box_shadow(&self, name: &str) -> &str {
        token(&self.box_shadow, name)
    }

    /// A transition timing function by name (`in-out`).
    pub fn transition_timing(&self, name: &str) -> &str {
        token(&self.transition_timing, name)
    }
}

fn token<'a>(map: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    map.get(name).map_or("inherit", String::as_str)
}

fn preset(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            colors: preset(&[
                ("white", "#fff"),
                ("gray-100", "#f7fafc"),
                ("gray-200", "#edf2f7"),
                ("gray-300", "#e2e8f0"),
                ("gray-400", "#cbd5e0"),
                ("gray-500", "#a0aec0"),
                ("gray-600", "#718096"),
                ("gray-700", "#4a5568"),
                ("gray-800", "#2d3748"),
                ("gray-900", "#1a202c"),
                ("blue-100", "#ebf8ff"),
                ("blue-200", "#bee3f8"),
                ("blue-300", "#90cdf4"),
                ("blue-400", "#63b3ed"),
                ("blue-500", "#4299e1"),
                ("blue-600", "#3182ce"),
                ("blue-900", "#2a4365"),
                ("green-300", "#9ae6b4"),
                ("green-400", "#68d391"),
                ("green-500", "#48bb78"),
                ("green-600", "#38a169"),
                ("red-300", "#feb2b2"),
                ("red-400", "#fc8181"),
                ("red-500", "#f56565"),
                ("red-600", "#e53e3e"),
                ("yellow-300", "#faf089"),
                ("yellow-400", "#f6e05e"),
                ("yellow-500", "#ecc94b"),
                ("yellow-600", "#d69e2e"),
            ]),
            spacing: preset(&[
                ("-2", "-0.5rem"),
                ("1", "0.25rem"),
                ("2", "0.5rem"),
                ("3", "0.75rem"),
                ("4", "1rem"),
                ("5", "1.25rem"),
                ("10", "2.5rem"),
            ]),
            font_size: preset(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("base", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
                ("d-1", "6rem"),
                ("d-2", "5.5rem"),
                ("d-3", "4.5rem"),
                ("d-4", "3.5rem"),
            ]),
            font_weight: preset(&[("light", "300"), ("normal", "400"), ("medium", "500")]),
            line_height: preset(&[
                ("none", "1"),
                ("tight", "1.25"),
                ("normal", "1.5"),
                ("loose", "2"),
            ]),
            border_width: preset(&[("default", "1px")]),
            border_radius: preset(&[("default", "0.25rem"), ("md", "0.375rem")]),
            border_color: preset(&[("default", "#e2e8f0")]),
            box_shadow: preset(&[
                ("outline", "0 0 0 3px rgba(66,153,225,0.5)"),
                ("sm", "0 1px 2px 0 rgba(0,0,0,0.05)"),
            ]),
            transition_timing: preset(&[("in-out", "cubic-bezier(0.4, 0, 0.2, 1)")]),
        }
    }
}
