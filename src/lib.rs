//! # uistrap — component style rules from design tokens
//!
//! `uistrap` turns a catalog of design tokens plus user-supplied
//! overrides into declarative style rules for the common UI primitives:
//! buttons, inputs, selects, checkboxes, radios, cards, tables, list
//! groups, wells, typography scales and form groups. It is meant to sit
//! inside a styling build pipeline: the pipeline supplies the sinks the
//! rules are registered with, and serializes them however it likes.
//!
//! ## Core Concepts
//!
//! - [`Node`] / [`Value`]: the nested configuration tree everything is
//!   expressed in, built by hand, with the [`style!`] macro, or from
//!   JSON via [`Node::from_json`]
//! - [`merge`]: deep merge with removal-by-[`Value::Remove`] semantics
//! - [`expand`]: `"input, textarea"` shorthand key expansion
//! - [`resolve`]: the default catalog ⊕ user variants
//! - [`rewrite_icons`]: replaces reserved `icon`/`iconColor` declarations
//!   with embedded background images
//! - [`StyleSink`]: the three registration sinks a pipeline implements;
//!   [`RuleRegistry`] is the bundled collecting implementation
//! - [`StylePlugin`]: the one-call entry point driving all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use uistrap::{style, RuleRegistry, StylePlugin};
//!
//! let mut rules = RuleRegistry::new();
//! StylePlugin::new()
//!     // Refine the defaults...
//!     .variant("default", style! {
//!         "button": { "color": "tomato" },
//!     })
//!     // ...and add a named variant on top.
//!     .variant("dark", style! {
//!         "well": { "background": "#1a202c" },
//!     })
//!     .register(&mut rules);
//!
//! // The button catalog fanned out under every class target:
//! assert!(rules.component(".btn").is_some());
//! assert!(rules.component(".btn-outline-dark").is_some());
//! // The named variant registered with a suffixed name:
//! assert!(rules.component(".well-dark").is_some());
//! // And everything renders to CSS text if you want it to:
//! assert!(rules.css().contains("color: tomato;"));
//! ```
//!
//! ## Variants
//!
//! User options are keyed by variant name. The `default` variant is
//! deep-merged over the built-in catalog; every other variant starts
//! from an empty base and only contains what you write, registering its
//! rules with a `-{name}` suffix. Overriding a default with
//! [`Value::Remove`] (or JSON `null`) drops the property from the final
//! output.

mod catalog;
mod components;
mod error;
mod icons;
pub mod options;
mod plugin;
mod sink;
mod tokens;
mod util;

pub use catalog::default_options;
pub use error::ConfigError;
pub use icons::{icon_markup, rewrite_icons, IconDeclaration, ICON_COLOR_KEY, ICON_KEY};
pub use options::{expand, merge, resolve, IconGenerator, Node, ResolvedOptions, Value};
pub use plugin::StylePlugin;
pub use sink::{Rule, RuleRegistry, StyleSink};
pub use tokens::DesignTokens;
pub use util::{hex_to_rgba, svg_data_uri};
