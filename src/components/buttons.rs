//! Button registration.

use crate::options::Node;
use crate::sink::StyleSink;

/// The fixed fan-out catalog: one plain class, the solid color set with
/// the link button, and the outline set.
const BUTTON_CLASSES: [&str; 18] = [
    "btn",
    "btn-primary",
    "btn-secondary",
    "btn-success",
    "btn-danger",
    "btn-info",
    "btn-warning",
    "btn-light",
    "btn-dark",
    "btn-link",
    "btn-outline-primary",
    "btn-outline-secondary",
    "btn-outline-success",
    "btn-outline-danger",
    "btn-outline-info",
    "btn-outline-warning",
    "btn-outline-light",
    "btn-outline-dark",
];

/// Registers the resolved button tree under every class target.
///
/// Deliberately unconditional: the same full tree goes out under every
/// name, and the tree's own nested `&.btn-*` scopes differentiate the
/// styling per class. No attempt is made to detect which classes the
/// user customized.
pub(super) fn add_button(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    let Some(options) = options else {
        return;
    };
    for class in BUTTON_CLASSES {
        sink.add_component(&format!(".{class}{suffix}"), options.clone());
    }
}
