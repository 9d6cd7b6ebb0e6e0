//! Form control registration: text fields, selects, checks, form groups.

use super::IconEmbedder;
use crate::icons::{icon_markup, rewrite_icons, IconDeclaration, ICON_COLOR_KEY, ICON_KEY};
use crate::options::{merge, Node, Value};
use crate::sink::StyleSink;
use crate::style;

pub(super) fn add_input(sink: &mut dyn StyleSink, options: Option<&Node>) {
    if let Some(options) = options {
        sink.add_base("input", options.clone());
    }
}

pub(super) fn add_textarea(sink: &mut dyn StyleSink, options: Option<&Node>) {
    if let Some(options) = options {
        sink.add_base("textarea", options.clone());
    }
}

pub(super) fn add_multiselect(sink: &mut dyn StyleSink, options: Option<&Node>) {
    if let Some(options) = options {
        sink.add_base("multiselect", options.clone());
    }
}

/// Registers the select element, rewriting its icon pair into an
/// embedded chevron background.
///
/// Two legacy extras ride along under the options: the `::-ms-expand`
/// arrow inherits the icon color, and when a left padding is set, print
/// output in high-contrast mode mirrors it on the right.
pub(super) fn add_select(sink: &mut dyn StyleSink, options: Option<&Node>, embed: IconEmbedder<'_>) {
    let Some(options) = options else {
        return;
    };

    let mut extras = Node::new();
    extras.insert(
        "&::-ms-expand",
        Node::new().set(
            "color",
            options.get(ICON_COLOR_KEY).cloned().unwrap_or(Value::Remove),
        ),
    );
    if let Some(padding_left) = options.get("paddingLeft") {
        extras.insert(
            "@media print and (-ms-high-contrast: active), print and (-ms-high-contrast: none)",
            Node::new().set("paddingRight", padding_left.clone()),
        );
    }
    let body = merge([&extras, options]);

    let rewritten = with_embedded_icon(&body, options, embed, |uri| {
        style! { "backgroundImage": uri }
    });
    sink.add_base("select", rewritten);
}

pub(super) fn add_checkbox(
    sink: &mut dyn StyleSink,
    options: Option<&Node>,
    suffix: &str,
    embed: IconEmbedder<'_>,
) {
    add_check_control(sink, options, "checkbox", suffix, embed);
}

pub(super) fn add_radio(
    sink: &mut dyn StyleSink,
    options: Option<&Node>,
    suffix: &str,
    embed: IconEmbedder<'_>,
) {
    add_check_control(sink, options, "radio", suffix, embed);
}

/// Shared checkbox/radio registration: the embedded icon lands under the
/// checked state rather than the node root, and a set border width is
/// echoed into the legacy `::-ms-check` scope for print.
fn add_check_control(
    sink: &mut dyn StyleSink,
    options: Option<&Node>,
    class: &str,
    suffix: &str,
    embed: IconEmbedder<'_>,
) {
    let Some(options) = options else {
        return;
    };

    let mut extras = Node::new();
    if let Some(border_width) = options.get("borderWidth") {
        extras.insert(
            "&::-ms-check",
            Node::new().set(
                "@media not print",
                Node::new().set("borderWidth", border_width.clone()),
            ),
        );
    }
    let body = merge([&extras, options]);

    let rewritten = with_embedded_icon(&body, options, embed, |uri| {
        style! { "&:checked": { "backgroundImage": uri } }
    });
    sink.add_component(&format!(".{class}{suffix}"), rewritten);
}

/// Runs the icon rewriter over a body with a family-specific fragment
/// shape. The family root's `icon`/`iconColor` serve as ambient defaults
/// for nodes that carry only one of the pair; a node that resolves to no
/// icon at all consumes its reserved keys and contributes nothing.
fn with_embedded_icon(
    body: &Node,
    root: &Node,
    embed: IconEmbedder<'_>,
    fragment: impl Fn(String) -> Node,
) -> Node {
    let root_icon = root.get(ICON_KEY).cloned();
    let root_color = root.get(ICON_COLOR_KEY).cloned();
    rewrite_icons(body, |declaration: IconDeclaration| {
        let color = declaration
            .icon_color
            .or_else(|| root_color.clone())
            .and_then(|value| value.scalar_string())
            .unwrap_or_default();
        let markup = declaration
            .icon
            .or_else(|| root_icon.clone())
            .and_then(|icon| icon_markup(&icon, &color));
        match markup {
            Some(markup) => fragment(format!("url(\"{}\")", embed(&markup))),
            None => Node::new(),
        }
    })
}

pub(super) fn add_form_group(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    let Some(options) = options else {
        return;
    };
    let sub = |key: &str| options.child(key).cloned().unwrap_or_default();
    sink.add_component(&format!(".form-group{suffix}"), sub("group"));
    sink.add_component(&format!(".form-group-inline{suffix}"), sub("inline"));
    sink.add_base("label", sub("label"));
}
