//! The default component catalog.
//!
//! One hard-coded literal per component family, written against the
//! token table in [`crate::tokens`]. This is data: the resolution engine
//! merges user overrides over it, and the registrars slice it per
//! family. Keys follow the camelCase property convention the sinks
//! expect; keys starting with `&` or naming elements are nested scopes.

use once_cell::sync::Lazy;

use crate::options::{Node, Value};
use crate::style;
use crate::tokens::DesignTokens;
use crate::util::hex_to_rgba;

static CATALOG: Lazy<Node> = Lazy::new(build_catalog);

/// The full default options tree, keyed by component family.
///
/// The catalog is a static literal built once; every call returns a
/// fresh clone for the resolution pass to merge over.
pub fn default_options() -> Node {
    CATALOG.clone()
}

fn build_catalog() -> Node {
    let t = DesignTokens::standard();
    Node::new()
        .set("input", text_field(t, true))
        .set("textarea", text_field(t, true))
        .set("multiselect", text_field(t, false))
        .set("select", select(t))
        .set("checkbox", check_control(t, false))
        .set("radio", check_control(t, true))
        .set("formGroup", form_group(t))
        .set("button", button(t))
        .set("well", well(t))
        .set("typography", typography(t))
        .set("table", table(t))
        .set("cards", cards(t))
        .set("listGroup", list_group(t))
}

/// The shared focus treatment for form controls.
fn control_focus(t: &DesignTokens) -> Node {
    style! {
        "outline": "none",
        "boxShadow": t.box_shadow("outline"),
        "borderColor": t.color("blue-400"),
    }
}

fn text_field(t: &DesignTokens, placeholder: bool) -> Node {
    let mut field = style! {
        "display": "block",
        "appearance": "none",
        "backgroundColor": t.color("white"),
        "borderColor": t.border_color("default"),
        "borderWidth": t.border_width("default"),
        "borderRadius": t.border_radius("default"),
        "paddingTop": t.spacing("2"),
        "paddingRight": t.spacing("3"),
        "paddingBottom": t.spacing("2"),
        "paddingLeft": t.spacing("3"),
        "fontSize": t.font_size("base"),
        "lineHeight": t.line_height("normal"),
        "&:focus": control_focus(t),
    };
    if placeholder {
        field.insert(
            "&::placeholder",
            style! { "color": t.color("gray-500"), "opacity": "1" },
        );
    }
    field
}

fn select(t: &DesignTokens) -> Node {
    style! {
        "display": "block",
        "appearance": "none",
        "colorAdjust": "exact",
        "&::-ms-expand": {
            // The select padding already clears the chevron; a border
            // here adds stray whitespace around it.
            "border": "none",
            "@media not print": {
                "display": "none",
            },
        },
        "backgroundRepeat": "no-repeat",
        "backgroundColor": t.color("white"),
        "borderColor": t.border_color("default"),
        "borderWidth": t.border_width("default"),
        "borderRadius": t.border_radius("default"),
        "paddingTop": t.spacing("2"),
        "paddingRight": t.spacing("10"),
        "paddingBottom": t.spacing("2"),
        "paddingLeft": t.spacing("3"),
        "fontSize": t.font_size("base"),
        "lineHeight": t.line_height("normal"),
        "backgroundPosition": format!("right {} center", t.spacing("2")),
        "backgroundSize": "1.5em 1.5em",
        "iconColor": t.color("gray-500"),
        "icon": Value::generator(|color| {
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"{color}\">\
                 <path d=\"M15.3 9.3a1 1 0 0 1 1.4 1.4l-4 4a1 1 0 0 1-1.4 0l-4-4a1 1 0 0 1 1.4-1.4l3.3 3.29 3.3-3.3z\"/></svg>"
            )
        }),
        "&:focus": control_focus(t),
    }
}

fn check_control(t: &DesignTokens, round: bool) -> Node {
    let mut control = style! {
        "appearance": "none",
        "colorAdjust": "exact",
        "&::-ms-check": {
            "@media not print": {
                // Hide the native glyph.
                "color": "transparent",
                "background": "inherit",
                "borderColor": "inherit",
                "borderRadius": "inherit",
            },
        },
        "display": "inline-block",
        "verticalAlign": "middle",
        "backgroundOrigin": "border-box",
        "userSelect": "none",
        "flexShrink": 0,
        "height": "1em",
        "width": "1em",
        "color": t.color("blue-500"),
        "backgroundColor": t.color("white"),
        "borderColor": t.border_color("default"),
        "borderWidth": t.border_width("default"),
        "iconColor": t.color("white"),
        "&:focus": control_focus(t),
        "&:checked": {
            "borderColor": "transparent",
            "backgroundColor": "currentColor",
            "backgroundSize": "100% 100%",
            "backgroundPosition": "center",
            "backgroundRepeat": "no-repeat",
        },
    };
    if round {
        control.insert("borderRadius", "100%");
        control.insert(
            "icon",
            Value::generator(|color| {
                format!(
                    "<svg viewBox=\"0 0 16 16\" fill=\"{color}\" xmlns=\"http://www.w3.org/2000/svg\">\
                     <circle cx=\"8\" cy=\"8\" r=\"3\"/></svg>"
                )
            }),
        );
    } else {
        control.insert("borderRadius", t.border_radius("default"));
        control.insert(
            "icon",
            Value::generator(|color| {
                format!(
                    "<svg viewBox=\"0 0 16 16\" fill=\"{color}\" xmlns=\"http://www.w3.org/2000/svg\">\
                     <path d=\"M5.707 7.293a1 1 0 0 0-1.414 1.414l2 2a1 1 0 0 0 1.414 0l4-4a1 1 0 0 0-1.414-1.414L7 8.586 5.707 7.293z\"/></svg>"
                )
            }),
        );
    }
    control
}

fn form_group(t: &DesignTokens) -> Node {
    style! {
        "group": {
            "display": "block",
            "marginBottom": t.spacing("4"),
        },
        "inline": {
            "display": "flex",
            "flexDirection": "row",
            "alignItems": "center",
            "marginBottom": t.spacing("4"),
            "> label": {
                "marginBottom": 0,
                "marginRight": t.spacing("4"),
            },
        },
        "label": {
            "color": t.color("gray-700"),
            "fontWeight": t.font_weight("medium"),
            "fontSize": t.font_size("base"),
            "display": "inline-block",
            "marginBottom": t.spacing("2"),
        },
    }
}

/// A focus ring shadow in the given color.
fn ring(color: &str) -> String {
    format!("0 0 0 3px {}", hex_to_rgba(color, 0.45))
}

/// Hover treatment shifting both background and border to one color.
fn hover_shift(color: &str) -> Node {
    style! { "backgroundColor": color, "borderColor": color }
}

fn solid_button(bg: &str, text: &str, focus: &str, hover: Node, active: &str) -> Node {
    style! {
        "backgroundColor": bg,
        "borderColor": bg,
        "color": text,
        "&:focus": {
            "outline": 0,
            "borderColor": focus,
            "boxShadow": ring(focus),
        },
        "&:hover": hover,
        "&:active": {
            "backgroundColor": hex_to_rgba(active, 1.0),
        },
    }
}

fn outline_button(t: &DesignTokens, color: &str, focus: &str, focus_fills: bool) -> Node {
    let mut focus_scope = style! {
        "outline": 0,
        "borderColor": focus,
        "boxShadow": ring(focus),
    };
    if focus_fills {
        focus_scope.insert("backgroundColor", color);
    }
    style! {
        "backgroundColor": "transparent",
        "borderColor": color,
        "color": color,
        "&:focus": focus_scope,
        "&:hover": {
            "backgroundColor": color,
            "color": t.color("white"),
        },
        "&:active": {
            "backgroundColor": color,
        },
    }
}

fn button(t: &DesignTokens) -> Node {
    let timing = t.transition_timing("in-out");
    let transition = format!(
        "color 150ms {timing},background-color 150ms {timing},\
         border-color 150ms {timing},box-shadow 150ms {timing}"
    );

    style! {
        "display": "inline-block",
        "fontWeight": t.font_weight("medium"),
        "color": t.color("gray-700"),
        "textAlign": "center",
        "verticalAlign": "middle",
        "userSelect": "none",
        "backgroundColor": t.color("white"),
        "borderWidth": t.border_width("default"),
        "borderStyle": "solid",
        "borderColor": t.border_color("default"),
        "padding": ".6rem 1rem",
        "fontSize": t.font_size("base"),
        "lineHeight": t.line_height("tight"),
        "borderRadius": t.border_radius("md"),
        "transition": transition,

        "&:focus": {
            "outline": 0,
            "borderColor": t.color("blue-300"),
            "boxShadow": ring(t.color("blue-300")),
        },
        "&:hover": {
            "color": t.color("gray-600"),
        },
        "&:active": {
            "backgroundColor": hex_to_rgba(t.color("gray-100"), 1.0),
        },

        "&.btn-sm": {
            "fontSize": t.font_size("xs"),
            "lineHeight": t.line_height("none"),
            "padding": ".25rem 1rem",
        },
        "&.btn-lg": {
            "fontSize": t.font_size("2xl"),
            "lineHeight": t.line_height("loose"),
            "padding": ".25rem 1rem",
        },

        "&.btn-primary": solid_button(
            t.color("blue-600"),
            t.color("white"),
            t.color("blue-300"),
            hover_shift(t.color("blue-500")),
            t.color("blue-400"),
        ),
        "&.btn-secondary": solid_button(
            t.color("gray-600"),
            t.color("white"),
            t.color("gray-300"),
            hover_shift(t.color("gray-700")),
            t.color("gray-500"),
        ),
        "&.btn-success": solid_button(
            t.color("green-600"),
            t.color("white"),
            t.color("green-300"),
            hover_shift(t.color("green-500")),
            t.color("green-400"),
        ),
        "&.btn-danger": solid_button(
            t.color("red-600"),
            t.color("white"),
            t.color("red-300"),
            hover_shift(t.color("red-500")),
            t.color("red-400"),
        ),
        "&.btn-warning": solid_button(
            t.color("yellow-600"),
            t.color("gray-900"),
            t.color("yellow-300"),
            hover_shift(t.color("yellow-500")),
            t.color("yellow-400"),
        ),
        "&.btn-info": solid_button(
            t.color("blue-400"),
            t.color("blue-900"),
            t.color("blue-100"),
            hover_shift(t.color("blue-300")),
            t.color("blue-200"),
        ),
        // The light button only dims its text on hover.
        "&.btn-light": solid_button(
            t.color("gray-200"),
            t.color("gray-900"),
            t.color("gray-100"),
            style! { "color": t.color("gray-800") },
            t.color("gray-100"),
        ),
        "&.btn-dark": solid_button(
            t.color("gray-900"),
            t.color("white"),
            t.color("gray-600"),
            hover_shift(t.color("gray-800")),
            t.color("gray-700"),
        ),

        "&.btn-outline-primary": outline_button(t, t.color("blue-600"), t.color("blue-300"), true),
        "&.btn-outline-secondary": outline_button(t, t.color("gray-600"), t.color("gray-300"), true),
        "&.btn-outline-success": outline_button(t, t.color("green-600"), t.color("green-300"), true),
        "&.btn-outline-danger": outline_button(t, t.color("red-600"), t.color("red-300"), true),
        "&.btn-outline-warning": outline_button(t, t.color("yellow-600"), t.color("yellow-300"), false),
        "&.btn-outline-info": outline_button(t, t.color("blue-400"), t.color("blue-100"), false),
        "&.btn-outline-light": outline_button(t, t.color("gray-400"), t.color("gray-100"), false),
        "&.btn-outline-dark": outline_button(t, t.color("gray-900"), t.color("gray-600"), false),

        "&.btn-link": {
            "color": t.color("blue-600"),
            "border": "none",
            "backgroundColor": "transparent",
            "&:focus": {
                "textDecoration": "underline",
                "outline": 0,
                "borderColor": t.color("blue-600"),
                "boxShadow": ring(t.color("blue-600")),
            },
            "&:hover": {
                "textDecoration": "underline",
            },
            "&:active": {
                "backgroundColor": "transparent",
            },
        },
    }
}

fn well(t: &DesignTokens) -> Node {
    style! {
        "padding": t.spacing("4"),
        "border": format!("1px solid {}", t.color("gray-200")),
        "borderRadius": t.border_radius("md"),
        "background": t.color("white"),
    }
}

fn heading(t: &DesignTokens, size: &str) -> Node {
    style! {
        "fontSize": t.font_size(size),
        "lineHeight": t.line_height("tight"),
        "fontWeight": t.font_weight("medium"),
    }
}

fn display_size(t: &DesignTokens, size: &str) -> Node {
    style! {
        "fontSize": t.font_size(size),
        "fontWeight": t.font_weight("light"),
        "lineHeight": t.line_height("loose"),
    }
}

fn typography(t: &DesignTokens) -> Node {
    style! {
        "h1": heading(t, "4xl"),
        "h2": heading(t, "3xl"),
        "h3": heading(t, "2xl"),
        "h4": heading(t, "xl"),
        "h5": heading(t, "lg"),
        "h6": heading(t, "base"),
        "display": {
            "1": display_size(t, "d-1"),
            "2": display_size(t, "d-2"),
            "3": display_size(t, "d-3"),
            "4": display_size(t, "d-4"),
        },
    }
}

fn table(t: &DesignTokens) -> Node {
    style! {
        "default": {
            "width": "100%",
            "thead": {
                "color": t.color("gray-700"),
                "backgroundColor": t.color("gray-200"),
                "border": "none",
                "borderBottomWidth": "2px",
                "borderBottomStyle": "solid",
                "borderBottomColor": t.color("gray-300"),
                "tr": {
                    "th": {
                        "fontSize": t.font_size("xs"),
                        "fontWeight": t.font_weight("medium"),
                        "textTransform": "uppercase",
                    },
                },
            },
            "tr": {
                "borderBottomWidth": "1px",
                "borderBottomStyle": "solid",
                "borderBottomColor": t.color("gray-200"),
                "th, td": {
                    "textAlign": "left",
                    "padding": t.spacing("2"),
                    "border": "none",
                },
            },
        },
        "striped": {
            "tbody": {
                "tr:nth-child(even)": {
                    "backgroundColor": t.color("gray-100"),
                },
            },
        },
        "hover": {
            "tbody": {
                "tr:hover": {
                    "backgroundColor": t.color("gray-200"),
                },
            },
        },
        "responsive": {
            "overflowX": "auto",
            "table": {
                "overflowX": "hidden",
            },
        },
        "borderless": {
            "tr": {
                "borderBottom": "none",
            },
            "thead": {
                "borderBottom": "none",
            },
        },
        "bordered": {
            "th, td": {
                "borderWidth": format!("{} !important", t.border_width("default")),
                "borderStyle": "solid !important",
                "borderColor": format!("{} !important", t.border_color("default")),
            },
        },
    }
}

fn cards(t: &DesignTokens) -> Node {
    style! {
        "card": {
            "borderWidth": t.border_width("default"),
            "borderStyle": "solid",
            "borderColor": t.border_color("default"),
            "borderRadius": t.border_radius("md"),
            "backgroundColor": t.color("white"),
            "overflow": "hidden",
            "boxShadow": t.box_shadow("sm"),
            "&.no-shadow": {
                "boxShadow": "none",
            },
            "cardImage": {
                "width": "100%",
            },
            "cardHeader": {
                "borderBottomWidth": t.border_width("default"),
                "borderBottomStyle": "solid",
                "borderBottomColor": t.border_color("default"),
                "padding": t.spacing("5"),
                "fontWeight": t.font_weight("medium"),
                "color": t.color("gray-900"),
                "fontSize": t.font_size("sm"),
            },
            "cardBody": {
                "padding": t.spacing("5"),
            },
            "cardFooter": {
                "borderTopWidth": t.border_width("default"),
                "borderTopStyle": "solid",
                "borderTopColor": t.border_color("default"),
                "padding": t.spacing("5"),
                "fontWeight": t.font_weight("medium"),
                "color": t.color("gray-900"),
                "fontSize": t.font_size("sm"),
            },
            "cardTitle": {
                "marginBottom": t.spacing("2"),
                "color": t.color("gray-900"),
            },
            "cardSubTitle": {
                "color": t.color("gray-600"),
                "marginTop": t.spacing("-2"),
                "marginBottom": t.spacing("1"),
                "fontSize": t.font_size("sm"),
                "fontWeight": t.font_weight("normal"),
            },
        },
    }
}

fn list_group(t: &DesignTokens) -> Node {
    style! {
        "borderRadius": t.border_radius("md"),
        "borderWidth": t.border_width("default"),
        "borderStyle": "solid",
        "borderColor": t.border_color("default"),
        "&.list-group-flush": {
            "border": "none",
        },
        "> .list-group-item": {
            "display": "block",
            "padding": t.spacing("3"),
            "borderBottomWidth": t.border_width("default"),
            "borderBottomStyle": "solid",
            "borderBottomColor": t.border_color("default"),
            "&:last-child": {
                "borderBottom": "none",
            },
            "&.list-group-item-action": {
                "cursor": "pointer",
                "width": "100%",
                "&:hover,&:focus": {
                    "backgroundColor": t.color("gray-100"),
                },
                "&:active": {
                    "backgroundColor": t.color("gray-200"),
                },
            },
            "&.active": {
                "backgroundColor": t.color("blue-500"),
                "color": t.color("white"),
                "&:hover,&:focus": {
                    "backgroundColor": t.color("blue-500"),
                },
                "&:active": {
                    "backgroundColor": t.color("blue-500"),
                },
            },
        },
    }
}
