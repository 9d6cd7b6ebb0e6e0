//! Component registrars.
//!
//! One registrar per UI primitive family. Each takes the family's
//! resolved subtree plus the variant suffix and emits its fixed set of
//! registrations to the sink; an absent or empty subtree makes the
//! registrar a no-op, so a variant only produces rules for the families
//! it actually mentions.

mod buttons;
mod forms;
mod surfaces;
mod tables;
mod typography;

use crate::options::{Node, ResolvedOptions};
use crate::sink::StyleSink;

/// The icon-embedding collaborator: markup in, URI out.
pub(crate) type IconEmbedder<'a> = &'a dyn Fn(&str) -> String;

/// Drives every registrar: once for the default variant with no suffix,
/// then once per named variant with a `-{name}` suffix so the emitted
/// rule names stay distinct per variant.
pub(crate) fn register_all(
    sink: &mut dyn StyleSink,
    embed: IconEmbedder<'_>,
    resolved: &ResolvedOptions,
) {
    register_variant(sink, embed, resolved.default_variant(), "");
    for (name, options) in resolved.named_variants() {
        let suffix = format!("-{name}");
        register_variant(sink, embed, options, &suffix);
    }
}

fn register_variant(
    sink: &mut dyn StyleSink,
    embed: IconEmbedder<'_>,
    options: &Node,
    suffix: &str,
) {
    forms::add_form_group(sink, family(options, "formGroup"), suffix);
    surfaces::add_list_group(sink, family(options, "listGroup"), suffix);
    surfaces::add_cards(sink, family(options, "cards"), suffix);
    tables::add_table(sink, family(options, "table"), suffix);
    typography::add_typography(sink, family(options, "typography"), suffix);
    buttons::add_button(sink, family(options, "button"), suffix);
    surfaces::add_well(sink, family(options, "well"), suffix);
    forms::add_input(sink, family(options, "input"));
    forms::add_textarea(sink, family(options, "textarea"));
    forms::add_multiselect(sink, family(options, "multiselect"));
    forms::add_select(sink, family(options, "select"), embed);
    forms::add_checkbox(sink, family(options, "checkbox"), suffix, embed);
    forms::add_radio(sink, family(options, "radio"), suffix, embed);
}

/// A family subtree, or `None` when absent, empty, or not a map — the
/// cases where the registrar must stay silent.
fn family<'a>(options: &'a Node, key: &str) -> Option<&'a Node> {
    options.child(key).filter(|node| !node.is_empty())
}
