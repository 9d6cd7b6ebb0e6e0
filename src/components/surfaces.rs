//! Surface registration: cards, list groups, wells.

use crate::options::Node;
use crate::sink::StyleSink;

/// The card's named sub-elements, keyed by the option they read.
const CARD_SUB_ELEMENTS: [(&str, &str); 6] = [
    ("card-header", "cardHeader"),
    ("card-body", "cardBody"),
    ("card-footer", "cardFooter"),
    ("card-image", "cardImage"),
    ("card-title", "cardTitle"),
    ("card-subtitle", "cardSubTitle"),
];

/// Registers the card root and its six sub-elements.
///
/// Always seven registrations: sub-elements the user never customized
/// go out with empty bodies, which the sink drops.
pub(super) fn add_cards(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    let Some(options) = options else {
        return;
    };
    let card = options.child("card");
    sink.add_component(
        &format!(".card{suffix}"),
        card.cloned().unwrap_or_default(),
    );
    for (class, key) in CARD_SUB_ELEMENTS {
        let body = card.and_then(|node| node.child(key)).cloned().unwrap_or_default();
        sink.add_component(&format!(".{class}{suffix}"), body);
    }
}

pub(super) fn add_list_group(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    if let Some(options) = options {
        sink.add_component(&format!(".list-group{suffix}"), options.clone());
    }
}

pub(super) fn add_well(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    if let Some(options) = options {
        sink.add_component(&format!(".well{suffix}"), options.clone());
    }
}
