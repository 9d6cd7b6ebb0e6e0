//! Table registration.

use crate::options::Node;
use crate::sink::StyleSink;

/// The six rule targets a table option set splits into.
const TABLE_TARGETS: [(&str, &str); 6] = [
    ("table", "default"),
    ("table-striped", "striped"),
    ("table-hover", "hover"),
    ("table-responsive", "responsive"),
    ("table-borderless", "borderless"),
    ("table-bordered", "bordered"),
];

pub(super) fn add_table(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    let Some(options) = options else {
        return;
    };
    for (class, key) in TABLE_TARGETS {
        let body = options.child(key).cloned().unwrap_or_default();
        sink.add_component(&format!(".{class}{suffix}"), body);
    }
}
