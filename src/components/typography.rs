//! Typography registration: heading elements and display classes.

use crate::options::Node;
use crate::sink::StyleSink;

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub(super) fn add_typography(sink: &mut dyn StyleSink, options: Option<&Node>, suffix: &str) {
    let Some(options) = options else {
        return;
    };
    for heading in HEADINGS {
        let body = options.child(heading).cloned().unwrap_or_default();
        sink.add_base(heading, body);
    }
    let display = options.child("display");
    for step in 1..=4 {
        let body = display
            .and_then(|node| node.child(&step.to_string()))
            .cloned()
            .unwrap_or_default();
        sink.add_component(&format!(".display-{step}{suffix}"), body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RuleRegistry;
    use crate::style;

    #[test]
    fn test_headings_and_display_classes() {
        let options = style! {
            "h1": { "fontSize": "2.25rem" },
            "display": { "1": { "fontSize": "6rem" } },
        };
        let mut rules = RuleRegistry::new();
        add_typography(&mut rules, Some(&options), "");
        assert_eq!(rules.base().len(), 6);
        assert!(rules.base_rule("h1").is_some_and(|body| !body.is_empty()));
        assert!(rules.base_rule("h6").is_some_and(|body| body.is_empty()));
        assert_eq!(rules.components().len(), 4);
        assert!(rules.component(".display-1").is_some_and(|body| !body.is_empty()));
        assert!(rules.component(".display-4").is_some_and(|body| body.is_empty()));
    }

    #[test]
    fn test_display_suffix() {
        let options = style! { "display": { "2": { "fontSize": "5.5rem" } } };
        let mut rules = RuleRegistry::new();
        add_typography(&mut rules, Some(&options), "-dark");
        assert!(rules.component(".display-2-dark").is_some());
    }

    #[test]
    fn test_absent_subtree_is_noop() {
        let mut rules = RuleRegistry::new();
        add_typography(&mut rules, None, "");
        assert!(rules.base().is_empty());
        assert!(rules.components().is_empty());
    }
}
