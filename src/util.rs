//! Utility functions for color conversion and icon embedding.

/// Converts a hex color to an `rgba()` string with the given alpha.
///
/// Accepts 3- and 6-digit forms, with or without the leading `#`.
/// Anything that is not a hex color is returned unchanged, so token
/// values like `transparent` or `currentColor` survive a round trip.
///
/// # Example
///
/// ```rust
/// use uistrap::hex_to_rgba;
///
/// assert_eq!(hex_to_rgba("#90cdf4", 0.45), "rgba(144,205,244,0.45)");
/// assert_eq!(hex_to_rgba("#fff", 1.0), "rgba(255,255,255,1)");
/// assert_eq!(hex_to_rgba("transparent", 1.0), "transparent");
/// ```
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex.to_string();
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).unwrap_or(0)
    };
    let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
    format!("rgba({r},{g},{b},{})", format_alpha(alpha))
}

fn format_alpha(alpha: f64) -> String {
    if alpha.fract() == 0.0 && alpha.is_finite() {
        format!("{}", alpha as i64)
    } else {
        format!("{}", alpha)
    }
}

/// Encodes SVG markup as a compact `data:` URI.
///
/// Whitespace runs collapse to single spaces, double quotes become
/// single quotes (so the result can sit inside a double-quoted `url()`),
/// and the characters unsafe in a URI are percent-encoded. Deterministic:
/// identical markup always yields an identical reference.
///
/// This is the default `embed_icon` collaborator; swap it out via
/// [`StylePlugin::with_icon_embedder`](crate::StylePlugin::with_icon_embedder)
/// if the host pipeline embeds icons differently.
///
/// # Example
///
/// ```rust
/// use uistrap::svg_data_uri;
///
/// let uri = svg_data_uri(r##"<svg viewBox="0 0 16 16" fill="#fff"></svg>"##);
/// assert_eq!(
///     uri,
///     "data:image/svg+xml,%3Csvg viewBox='0 0 16 16' fill='%23fff'%3E%3C/svg%3E"
/// );
/// ```
pub fn svg_data_uri(markup: &str) -> String {
    let collapsed = markup.split_whitespace().collect::<Vec<_>>().join(" ");
    let single_quoted = collapsed.replace('"', "'");

    let mut out = String::with_capacity(single_quoted.len() + 24);
    out.push_str("data:image/svg+xml,");
    for c in single_quoted.chars() {
        match c {
            '%' => out.push_str("%25"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '{' => out.push_str("%7B"),
            '}' => out.push_str("%7D"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba_six_digits() {
        assert_eq!(hex_to_rgba("#3182ce", 0.45), "rgba(49,130,206,0.45)");
    }

    #[test]
    fn test_hex_to_rgba_three_digits() {
        assert_eq!(hex_to_rgba("#abc", 1.0), "rgba(170,187,204,1)");
    }

    #[test]
    fn test_hex_to_rgba_without_hash() {
        assert_eq!(hex_to_rgba("ffffff", 1.0), "rgba(255,255,255,1)");
    }

    #[test]
    fn test_hex_to_rgba_full_alpha_is_integer() {
        assert_eq!(hex_to_rgba("#000000", 1.0), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_hex_to_rgba_passes_through_keywords() {
        assert_eq!(hex_to_rgba("currentColor", 0.5), "currentColor");
        assert_eq!(hex_to_rgba("transparent", 1.0), "transparent");
    }

    #[test]
    fn test_svg_data_uri_escapes_unsafe_chars() {
        let uri = svg_data_uri("<svg fill=\"#fff\"><path d=\"M0 0\"/></svg>");
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("fill='%23fff'"));
        assert!(!uri.contains('"'));
        assert!(!uri.contains('<'));
    }

    #[test]
    fn test_svg_data_uri_collapses_whitespace() {
        let uri = svg_data_uri("<svg\n   viewBox=\"0 0 16 16\"\n></svg>");
        assert!(uri.contains("%3Csvg viewBox='0 0 16 16' %3E"));
    }

    #[test]
    fn test_svg_data_uri_deterministic() {
        let markup = "<svg fill=\"#fff\"/>";
        assert_eq!(svg_data_uri(markup), svg_data_uri(markup));
    }
}
