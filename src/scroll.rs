//! Scroll-derived UI state, kept free of DOM types so it can be exercised
//! without a document. The components in `components::nav` and `pages::home`
//! feed these functions the current scroll position on every scroll tick.

use crate::config::{
    HEADER_SCROLL_THRESHOLD, PARALLAX_LIMIT, PARALLAX_RATE, SECTION_LOOKAHEAD,
};

/// Returns the id of the section considered "in view" at `scroll_y`.
///
/// `sections` is the list of `(id, top_offset)` pairs in document order.
/// The last section whose top edge, minus the lookahead, has been crossed
/// wins, so later sections override earlier ones. `None` when the scroll
/// position is above every section's threshold.
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - SECTION_LOOKAHEAD {
            current = Some(id.as_str());
        }
    }
    current
}

/// Whether the header should carry its `scrolled` class.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Vertical offset for the hero parallax, or `None` past the limit.
///
/// Past the limit the caller leaves the last applied transform in place,
/// so the effect freezes rather than resetting.
pub fn parallax_offset(scroll_y: f64) -> Option<f64> {
    (scroll_y < PARALLAX_LIMIT).then(|| scroll_y * PARALLAX_RATE)
}

/// Extracts the target id from an in-page anchor href.
///
/// The bare self-fragment `"#"` and non-fragment hrefs yield `None`, in
/// which case the browser's default navigation proceeds.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("collections".to_string(), 600.0),
            ("notes".to_string(), 1400.0),
        ]
    }

    #[test]
    fn last_crossed_section_wins() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 399.0), Some("home"));
        // collections activates exactly at 600 - 200
        assert_eq!(active_section(&sections, 400.0), Some("collections"));
        assert_eq!(active_section(&sections, 1199.0), Some("collections"));
        assert_eq!(active_section(&sections, 1200.0), Some("notes"));
        assert_eq!(active_section(&sections, 9000.0), Some("notes"));
    }

    #[test]
    fn no_section_above_first_threshold() {
        let sections = vec![("about".to_string(), 500.0)];
        assert_eq!(active_section(&sections, 299.0), None);
        assert_eq!(active_section(&sections, 300.0), Some("about"));
        assert_eq!(active_section(&[], 1000.0), None);
    }

    #[test]
    fn header_flag_flips_past_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
    }

    #[test]
    fn parallax_freezes_past_limit() {
        assert_eq!(parallax_offset(0.0), Some(0.0));
        assert_eq!(parallax_offset(500.0), Some(150.0));
        assert_eq!(parallax_offset(800.0), None);
        assert_eq!(parallax_offset(2000.0), None);
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(anchor_fragment("#collections"), Some("collections"));
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment("/pricing#plans"), None);
        assert_eq!(anchor_fragment("https://example.com"), None);
    }
}
