// Front-matter cleaning.
//
// ESG reports open with covers, tables of contents, and boilerplate that
// drown out the actual topic signal. The convention in these documents is
// that the substantive body starts at one of a handful of section headings,
// so cleaning cuts everything before the first occurrence of any of them.
// The keyword set is a domain convention and is kept literal on purpose.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Section-marker keywords that signal the start of the report body.
/// Matched case-insensitively, as independent alternatives.
const SECTION_MARKERS: &[&str] = &[
    "Bibliography",
    "Acknowledgements",
    "Index",
    "Contents",
    "Carbon",
];

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = format!("(?i){}", SECTION_MARKERS.join("|"));
        Regex::new(&alternation).expect("section marker alternation is a valid pattern")
    })
}

/// Drop everything before the first section-marker keyword.
///
/// The earliest match position in the text wins, regardless of which
/// keyword matched. If no marker occurs, the text passes through
/// unchanged. The result is always a suffix of the input, which makes
/// cleaning idempotent: a second pass re-matches at index 0.
pub fn clean(text: &str) -> &str {
    match marker_pattern().find(text) {
        Some(m) => &text[m.start()..],
        None => text,
    }
}
