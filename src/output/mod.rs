// Output formatting — terminal display of corpus and topic summaries.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters instead of slicing bytes: report text comes out of
/// PDF extraction with accented letters and odd glyphs, and a byte slice
/// through the middle of one would panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
