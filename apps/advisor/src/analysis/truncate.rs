/// Appended whenever text is cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Returns `text` unchanged when it has at most `max_chars` characters, otherwise its
/// first `max_chars` characters followed by `TRUNCATION_MARKER`.
///
/// Counts Unicode scalar values, not bytes. A truncated result is `max_chars + 3` long.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
    }
}
