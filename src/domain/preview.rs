/// Maximum number of characters shown when logging loaded content.
pub const PREVIEW_CHARS: usize = 64;

/// Return the first `PREVIEW_CHARS` characters of `text`, or all of it if shorter.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
