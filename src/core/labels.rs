//! Display-only label shortening for chart axes and legends.

use crate::core::constants::ELLIPSIS;

/// Shortens `text` to at most `limit` characters followed by `...`.
///
/// Counting is by `char`, so multi-byte names are never split mid-codepoint.
/// Text of `limit` characters or fewer is returned unchanged.
#[must_use]
pub fn truncate_label(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}
