//! Highlight extraction from server line markup.
//!
//! The server returns each matched line HTML-escaped, with `<b>` and `</b>`
//! around the matched substrings. Offsets produced here count Unicode scalar
//! values, not bytes.

use std::ops::Range;

use html_escape::decode_html_entities;

/// Marker opening a highlighted span.
const OPEN: &str = "<b>";

/// Marker closing a highlighted span.
const CLOSE: &str = "</b>";

/// A matched line cleaned up for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    /// Trimmed text with entities decoded and markers removed.
    pub label: String,
    /// First highlighted span, relative to the decoded line before trimming.
    ///
    /// This lines up with the original source line, leading whitespace
    /// included, so it can select the match in an editor.
    pub first_match: Option<Range<usize>>,
    /// All highlighted spans, relative to `label`.
    pub highlights: Vec<Range<usize>>,
}

/// Cleans a raw server line and extracts its highlight ranges.
///
/// Order matters: entities are decoded first, the first-match range is taken
/// from the untrimmed text, then the text is trimmed, scanned for all marker
/// pairs and finally stripped of markers.
pub fn extract_highlights(raw: &str) -> HighlightedLine {
    let decoded = decode_html_entities(raw);
    let first_match = first_match_range(&decoded);

    let trimmed = decoded.trim();
    let highlights = highlight_ranges(trimmed);
    let label = strip_markers(trimmed);

    HighlightedLine {
        label,
        first_match,
        highlights,
    }
}

/// Converts a byte index in `text` to a char offset.
fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Returns the span between the first `<b>` and the first `</b>` in `text`.
///
/// The end is expressed as if the opening marker were already removed.
/// Returns `None` if either marker is missing or they are out of order.
pub fn first_match_range(text: &str) -> Option<Range<usize>> {
    let open = text.find(OPEN)?;
    let close = text.find(CLOSE)?;

    let start = char_offset(text, open);
    let end = char_offset(text, close).checked_sub(OPEN.len())?;
    (end >= start).then_some(start..end)
}

/// Returns every `<b>…</b>` span in `text`, in marker-free coordinates.
///
/// Each range is shifted left by the markers of all preceding pairs, so it
/// indexes the text after [`strip_markers`]. Scanning stops at a `<b>` with no
/// closing marker after it.
pub fn highlight_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut removed = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(OPEN) {
        let open = cursor + found;
        let inner = open + OPEN.len();
        let Some(found) = text[inner..].find(CLOSE) else {
            break;
        };
        let close = inner + found;

        let start = char_offset(text, open) - removed;
        let end = char_offset(text, close) - removed - OPEN.len();
        ranges.push(start..end);

        removed += OPEN.len() + CLOSE.len();
        cursor = close + CLOSE.len();
    }

    ranges
}

/// Removes every highlight marker from `text`.
pub fn strip_markers(text: &str) -> String {
    text.replace(OPEN, "").replace(CLOSE, "")
}
