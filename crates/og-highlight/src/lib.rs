//! Syntax highlighting and terminal colors for og.
//!
//! This crate provides syntax-highlighted output for configuration files, styled terminal
//! output for headers and status messages, and emphasis of match ranges inside result lines.

#![warn(missing_docs)]

use std::ops::Range;

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Renders TOML (and other bundled syntaxes) as 24-bit terminal escapes.
pub struct Highlighter {
    /// Bundled language definitions.
    syntax_set: SyntaxSet,
    /// Bundled themes, loaded on first use.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a new highlighter with the default theme (Dracula).
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content for terminal output.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the specified syntax for terminal output.
    ///
    /// If the syntax is not found, the content is rendered as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&escaped);
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes used by og's output.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan, for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green, for success.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow, for warnings and matched text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim, for paths and secondary text.
    pub const DIM: &str = "\x1b[2m";
    /// Resets all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given escape codes followed by a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Bold cyan, for section headers and search summaries.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Bold, for subsection labels.
pub fn subheader(text: &str) -> String {
    bold(text)
}

/// Bold.
pub fn bold(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Dimmed, for node paths and descriptions.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Green.
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Yellow.
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// Emphasizes the given ranges of `text` in bold yellow.
///
/// Ranges are char offsets, sorted and non-overlapping. Ranges that fall
/// outside the text or overlap an earlier range are skipped.
pub fn emphasize_ranges(text: &str, ranges: &[Range<usize>]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let char_count = text.chars().count();
    let byte_at = |offset: usize| {
        text.char_indices()
            .nth(offset)
            .map_or(text.len(), |(byte, _)| byte)
    };

    let mut output = String::with_capacity(text.len() + ranges.len() * 12);
    let mut cursor = 0;
    for range in ranges {
        if range.start < cursor || range.start > range.end || range.end > char_count {
            continue;
        }
        let (start, end) = (byte_at(range.start), byte_at(range.end));
        output.push_str(&text[byte_at(cursor)..start]);
        output.push_str(&paint(&[colors::BOLD, colors::YELLOW], &text[start..end]));
        cursor = range.end;
    }
    output.push_str(&text[byte_at(cursor)..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wraps `text` the way [`emphasize_ranges`] marks a match.
    fn marked(text: &str) -> String {
        format!("{}{}{text}{}", colors::BOLD, colors::YELLOW, colors::RESET)
    }

    #[test]
    fn highlights_config_toml() {
        let output = Highlighter::new().highlight_toml("[server]\nurl = \"http://og\"\n");
        assert!(output.contains("\x1b[38;2;"));
        assert!(output.contains("server"));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn unknown_syntax_is_plain_text() {
        let hl = Highlighter::new();
        let output = hl.highlight("plain words\n", "no-such-syntax");
        assert!(output.contains("plain words"));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn styles_wrap_and_reset() {
        assert_eq!(header("Server:"), "\x1b[1m\x1b[36mServer:\x1b[0m");
        assert_eq!(dim("1.2"), "\x1b[2m1.2\x1b[0m");
        assert_eq!(subheader("Query:"), bold("Query:"));
    }

    #[test]
    fn toml_and_rust_syntaxes_bundled() {
        let ss = extra_syntaxes();
        for ext in ["toml", "rs", "c"] {
            assert!(ss.find_syntax_by_extension(ext).is_some(), "missing {ext}");
        }
    }

    #[test]
    fn emphasize_single_range() {
        assert_eq!(
            emphasize_ranges("x = foo;", &[4..7]),
            format!("x = {};", marked("foo"))
        );
    }

    #[test]
    fn emphasize_multiple_ranges() {
        assert_eq!(
            emphasize_ranges("a + bb", &[0..1, 4..6]),
            format!("{} + {}", marked("a"), marked("bb"))
        );
    }

    #[test]
    fn emphasize_counts_chars() {
        assert_eq!(
            emphasize_ranges("é = ü!", &[4..5]),
            format!("é = {}!", marked("ü"))
        );
    }

    #[test]
    fn emphasize_skips_bad_ranges() {
        assert_eq!(emphasize_ranges("abc", &[2..9]), "abc");
        assert_eq!(
            emphasize_ranges("abcdef", &[2..4, 3..5]),
            format!("ab{}ef", marked("cd"))
        );
        assert_eq!(emphasize_ranges("abc", &[]), "abc");
    }
}
