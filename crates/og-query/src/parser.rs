//! Query parser.
//!
//! The input is split into alternating runs of whitespace and non-whitespace
//! characters. Whitespace runs are kept so that a quoted value spanning several
//! words is rebuilt exactly as typed.
//!
//! # Grammar
//!
//! ```text
//! query  → (clause | WS)*
//! clause → PREFIX? value
//! PREFIX → "project:" | "path:" | "full:" | "def:" | "symbol:"
//! value  → WORD | '"' (WORD | WS)* '"'
//! ```
//!
//! A clause without a prefix targets `symbol`. The first matching prefix wins.
//! Clauses with an empty value are dropped. Quoted values keep their quotes.

use std::mem;

use crate::{
    error::QueryError,
    query::{Field, SearchQuery},
};

/// A maximal run of whitespace or non-whitespace characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    /// The text of the run.
    text: &'a str,
    /// Byte offset of the run in the input.
    start: usize,
    /// Whether the run consists of whitespace.
    is_whitespace: bool,
}

/// Splits `input` into alternating whitespace and word segments.
fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in input.char_indices() {
        let is_whitespace = ch.is_whitespace();
        match current {
            Some(kind) if kind == is_whitespace => {}
            Some(kind) => {
                segments.push(Segment {
                    text: &input[start..idx],
                    start,
                    is_whitespace: kind,
                });
                start = idx;
                current = Some(is_whitespace);
            }
            None => current = Some(is_whitespace),
        }
    }

    if let Some(kind) = current {
        segments.push(Segment {
            text: &input[start..],
            start,
            is_whitespace: kind,
        });
    }

    segments
}

/// Parser state between segments.
enum State {
    /// Waiting for the start of a clause.
    ExpectClause,
    /// Inside a quoted value that has not been closed yet.
    ExpectValue {
        /// Field the value belongs to.
        field: Field,
        /// Value accumulated so far, starting with the opening quote.
        value: String,
        /// Byte position of the opening quote in the input.
        quote_position: usize,
    },
}

/// Two-state clause parser.
struct Parser {
    /// Query built so far.
    query: SearchQuery,
    /// Current state.
    state: State,
}

impl Parser {
    /// Creates a parser with an empty query.
    fn new() -> Self {
        Self {
            query: SearchQuery::default(),
            state: State::ExpectClause,
        }
    }

    /// Consumes one segment.
    fn feed(&mut self, segment: Segment<'_>) {
        match mem::replace(&mut self.state, State::ExpectClause) {
            State::ExpectClause => self.start_clause(segment),
            State::ExpectValue {
                field,
                mut value,
                quote_position,
            } => {
                value.push_str(segment.text);
                if value.ends_with('"') {
                    self.query.push(field, value);
                } else {
                    self.state = State::ExpectValue {
                        field,
                        value,
                        quote_position,
                    };
                }
            }
        }
    }

    /// Handles a segment seen while expecting a new clause.
    fn start_clause(&mut self, segment: Segment<'_>) {
        if segment.is_whitespace {
            return;
        }

        let (field, value) = split_clause(segment.text);
        if value.is_empty() {
            return;
        }

        if value.starts_with('"') && !is_closed_quote(value) {
            let quote_position = segment.start + (segment.text.len() - value.len());
            self.state = State::ExpectValue {
                field,
                value: value.to_string(),
                quote_position,
            };
        } else {
            self.query.push(field, value);
        }
    }

    /// Finishes parsing, failing if a quoted value is still open.
    fn finish(self, input: &str) -> Result<SearchQuery, QueryError> {
        match self.state {
            State::ExpectClause => Ok(self.query),
            State::ExpectValue { quote_position, .. } => Err(QueryError::UnclosedQuote {
                position: quote_position,
                input: input.to_string(),
            }),
        }
    }
}

/// Splits a word into its target field and value.
fn split_clause(word: &str) -> (Field, &str) {
    Field::ALL
        .iter()
        .find_map(|&field| word.strip_prefix(field.prefix()).map(|rest| (field, rest)))
        .unwrap_or((Field::Symbol, word))
}

/// Returns true if a value starting with a quote also ends with one.
fn is_closed_quote(value: &str) -> bool {
    value.len() >= 2 && value.ends_with('"')
}

/// Parses a raw query string into a [`SearchQuery`].
///
/// The returned query always has an empty `server` and no `projects` other
/// than those named with `project:` clauses. The caller fills in the server
/// and any default projects.
///
/// A quoted value that opens and closes within one space-separated word,
/// such as `full:"foo"`, is complete as written and stored with its quotes.
/// Only a word that opens a quote without closing it, such as
/// `full:"foo`, makes the parser collect the following words into the same
/// value.
///
/// # Errors
///
/// Returns [`QueryError::UnclosedQuote`] if a quoted value is never closed.
/// No partial query is returned in that case.
pub fn parse(input: &str) -> Result<SearchQuery, QueryError> {
    let mut parser = Parser::new();
    for segment in segments(input) {
        parser.feed(segment);
    }
    parser.finish(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn bare_word_is_symbol() {
        let query = parse("foo").unwrap();
        assert_eq!(query.symbol, strings(&["foo"]));
        assert!(query.path.is_empty());
        assert!(query.full.is_empty());
        assert!(query.def.is_empty());
        assert!(query.projects.is_empty());
        assert_eq!(query.server, "");
    }

    #[test]
    fn multiple_fields() {
        let query = parse("symbol:foo path:bar").unwrap();
        assert_eq!(query.symbol, strings(&["foo"]));
        assert_eq!(query.path, strings(&["bar"]));
    }

    #[test]
    fn quoted_value_spans_segments() {
        let query = parse("full:\"hello world\" def:baz").unwrap();
        assert_eq!(query.full, strings(&["\"hello world\""]));
        assert_eq!(query.def, strings(&["baz"]));
    }

    #[test]
    fn quoted_value_preserves_whitespace_runs() {
        let query = parse("full:\"a  \tb\"").unwrap();
        assert_eq!(query.full, strings(&["\"a  \tb\""]));
    }

    #[test]
    fn single_word_quoted_value() {
        let query = parse("full:\"foo\" bar").unwrap();
        assert_eq!(query.full, strings(&["\"foo\""]));
        assert_eq!(query.symbol, strings(&["bar"]));
    }

    #[test]
    fn unprefixed_quoted_value() {
        let query = parse("\"struct page\"").unwrap();
        assert_eq!(query.symbol, strings(&["\"struct page\""]));
    }

    #[test]
    fn unterminated_quote_fails() {
        let err = parse("full:\"unterminated").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnclosedQuote {
                position: 5,
                input: "full:\"unterminated".into(),
            }
        );
    }

    #[test]
    fn unterminated_quote_after_other_clauses_fails() {
        assert!(parse("def:x full:\"a b c").is_err());
    }

    #[test]
    fn lone_quote_value_stays_open() {
        assert!(parse("full:\"").is_err());
        let query = parse("full:\" x\"").unwrap();
        assert_eq!(query.full, strings(&["\" x\""]));
    }

    #[test]
    fn empty_value_is_dropped() {
        let query = parse("symbol: path:x").unwrap();
        assert!(query.symbol.is_empty());
        assert_eq!(query.path, strings(&["x"]));
    }

    #[test]
    fn project_clause() {
        let query = parse("project:kernel foo").unwrap();
        assert_eq!(query.projects, strings(&["kernel"]));
        assert_eq!(query.symbol, strings(&["foo"]));
    }

    #[test]
    fn first_prefix_wins() {
        let query = parse("project:path:x").unwrap();
        assert_eq!(query.projects, strings(&["path:x"]));
        assert!(query.path.is_empty());
    }

    #[test]
    fn unknown_prefix_is_symbol() {
        let query = parse("std::vector").unwrap();
        assert_eq!(query.symbol, strings(&["std::vector"]));
    }

    #[test]
    fn same_field_accumulates() {
        let query = parse("path:a path:b def:x path:c").unwrap();
        assert_eq!(query.path, strings(&["a", "b", "c"]));
        assert_eq!(query.def, strings(&["x"]));
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \t ").unwrap().is_empty());
    }

    #[test]
    fn inner_quote_is_literal() {
        let query = parse("full:a\"b").unwrap();
        assert_eq!(query.full, strings(&["a\"b"]));
    }

    #[test]
    fn canonical_after_parse() {
        let query = parse("foo path:bar project:k full:\"x y\"").unwrap();
        assert_eq!(
            query.canonical(),
            "project:k path:bar full:\"x y\" symbol:foo"
        );
    }

    #[test]
    fn segments_alternate() {
        let segs = segments("  ab c");
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0].text, "  ");
        assert!(segs[0].is_whitespace);
        assert_eq!(segs[1].text, "ab");
        assert_eq!(segs[1].start, 2);
        assert_eq!(segs[3].text, "c");
        assert!(!segs[3].is_whitespace);
    }

    #[test]
    fn segments_of_empty_input() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn non_ascii_values() {
        let query = parse("full:\"größe maß\" défaut").unwrap();
        assert_eq!(query.full, strings(&["\"größe maß\""]));
        assert_eq!(query.symbol, strings(&["défaut"]));
    }
}
