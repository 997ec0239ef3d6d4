//! Error types for query parsing.

use thiserror::Error;

/// Errors produced while parsing a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A quoted value was opened but never closed.
    #[error("{}", format_with_context("unclosed quote", .input, .position))]
    UnclosedQuote {
        /// Byte position of the opening quote.
        position: usize,
        /// The original query string.
        input: String,
    },
}

impl QueryError {
    /// Returns the error message without context.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnclosedQuote { .. } => "unclosed quote",
        }
    }

    /// Returns a suggestion for fixing the query.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::UnclosedQuote { .. } => "Add a closing quote (\") to complete the value",
        }
    }
}

/// Formats a message with the query and a caret under `position`.
fn format_with_context(message: &str, input: &str, position: &usize) -> String {
    let clamped = input
        .get(..(*position).min(input.len()))
        .map_or(0, |prefix| prefix.chars().count());
    format!(
        "query syntax error: {message}\n  {input}\n  {}^",
        " ".repeat(clamped)
    )
}
