//! The structured search request.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A searchable field of the query mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Project restriction (`project:`).
    Project,
    /// File path match (`path:`).
    Path,
    /// Full-text match (`full:`).
    Full,
    /// Symbol definition match (`def:`).
    Def,
    /// Symbol reference match (`symbol:`, also the default field).
    Symbol,
}

impl Field {
    /// All fields, in prefix-matching and canonical formatting order.
    pub const ALL: [Self; 5] = [
        Self::Project,
        Self::Path,
        Self::Full,
        Self::Def,
        Self::Symbol,
    ];

    /// Returns the field name as written in queries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Path => "path",
            Self::Full => "full",
            Self::Def => "def",
            Self::Symbol => "symbol",
        }
    }

    /// Returns the clause prefix for this field, including the colon.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Project => "project:",
            Self::Path => "path:",
            Self::Full => "full:",
            Self::Def => "def:",
            Self::Symbol => "symbol:",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A structured request for the OpenGrok search API.
///
/// Every field holds an ordered list of values. Project order is the order in
/// which projects were added, which the server treats as search weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Base URL of the OpenGrok server. Never set by the parser.
    pub server: String,
    /// Projects to search.
    pub projects: Vec<String>,
    /// Path match values.
    pub path: Vec<String>,
    /// Full-text match values.
    pub full: Vec<String>,
    /// Definition match values.
    pub def: Vec<String>,
    /// Symbol reference match values.
    pub symbol: Vec<String>,
}

impl SearchQuery {
    /// Returns the values stored for `field`.
    pub fn values(&self, field: Field) -> &[String] {
        match field {
            Field::Project => &self.projects,
            Field::Path => &self.path,
            Field::Full => &self.full,
            Field::Def => &self.def,
            Field::Symbol => &self.symbol,
        }
    }

    /// Returns the mutable value list for `field`.
    pub fn values_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Project => &mut self.projects,
            Field::Path => &mut self.path,
            Field::Full => &mut self.full,
            Field::Def => &mut self.def,
            Field::Symbol => &mut self.symbol,
        }
    }

    /// Appends a value to `field`.
    pub fn push(&mut self, field: Field, value: impl Into<String>) {
        self.values_mut(field).push(value.into());
    }

    /// Returns true if no field holds any value.
    ///
    /// Such a query is valid but the server returns nothing for it.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.values(field).is_empty())
    }

    /// Renders the query as a single line of `field:value` tokens.
    ///
    /// Fields appear in [`Field::ALL`] order and values keep their insertion
    /// order. Quoted values are emitted as stored, so the output is meant for
    /// display and does not always parse back to the same query.
    pub fn canonical(&self) -> String {
        Field::ALL
            .iter()
            .flat_map(|&field| {
                self.values(field)
                    .iter()
                    .map(move |value| format!("{}{}", field.prefix(), value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
