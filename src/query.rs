//! Query constraints and the ADS query-string builder.
//!
//! # Example
//!
//! ```
//! use pads::query::{Constraints, YearRange};
//!
//! let constraints = Constraints {
//!     author: Some("doe, j".to_string()),
//!     bibstem: Some("apj".to_string()),
//!     year: Some("2000-2001".parse::<YearRange>().unwrap()),
//!     ..Constraints::default()
//! };
//! assert_eq!(
//!     constraints.query(),
//!     "database:astronomy AND author:\"doe, j\" AND bibstem:\"apj\" AND year:[2000 TO 2001]"
//! );
//! ```

use crate::error::PadsError;
use crate::types::Sort;
use chrono::Datelike;

/// Number of rows requested when none is given.
pub const DEFAULT_ROWS: u32 = 10;

/// Database every query is restricted to.
pub const DATABASE: &str = "astronomy";

/// Inclusive publication-year range; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: Option<u16>,
    pub to: Option<u16>,
}

impl YearRange {
    /// A single year.
    pub fn single(year: u16) -> Self {
        Self {
            from: Some(year),
            to: Some(year),
        }
    }

    /// The current local calendar year.
    pub fn current() -> Self {
        let year = chrono::Local::now().year();
        Self::single(u16::try_from(year).unwrap_or(u16::MAX))
    }

    fn clause(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from == to => format!("year:{}", from),
            (from, to) => {
                let end = |y: Option<u16>| y.map(|y| y.to_string()).unwrap_or_else(|| "*".to_string());
                format!("year:[{} TO {}]", end(from), end(to))
            }
        }
    }
}

impl std::str::FromStr for YearRange {
    type Err = PadsError;

    /// Parse `YYYY`, `YYYY-YYYY`, `YYYY-` or `-YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PadsError::InvalidQuery(format!("invalid year or year range '{}'", s));
        let parse_end = |part: &str| -> Result<Option<u16>, PadsError> {
            let part = part.trim();
            if part.is_empty() {
                return Ok(None);
            }
            part.parse::<u16>().map(Some).map_err(|_| invalid())
        };

        let range = match s.split_once('-') {
            Some((from, to)) => Self {
                from: parse_end(from)?,
                to: parse_end(to)?,
            },
            None => {
                let year = parse_end(s)?.ok_or_else(invalid)?;
                Self::single(year)
            }
        };

        match (range.from, range.to) {
            (None, None) => Err(invalid()),
            (Some(from), Some(to)) if from > to => Err(PadsError::InvalidQuery(format!(
                "year range '{}' ends before it starts",
                s
            ))),
            _ => Ok(range),
        }
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from == to => write!(f, "{}", from),
            (from, to) => {
                if let Some(from) = from {
                    write!(f, "{}", from)?;
                }
                f.write_str("-")?;
                if let Some(to) = to {
                    write!(f, "{}", to)?;
                }
                Ok(())
            }
        }
    }
}

/// The constraint set of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Author pattern, e.g. `doe, j`.
    pub author: Option<String>,
    /// Journal abbreviation, e.g. `apj`.
    pub bibstem: Option<String>,
    /// Exact bibcode.
    pub bibcode: Option<String>,
    /// Full-text search term.
    pub full: Option<String>,
    /// Publication years.
    pub year: Option<YearRange>,
    /// Maximum number of records to fetch.
    pub rows: u32,
    pub sort: Sort,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            author: None,
            bibstem: None,
            bibcode: None,
            full: None,
            year: None,
            rows: DEFAULT_ROWS,
            sort: Sort::default(),
        }
    }
}

impl Constraints {
    /// Render the ADS query string. Empty constraints are skipped.
    pub fn query(&self) -> String {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

        let mut qb = QueryBuilder::new().database(DATABASE);
        if let Some(author) = present(&self.author) {
            qb = qb.and().author(&author);
        }
        if let Some(bibstem) = present(&self.bibstem) {
            qb = qb.and().bibstem(&bibstem);
        }
        if let Some(bibcode) = present(&self.bibcode) {
            qb = qb.and().bibcode(&bibcode);
        }
        if let Some(full) = present(&self.full) {
            qb = qb.and().full_text(&full);
        }
        if let Some(year) = &self.year {
            qb = qb.and().year_range(year);
        }
        qb.build()
    }
}

/// Quote a value for an ADS fielded search.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.trim().replace('"', "\\\""))
}

/// Builder for constructing ADS query strings.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    /// Create a new empty query builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to one ADS database collection.
    pub fn database(mut self, name: &str) -> Self {
        self.parts.push(format!("database:{}", name));
        self
    }

    /// Add an author search term.
    pub fn author(mut self, name: &str) -> Self {
        self.parts.push(format!("author:{}", quote(name)));
        self
    }

    /// Add a bibstem (journal abbreviation) filter.
    pub fn bibstem(mut self, stem: &str) -> Self {
        self.parts.push(format!("bibstem:{}", quote(stem)));
        self
    }

    /// Add a bibcode filter.
    pub fn bibcode(mut self, bibcode: &str) -> Self {
        self.parts.push(format!("bibcode:{}", quote(bibcode)));
        self
    }

    /// Add a full-text search term.
    pub fn full_text(mut self, text: &str) -> Self {
        self.parts.push(format!("full:{}", quote(text)));
        self
    }

    /// Add a year or year-range filter.
    pub fn year_range(mut self, range: &YearRange) -> Self {
        self.parts.push(range.clause());
        self
    }

    /// Add an AND operator.
    pub fn and(mut self) -> Self {
        self.parts.push("AND".to_string());
        self
    }

    /// Build the final query string.
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.join(" "))
    }
}
