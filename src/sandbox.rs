//! Offline backend with a fixed set of records, used by `--debug`.
//!
//! Filtering is a rough imitation of ADS: author and bibstem match by
//! case-insensitive substring, years by range. Sort order is ignored.

use crate::backend::Backend;
use crate::error::Result;
use crate::query::{Constraints, YearRange};
use crate::types::{Paper, SearchResponse};
use async_trait::async_trait;

struct Record {
    bibcode: &'static str,
    title: &'static str,
    authors: &'static [&'static str],
    year: u16,
    doi: Option<&'static str>,
    abstract_text: &'static str,
}

const RECORDS: &[Record] = &[
    Record {
        bibcode: "2000ApJ...530..660D",
        title: "Sandbox Observations of Stellar Winds in Young Clusters",
        authors: &["Doe, J.", "Roe, R."],
        year: 2000,
        doi: Some("10.1086/308400"),
        abstract_text: "We present sandbox observations of stellar winds.",
    },
    Record {
        bibcode: "2001ApJ...546L..17D",
        title: "A Second Look at Sandbox Winds",
        authors: &["Doe, J."],
        year: 2001,
        doi: None,
        abstract_text: "A follow-up study of the winds reported earlier.",
    },
    Record {
        bibcode: "2001MNRAS.321..123R",
        title: "Dust Formation in the Sandbox Nebula",
        authors: &["Roe, R.", "Doe, J.", "Poe, E."],
        year: 2001,
        doi: Some("10.1046/j.1365-8711.2001.04000.x"),
        abstract_text: "Dust grains form efficiently in the sandbox nebula.",
    },
    Record {
        bibcode: "2015A&A...575A..10P",
        title: "Gravity Waves from Sandbox Binaries: A Very Long Title That Keeps Going To Show How Row Output Handles Titles Which Exceed The Column Width Allowed For A Single Line Of The Listing Produced In Row Mode Output",
        authors: &["Poe, E."],
        year: 2015,
        doi: None,
        abstract_text: "Binary mergers in the sandbox emit gravitational waves.",
    },
    Record {
        bibcode: "2024AJ....167...42R",
        title: "Sandbox Survey of Nearby Galaxies",
        authors: &["Roe, R."],
        year: 2024,
        doi: Some("10.3847/1538-3881/ad0000"),
        abstract_text: "A survey of nearby galaxies in the sandbox.",
    },
];

/// Journal abbreviation embedded in a bibcode (characters 5 to 9).
fn bibstem_of(bibcode: &str) -> &str {
    bibcode
        .get(4..9)
        .map(|s| s.trim_end_matches('.'))
        .unwrap_or_default()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

fn year_matches(range: &YearRange, year: u16) -> bool {
    range.from.map_or(true, |from| year >= from) && range.to.map_or(true, |to| year <= to)
}

impl Record {
    fn matches(&self, c: &Constraints) -> bool {
        c.author
            .as_deref()
            .map_or(true, |a| self.authors.iter().any(|name| contains_ci(name, a)))
            && c.bibstem
                .as_deref()
                .map_or(true, |b| bibstem_of(self.bibcode).eq_ignore_ascii_case(b.trim()))
            && c.bibcode.as_deref().map_or(true, |b| self.bibcode == b.trim())
            && c.full.as_deref().map_or(true, |f| {
                contains_ci(self.title, f) || contains_ci(self.abstract_text, f)
            })
            && c.year.as_ref().map_or(true, |y| year_matches(y, self.year))
    }

    fn to_paper(&self) -> Paper {
        Paper {
            bibcode: self.bibcode.to_string(),
            title: self.title.to_string(),
            first_author: self.authors.first().map(|a| a.to_string()),
            year: Some(self.year),
            abstract_text: Some(self.abstract_text.to_string()),
            doi: self.doi.map(str::to_string),
        }
    }

    fn to_bibtex(&self) -> String {
        let mut entry = format!(
            "@ARTICLE{{{},\n       author = {{{}}},\n        title = \"{{{}}}\",\n         year = {},\n",
            self.bibcode,
            self.authors.join(" and "),
            self.title,
            self.year
        );
        if let Some(doi) = self.doi {
            entry.push_str(&format!("          doi = {{{}}},\n", doi));
        }
        entry.push_str("}\n");
        entry
    }
}

/// Offline stand-in for the ADS API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sandbox;

#[async_trait]
impl Backend for Sandbox {
    async fn search(&self, constraints: &Constraints) -> Result<SearchResponse> {
        tracing::info!(query = %constraints.query(), "searching sandbox");
        let matching: Vec<&Record> = RECORDS.iter().filter(|r| r.matches(constraints)).collect();
        Ok(SearchResponse {
            num_found: matching.len() as u64,
            papers: matching
                .into_iter()
                .take(constraints.rows as usize)
                .map(Record::to_paper)
                .collect(),
            rate_limits: None,
        })
    }

    async fn export_bibtex(&self, bibcodes: &[&str]) -> Result<String> {
        let entries: Vec<String> = bibcodes
            .iter()
            .filter_map(|b| RECORDS.iter().find(|r| r.bibcode == *b))
            .map(Record::to_bibtex)
            .collect();
        Ok(entries.join("\n"))
    }
}
