//! ADS API response parsing.

use crate::error::PadsError;
use crate::types::{Paper, SearchResponse};
use serde::Deserialize;

/// Fields requested in every search query.
pub const SEARCH_FIELDS: &str = "abstract,bibcode,doi,first_author,title,year";

/// ADS API search response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiResponse {
    pub response: AdsApiResponseBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiResponseBody {
    #[serde(default)]
    pub docs: Vec<AdsApiDocument>,
    #[serde(rename = "numFound")]
    pub num_found: Option<u64>,
}

/// Custom deserializer for year field that accepts both string and integer.
fn deserialize_year_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, integer, or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(YearValueVisitor).map(Some)
        }
    }

    struct YearValueVisitor;

    impl<'de> Visitor<'de> for YearValueVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a year as string or integer")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_option(YearVisitor)
}

/// A single document from ADS API responses.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiDocument {
    pub bibcode: String,
    pub title: Option<Vec<String>>,
    pub first_author: Option<String>,
    #[serde(deserialize_with = "deserialize_year_option", default)]
    pub year: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub doi: Option<Vec<String>>,
}

/// ADS export response.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsExportResponse {
    pub export: String,
}

/// Parse an ADS search/query JSON response into a [`SearchResponse`].
///
/// The returned response carries no rate limits; the client fills them in.
pub fn parse_search_response(json: &str) -> crate::error::Result<SearchResponse> {
    let response: AdsApiResponse = serde_json::from_str(json)
        .map_err(|e| PadsError::Parse(format!("Invalid ADS JSON: {}", e)))?;

    let papers = response
        .response
        .docs
        .into_iter()
        .map(document_to_paper)
        .collect();

    Ok(SearchResponse {
        num_found: response.response.num_found.unwrap_or(0),
        papers,
        rate_limits: None,
    })
}

/// Parse an ADS export JSON response.
pub fn parse_export_response(json: &str) -> crate::error::Result<String> {
    let response: AdsExportResponse = serde_json::from_str(json)
        .map_err(|e| PadsError::Parse(format!("Invalid export response: {}", e)))?;
    Ok(response.export)
}

/// Convert an ADS API document to a [`Paper`].
fn document_to_paper(doc: AdsApiDocument) -> Paper {
    let title = doc
        .title
        .and_then(|t| t.into_iter().next())
        .unwrap_or_default();

    Paper {
        bibcode: doc.bibcode,
        title,
        first_author: doc.first_author.filter(|a| !a.is_empty()),
        year: doc.year.as_ref().and_then(|y| y.trim().parse().ok()),
        abstract_text: doc.abstract_text,
        doi: doc.doi.and_then(|d| d.into_iter().next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "responseHeader": {"status": 0, "QTime": 12},
        "response": {
            "docs": [{
                "bibcode": "2000ApJ...530..660D",
                "title": ["A Great Paper About Stars"],
                "first_author": "Doe, J.",
                "year": "2000",
                "abstract": "We study stars.",
                "doi": ["10.1086/308400", "10.1086/other"]
            }],
            "numFound": 37
        }
    }"#;

    #[test]
    fn test_parse_search_response() {
        let result = parse_search_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(result.papers.len(), 1);
        assert_eq!(result.num_found, 37);
        assert!(result.rate_limits.is_none());

        let paper = &result.papers[0];
        assert_eq!(paper.bibcode, "2000ApJ...530..660D");
        assert_eq!(paper.title, "A Great Paper About Stars");
        assert_eq!(paper.first_author.as_deref(), Some("Doe, J."));
        assert_eq!(paper.year, Some(2000));
        assert_eq!(paper.abstract_text.as_deref(), Some("We study stars."));
        assert_eq!(paper.doi.as_deref(), Some("10.1086/308400"));
    }

    #[test]
    fn test_parse_search_response_with_year_as_int() {
        let json = r#"{
            "response": {
                "docs": [{"bibcode": "2024ApJ...999..001B", "title": ["Integer Year"], "year": 2024}],
                "numFound": 1
            }
        }"#;

        let result = parse_search_response(json).unwrap();
        assert_eq!(result.papers[0].year, Some(2024));
    }

    #[test]
    fn test_parse_search_response_sparse_document() {
        let json = r#"{
            "response": {
                "docs": [{"bibcode": "1999AJ....117.2063K", "year": null, "first_author": ""}],
                "numFound": 1
            }
        }"#;

        let result = parse_search_response(json).unwrap();
        let paper = &result.papers[0];
        assert_eq!(paper.title, "");
        assert_eq!(paper.first_author, None);
        assert_eq!(paper.year, None);
        assert_eq!(paper.doi, None);
    }

    #[test]
    fn test_parse_search_response_empty() {
        let json = r#"{"response": {"docs": [], "numFound": 0}}"#;
        let result = parse_search_response(json).unwrap();
        assert!(result.papers.is_empty());
        assert_eq!(result.num_found, 0);
    }

    #[test]
    fn test_parse_search_response_invalid() {
        let err = parse_search_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, PadsError::Parse(_)));
    }

    #[test]
    fn test_parse_export_response() {
        let json = r#"{"msg": "Retrieved 1 abstracts", "export": "@ARTICLE{2000ApJ...530..660D,\n  title = {A Paper}\n}\n"}"#;
        let bibtex = parse_export_response(json).unwrap();
        assert!(bibtex.starts_with("@ARTICLE{2000ApJ...530..660D"));
    }
}
