//! Public types for pads.

use crate::error::PadsError;
use crate::rate_limit::RateLimits;

/// Base URL of the ADS web interface, used for links printed to the user.
pub const ADS_UI_URL: &str = "https://ui.adsabs.harvard.edu";

/// A paper (document) from ADS search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    /// ADS bibcode (primary identifier).
    pub bibcode: String,
    /// Paper title (first entry of the ADS title list, may be empty).
    pub title: String,
    /// First author in ADS format ("Last, First M.").
    pub first_author: Option<String>,
    /// Publication year.
    pub year: Option<u16>,
    /// Abstract text.
    pub abstract_text: Option<String>,
    /// DOI (first, if multiple).
    pub doi: Option<String>,
}

/// Which full-text source the ADS link gateway should resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullTextSource {
    /// Publisher PDF, available when the paper has a DOI.
    Publisher,
    /// Preprint (arXiv) PDF.
    Eprint,
}

impl FullTextSource {
    fn gateway_suffix(self) -> &'static str {
        match self {
            Self::Publisher => "PUB_PDF",
            Self::Eprint => "EPRINT_PDF",
        }
    }
}

impl Paper {
    /// ADS abstract page for this paper.
    pub fn abstract_url(&self) -> String {
        format!("{}/abs/{}/abstract", ADS_UI_URL, self.bibcode)
    }

    /// Preferred full-text source: the publisher when a DOI is known.
    pub fn full_text_source(&self) -> FullTextSource {
        match self.doi.as_deref() {
            Some(doi) if !doi.is_empty() => FullTextSource::Publisher,
            _ => FullTextSource::Eprint,
        }
    }

    /// ADS link-gateway URL for the downloadable full text.
    pub fn pdf_url(&self) -> String {
        format!(
            "{}/link_gateway/{}/{}",
            ADS_UI_URL,
            self.bibcode,
            self.full_text_source().gateway_suffix()
        )
    }
}

/// Search response from ADS.
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    /// Matching papers, in the order returned by ADS.
    pub papers: Vec<Paper>,
    /// Total number of results (may be larger than `papers.len()`).
    pub num_found: u64,
    /// Rate-limit snapshot taken from the response headers.
    pub rate_limits: Option<RateLimits>,
}

/// Sort specification for search queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn citation_count_desc() -> Self {
        Self::new("citation_count", SortDirection::Desc)
    }

    pub fn date_desc() -> Self {
        Self::new("date", SortDirection::Desc)
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::citation_count_desc()
    }
}

impl std::str::FromStr for Sort {
    type Err = PadsError;

    /// Parse "field [asc|desc]"; the direction defaults to descending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let field = parts
            .next()
            .ok_or_else(|| PadsError::InvalidQuery("empty sort string".to_string()))?;
        let direction = match parts.next().map(|d| d.to_ascii_lowercase()).as_deref() {
            None | Some("desc") => SortDirection::Desc,
            Some("asc") => SortDirection::Asc,
            Some(other) => {
                return Err(PadsError::InvalidQuery(format!(
                    "unknown sort direction '{}'",
                    other
                )))
            }
        };
        if parts.next().is_some() {
            return Err(PadsError::InvalidQuery(format!("malformed sort '{}'", s)));
        }
        Ok(Self::new(field, direction))
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{} {}", self.field, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(doi: Option<&str>) -> Paper {
        Paper {
            bibcode: "2000ApJ...530..660D".to_string(),
            title: "Some Title".to_string(),
            first_author: Some("Doe, J.".to_string()),
            year: Some(2000),
            abstract_text: None,
            doi: doi.map(str::to_string),
        }
    }

    #[test]
    fn test_abstract_url() {
        assert_eq!(
            paper(None).abstract_url(),
            "https://ui.adsabs.harvard.edu/abs/2000ApJ...530..660D/abstract"
        );
    }

    #[test]
    fn test_pdf_url_prefers_publisher_with_doi() {
        assert_eq!(
            paper(Some("10.1086/308400")).pdf_url(),
            "https://ui.adsabs.harvard.edu/link_gateway/2000ApJ...530..660D/PUB_PDF"
        );
    }

    #[test]
    fn test_pdf_url_falls_back_to_eprint() {
        assert_eq!(
            paper(None).pdf_url(),
            "https://ui.adsabs.harvard.edu/link_gateway/2000ApJ...530..660D/EPRINT_PDF"
        );
        assert_eq!(paper(Some("")).full_text_source(), FullTextSource::Eprint);
    }

    #[test]
    fn test_sort_parse() {
        let sort: Sort = "citation_count desc".parse().unwrap();
        assert_eq!(sort, Sort::citation_count_desc());

        let sort: Sort = "date ASC".parse().unwrap();
        assert_eq!(sort, Sort::new("date", SortDirection::Asc));

        let sort: Sort = "year".parse().unwrap();
        assert_eq!(sort.to_string(), "year desc");
    }

    #[test]
    fn test_sort_parse_rejects_garbage() {
        assert!("".parse::<Sort>().is_err());
        assert!("date sideways".parse::<Sort>().is_err());
        assert!("date asc extra".parse::<Sort>().is_err());
    }
}
