//! Search endpoint.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::{parse_search_response, SEARCH_FIELDS};
use crate::query::Constraints;
use crate::types::SearchResponse;

impl AdsClient {
    /// Run one search for the given constraints.
    ///
    /// Returns at most `constraints.rows` papers in the requested sort order.
    pub async fn search(&self, constraints: &Constraints) -> Result<SearchResponse> {
        let query = constraints.query();
        let rows = constraints.rows.to_string();
        let sort = constraints.sort.to_string();
        tracing::info!(%query, %rows, %sort, "searching ADS");

        let params = [
            ("q", query.as_str()),
            ("fl", SEARCH_FIELDS),
            ("rows", rows.as_str()),
            ("start", "0"),
            ("sort", sort.as_str()),
        ];

        let reply = self.get("/search/query", &params).await?;
        let mut response = parse_search_response(&reply.body)?;
        response.rate_limits = reply.rate_limits;
        tracing::debug!(
            returned = response.papers.len(),
            num_found = response.num_found,
            "search complete"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::AdsClient;
    use crate::query::{Constraints, YearRange};
    use mockito::Matcher;

    #[tokio::test]
    async fn test_search_sends_constraints() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/query")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "q".into(),
                    "database:astronomy AND author:\"doe, j\" AND year:[2000 TO 2001]".into(),
                ),
                Matcher::UrlEncoded("fl".into(), "abstract,bibcode,doi,first_author,title,year".into()),
                Matcher::UrlEncoded("rows".into(), "5".into()),
                Matcher::UrlEncoded("start".into(), "0".into()),
                Matcher::UrlEncoded("sort".into(), "citation_count desc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-ratelimit-remaining", "4999")
            .with_body(
                r#"{"response": {"numFound": 2, "docs": [
                    {"bibcode": "2000ApJ...530..660D", "title": ["First"], "first_author": "Doe, J."},
                    {"bibcode": "2001MNRAS.321..123D", "title": ["Second"], "first_author": "Doe, J."}
                ]}}"#,
            )
            .create_async()
            .await;

        let client = AdsClient::new("tok").unwrap().with_base_url(server.url());
        let constraints = Constraints {
            author: Some("doe, j".to_string()),
            year: Some("2000-2001".parse::<YearRange>().unwrap()),
            rows: 5,
            ..Constraints::default()
        };
        let response = client.search(&constraints).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.num_found, 2);
        let bibcodes: Vec<&str> = response.papers.iter().map(|p| p.bibcode.as_str()).collect();
        assert_eq!(bibcodes, ["2000ApJ...530..660D", "2001MNRAS.321..123D"]);
        assert_eq!(response.rate_limits.unwrap().remaining, Some(4999));
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/query")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response": {"numFound": 0, "docs": []}}"#)
            .create_async()
            .await;

        let client = AdsClient::new("tok").unwrap().with_base_url(server.url());
        let response = client.search(&Constraints::default()).await.unwrap();
        assert!(response.papers.is_empty());
        assert!(response.rate_limits.is_none());
    }
}
