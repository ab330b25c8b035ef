//! BibTeX export endpoint.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::parse_export_response;

impl AdsClient {
    /// Export papers as BibTeX, in one request for all bibcodes.
    pub async fn export_bibtex(&self, bibcodes: &[&str]) -> Result<String> {
        tracing::info!(count = bibcodes.len(), "exporting BibTeX");
        let body = serde_json::json!({
            "bibcode": bibcodes,
        });

        let reply = self.post_json("/export/bibtex", &body).await?;
        parse_export_response(&reply.body)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::AdsClient;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_export_bibtex() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/export/bibtex")
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::Json(serde_json::json!({
                "bibcode": ["2000ApJ...530..660D"]
            })))
            .with_status(200)
            .with_body(r#"{"msg": "Retrieved 1 abstracts", "export": "@ARTICLE{2000ApJ...530..660D,\n}\n"}"#)
            .create_async()
            .await;

        let client = AdsClient::new("tok").unwrap().with_base_url(server.url());
        let bibtex = client.export_bibtex(&["2000ApJ...530..660D"]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(bibtex, "@ARTICLE{2000ApJ...530..660D,\n}\n");
    }
}
