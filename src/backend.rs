//! The single query seam between the CLI and whatever answers searches.

use crate::client::AdsClient;
use crate::error::Result;
use crate::query::Constraints;
use crate::types::SearchResponse;
use async_trait::async_trait;

/// Something that can answer a search and export BibTeX for its results.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Run one search.
    async fn search(&self, constraints: &Constraints) -> Result<SearchResponse>;

    /// BibTeX entries for the given bibcodes, concatenated.
    async fn export_bibtex(&self, bibcodes: &[&str]) -> Result<String>;
}

#[async_trait]
impl Backend for AdsClient {
    async fn search(&self, constraints: &Constraints) -> Result<SearchResponse> {
        AdsClient::search(self, constraints).await
    }

    async fn export_bibtex(&self, bibcodes: &[&str]) -> Result<String> {
        AdsClient::export_bibtex(self, bibcodes).await
    }
}
