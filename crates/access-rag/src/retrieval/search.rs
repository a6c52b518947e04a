//! Query-time retrieval: embed the query, search the vector store

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{EmbeddingProvider, VectorStoreProvider};
use crate::types::SearchMatch;

/// Retrieves the top-K most similar chunks for a query
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
    top_k: usize,
}

impl Retriever {
    /// Create a retriever over the given providers
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStoreProvider>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            store,
            top_k,
        }
    }

    /// Search for chunks relevant to the query, highest similarity first
    ///
    /// When `category` is given the store restricts results to chunks
    /// whose metadata category matches it exactly.
    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<SearchMatch>> {
        let embedding = self.embedder.embed(query).await?;

        let mut matches = self.store.query(&embedding, self.top_k, category).await?;

        // The store returns its neighbors ranked; enforce the ordering
        // invariant regardless of backend.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(self.top_k);

        Ok(matches)
    }
}
