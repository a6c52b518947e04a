//! Vector store provider trait for indexing and similarity search

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DocumentChunk, SearchMatch};

/// Trait for the hosted vector index
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Upsert chunks with their embeddings under content-derived ids
    ///
    /// `chunks` and `embeddings` are parallel slices.
    async fn upsert(&self, chunks: &[DocumentChunk], embeddings: &[Vec<f32>]) -> Result<()>;

    /// Nearest-neighbor search, highest similarity first
    ///
    /// `category` is an exact-match metadata filter applied by the store
    /// itself, not post-filtered by the caller.
    async fn query(
        &self,
        embedding: &[f32],
        top_k: usize,
        category: Option<&str>,
    ) -> Result<Vec<SearchMatch>>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
