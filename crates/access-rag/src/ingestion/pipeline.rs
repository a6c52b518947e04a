//! One-shot batch ingestion: load, chunk, embed, upsert

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RagConfig;
use crate::error::Result;
use crate::providers::{EmbeddingProvider, VectorStoreProvider};
use crate::types::DocumentChunk;

use super::chunker::TextChunker;
use super::loader::CorpusLoader;

/// Summary of an ingestion pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestStats {
    /// Documents loaded
    pub documents: usize,
    /// Chunks indexed
    pub chunks: usize,
    /// Chunks per category
    pub per_category: BTreeMap<String, usize>,
}

/// The offline ingestion pipeline
///
/// Runs to completion before the service answers queries; there is no
/// incremental ingestion. Chunk ids are content-location-derived, so
/// re-running the pass over an unchanged corpus overwrites in place.
pub struct IngestPipeline {
    loader: CorpusLoader,
    chunker: TextChunker,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
    batch_size: usize,
}

impl IngestPipeline {
    /// Create a pipeline from configuration and injected providers
    pub fn new(
        config: &RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStoreProvider>,
    ) -> Self {
        Self {
            loader: CorpusLoader::new(config.corpus.root.clone()),
            chunker: TextChunker::from_config(&config.chunking),
            embedder,
            store,
            batch_size: config.embeddings.batch_size.max(1),
        }
    }

    /// Run the batch pass over the whole corpus
    pub async fn run(&self) -> Result<IngestStats> {
        let documents = self.loader.load()?;
        tracing::info!("Loaded {} documents", documents.len());

        let mut stats = IngestStats {
            documents: documents.len(),
            ..Default::default()
        };

        let mut chunks: Vec<DocumentChunk> = Vec::new();
        for doc in &documents {
            let doc_chunks = self.chunker.chunk_document(doc);
            *stats.per_category.entry(doc.category.clone()).or_default() += doc_chunks.len();
            chunks.extend(doc_chunks);
        }
        stats.chunks = chunks.len();
        tracing::info!("Produced {} chunks", chunks.len());

        for batch in chunks.chunks(self.batch_size) {
            self.add_documents(batch).await?;
        }

        tracing::info!(
            "Ingestion complete: {} documents, {} chunks, {} categories",
            stats.documents,
            stats.chunks,
            stats.per_category.len()
        );

        Ok(stats)
    }

    /// Embed a batch of chunks and upsert them into the vector store
    pub async fn add_documents(&self, chunks: &[DocumentChunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;
        self.store.upsert(chunks, &embeddings).await
    }
}
