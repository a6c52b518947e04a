//! Application state for the RAG server

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::RagConfig;
use crate::generation::Responder;
use crate::ingestion::IngestStats;
use crate::providers::{ChatProvider, EmbeddingProvider, VectorStoreProvider};
use crate::retrieval::Retriever;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// Query responder
    responder: Responder,
    /// Stats from the startup ingestion pass
    corpus_stats: RwLock<IngestStats>,
    /// Ready state: true once ingestion has completed
    ready: RwLock<bool>,
}

impl AppState {
    /// Create application state from explicitly constructed providers
    pub fn new(
        config: RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStoreProvider>,
        chat: Arc<dyn ChatProvider>,
    ) -> Self {
        let retriever = Retriever::new(embedder, store, config.retrieval.top_k);
        let responder = Responder::new(retriever, chat);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                responder,
                corpus_stats: RwLock::new(IngestStats::default()),
                ready: RwLock::new(false),
            }),
        }
    }

    /// The query responder
    pub fn responder(&self) -> &Responder {
        &self.inner.responder
    }

    /// The configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Record the completed ingestion pass and mark the service ready
    pub fn mark_ready(&self, stats: IngestStats) {
        *self.inner.corpus_stats.write() = stats;
        *self.inner.ready.write() = true;
    }

    /// Whether the startup ingestion pass has completed
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Stats from the startup ingestion pass
    pub fn corpus_stats(&self) -> IngestStats {
        self.inner.corpus_stats.read().clone()
    }
}
