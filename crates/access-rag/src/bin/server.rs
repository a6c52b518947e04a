//! RAG server binary
//!
//! Ingests the corpus, then serves queries.
//! Run with: cargo run -p access-rag --bin access-rag-server

use std::sync::Arc;

use access_rag::config::RagConfig;
use access_rag::ingestion::IngestPipeline;
use access_rag::providers::{
    ChatProvider, EmbeddingProvider, OpenAiProvider, PineconeStore, VectorStoreProvider,
};
use access_rag::server::{state::AppState, RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "access_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = RagConfig::from_env_or_default()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Corpus root: {}", config.corpus.root.display());
    tracing::info!("  - Embedding model: {}", config.embeddings.model);
    tracing::info!("  - Chat model: {}", config.llm.model);
    tracing::info!(
        "  - Chunking: {} chars, {} overlap",
        config.chunking.chunk_size,
        config.chunking.chunk_overlap
    );
    tracing::info!("  - Top-K: {}", config.retrieval.top_k);

    // Construct service clients explicitly; credentials come from the
    // environment (OPENAI_API_KEY, PINECONE_API_KEY)
    let (embedder, chat) = OpenAiProvider::from_env(&config.embeddings, &config.llm)?.split();
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(embedder);
    let chat: Arc<dyn ChatProvider> = Arc::new(chat);
    let store: Arc<dyn VectorStoreProvider> = Arc::new(PineconeStore::from_env(&config.vector_db)?);

    if !store.health_check().await.unwrap_or(false) {
        tracing::warn!("Vector store not reachable at {}", config.vector_db.index_host);
    }

    // One-shot batch ingestion: runs to completion before the service
    // answers queries
    let state = AppState::new(
        config.clone(),
        Arc::clone(&embedder),
        Arc::clone(&store),
        chat,
    );

    tracing::info!("Ingesting corpus...");
    let pipeline = IngestPipeline::new(&config, embedder, store);
    let stats = pipeline.run().await?;
    tracing::info!(
        "Corpus ready: {} chunks across {} categories",
        stats.chunks,
        stats.per_category.len()
    );
    state.mark_ready(stats);

    // Serve
    let server = RagServer::new(config, state);
    tracing::info!("API: http://{}", server.address());
    server.start().await?;

    Ok(())
}
