//! Configuration for the RAG system

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main RAG system configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Corpus location
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Embedding API configuration
    #[serde(default)]
    pub embeddings: EmbeddingConfig,
    /// Vector database configuration
    #[serde(default)]
    pub vector_db: VectorDbConfig,
    /// Chat completion configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Load from the path in `ACCESS_RAG_CONFIG`, or fall back to defaults
    pub fn from_env_or_default() -> Result<Self> {
        match std::env::var("ACCESS_RAG_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Resolve a credential from the environment
///
/// Credentials are never stored in the config file.
pub fn env_api_key(var: &str) -> Result<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set", var)))
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Corpus location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Root directory holding one subdirectory per category
    pub root: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data/categories"),
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target window size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive windows in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding model name
    pub model: String,
    /// Embedding dimensions (1536 for text-embedding-3-small)
    pub dimensions: usize,
    /// Texts per embedding request
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-small".to_string(),
            dimensions: 1536,
            batch_size: 64,
        }
    }
}

/// Vector database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDbConfig {
    /// Index host, e.g. "my-index-abc123.svc.us-east-1.pinecone.io"
    pub index_host: String,
    /// Optional namespace within the index
    #[serde(default)]
    pub namespace: Option<String>,
    /// Vectors per upsert request
    pub upsert_batch_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VectorDbConfig {
    fn default() -> Self {
        Self {
            index_host: String::new(),
            namespace: None,
            upsert_batch_size: 100,
            timeout_secs: 30,
        }
    }
}

/// Chat completion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL, shared with the embedding endpoint
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Maximum output length in tokens
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 250,
            timeout_secs: 60,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RagConfig::default();
        assert_eq!(config.chunking.chunk_size, 500);
        assert_eq!(config.chunking.chunk_overlap, 50);
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_tokens, 250);
        assert_eq!(config.embeddings.dimensions, 1536);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RagConfig = toml::from_str(
            r#"
            [chunking]
            chunk_size = 800
            chunk_overlap = 100

            [vector_db]
            index_host = "test-index.svc.pinecone.io"
            upsert_batch_size = 50
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.chunking.chunk_size, 800);
        assert_eq!(config.vector_db.index_host, "test-index.svc.pinecone.io");
        // Untouched sections fall back to defaults
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.server.port, 8080);
    }
}
