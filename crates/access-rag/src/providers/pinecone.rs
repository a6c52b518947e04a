//! Pinecone-backed vector store provider
//!
//! Talks to a hosted index over its data-plane API: `/vectors/upsert`
//! for indexing and `/query` for filtered nearest-neighbor search.
//! Chunk metadata rides along with each vector and is reconstructed
//! into matches on the way back.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{env_api_key, VectorDbConfig};
use crate::error::{Error, Result};
use crate::types::{DocumentChunk, SearchMatch};

use super::vector_store::VectorStoreProvider;

/// Pinecone index client
pub struct PineconeStore {
    client: Client,
    index_host: String,
    api_key: String,
    namespace: Option<String>,
    upsert_batch_size: usize,
}

#[derive(Serialize)]
struct UpsertRequest {
    vectors: Vec<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
}

#[derive(Serialize, Clone)]
struct Vector {
    id: String,
    values: Vec<f32>,
    metadata: HashMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct QueryRequest {
    vector: Vec<f32>,
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct Match {
    #[allow(dead_code)]
    id: String,
    score: f32,
    #[serde(default)]
    metadata: Option<HashMap<String, serde_json::Value>>,
}

impl PineconeStore {
    /// Create a store client with an explicit API key
    pub fn new(config: &VectorDbConfig, api_key: String) -> Result<Self> {
        if config.index_host.is_empty() {
            return Err(Error::Config(
                "vector_db.index_host is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            index_host: config.index_host.clone(),
            api_key,
            namespace: config.namespace.clone(),
            upsert_batch_size: config.upsert_batch_size.max(1),
        })
    }

    /// Create a store client with the key from `PINECONE_API_KEY`
    pub fn from_env(config: &VectorDbConfig) -> Result<Self> {
        let api_key = env_api_key("PINECONE_API_KEY")?;
        Self::new(config, api_key)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("https://{}{}", self.index_host, path)
    }

    /// Reconstruct a match from the metadata stored at upsert time
    fn metadata_to_match(metadata: &HashMap<String, serde_json::Value>, score: f32) -> SearchMatch {
        let field = |key: &str| {
            metadata
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        SearchMatch {
            content: field("content"),
            category: field("category"),
            filename: field("filename"),
            source: field("source"),
            score,
        }
    }
}

#[async_trait]
impl VectorStoreProvider for PineconeStore {
    async fn upsert(&self, chunks: &[DocumentChunk], embeddings: &[Vec<f32>]) -> Result<()> {
        if chunks.len() != embeddings.len() {
            return Err(Error::vector_db(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let vectors: Vec<Vector> = chunks
            .iter()
            .zip(embeddings.iter())
            .map(|(chunk, embedding)| Vector {
                id: chunk.id(),
                values: embedding.clone(),
                metadata: chunk.to_vector_metadata(),
            })
            .collect();

        let url = self.endpoint("/vectors/upsert");

        for batch in vectors.chunks(self.upsert_batch_size) {
            let request = UpsertRequest {
                vectors: batch.to_vec(),
                namespace: self.namespace.clone(),
            };

            let response = self
                .client
                .post(&url)
                .header("Api-Key", &self.api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| Error::VectorDb(format!("Upsert request failed: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::VectorDb(format!(
                    "Upsert failed: HTTP {} - {}",
                    status, body
                )));
            }
        }

        Ok(())
    }

    async fn query(
        &self,
        embedding: &[f32],
        top_k: usize,
        category: Option<&str>,
    ) -> Result<Vec<SearchMatch>> {
        // Exact-match metadata filter, applied by the index itself
        let filter = category.map(|c| serde_json::json!({ "category": { "$eq": c } }));

        let request = QueryRequest {
            vector: embedding.to_vec(),
            top_k,
            include_metadata: true,
            filter,
            namespace: self.namespace.clone(),
        };

        let response = self
            .client
            .post(self.endpoint("/query"))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::VectorDb(format!("Query request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VectorDb(format!(
                "Query failed: HTTP {} - {}",
                status, body
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::VectorDb(format!("Failed to parse query response: {}", e)))?;

        let matches = query_response
            .matches
            .iter()
            .filter_map(|m| {
                m.metadata
                    .as_ref()
                    .map(|meta| Self::metadata_to_match(meta, m.score))
            })
            .collect();

        Ok(matches)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = self.endpoint("/describe_index_stats");
        match self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&serde_json::json!({}))
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "pinecone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_to_match_preserves_fields() {
        let chunk = DocumentChunk {
            content: "Braille displays refresh line by line.".to_string(),
            category: "blindness".to_string(),
            filename: "displays.txt".to_string(),
            source: "data/categories/blindness/displays.txt".to_string(),
            chunk_index: 2,
        };

        let restored = PineconeStore::metadata_to_match(&chunk.to_vector_metadata(), 0.87);
        assert_eq!(restored.content, chunk.content);
        assert_eq!(restored.category, chunk.category);
        assert_eq!(restored.filename, chunk.filename);
        assert_eq!(restored.source, chunk.source);
        assert_eq!(restored.score, 0.87);
    }

    #[test]
    fn test_query_request_wire_format() {
        let request = QueryRequest {
            vector: vec![0.1, 0.2],
            top_k: 5,
            include_metadata: true,
            filter: Some(serde_json::json!({ "category": { "$eq": "blindness" } })),
            namespace: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["topK"], 5);
        assert_eq!(json["includeMetadata"], true);
        assert_eq!(json["filter"]["category"]["$eq"], "blindness");
        assert!(json.get("namespace").is_none());
    }

    #[test]
    fn test_empty_index_host_is_rejected() {
        let config = VectorDbConfig::default();
        let result = PineconeStore::new(&config, "key".to_string());
        assert!(result.is_err());
    }
}
