//! Corpus document and chunk types

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// A raw document loaded from the corpus, before chunking
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Category directory the file was found under
    pub category: String,
    /// File name within the category directory
    pub filename: String,
    /// Full path to the source file
    pub source: String,
    /// File content (UTF-8)
    pub content: String,
}

/// A bounded text window extracted from a source document
///
/// Immutable once created; every chunk carries its source document's
/// category, filename, and path so retrieval can cite and filter on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Window text
    pub content: String,
    /// Category of the source document
    pub category: String,
    /// File name of the source document
    pub filename: String,
    /// Full path of the source document
    pub source: String,
    /// Window index within the source document
    pub chunk_index: u32,
}

impl DocumentChunk {
    /// Create a chunk tagged with its source document's metadata
    pub fn new(doc: &RawDocument, content: String, chunk_index: u32) -> Self {
        Self {
            content,
            category: doc.category.clone(),
            filename: doc.filename.clone(),
            source: doc.source.clone(),
            chunk_index,
        }
    }

    /// Deterministic chunk id: hash of source path and window index.
    ///
    /// Re-ingesting the same file produces the same ids, so repeated
    /// ingestion overwrites entries in place instead of duplicating them.
    pub fn id(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.source.as_bytes());
        hasher.update(b":");
        hasher.update(self.chunk_index.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Metadata stored alongside the vector in the index
    ///
    /// Retrieval reconstructs matches from this map, so it must carry
    /// everything a response cites or filters on.
    pub fn to_vector_metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut meta = HashMap::new();
        meta.insert("content".to_string(), serde_json::json!(self.content));
        meta.insert("category".to_string(), serde_json::json!(self.category));
        meta.insert("filename".to_string(), serde_json::json!(self.filename));
        meta.insert("source".to_string(), serde_json::json!(self.source));
        meta.insert("chunk_index".to_string(), serde_json::json!(self.chunk_index));
        meta
    }
}
