//! Response types for RAG queries

use serde::{Deserialize, Serialize};

/// A chunk resurfaced by similarity search
///
/// Read-only; lives for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Chunk text
    pub content: String,
    /// Category of the source document
    pub category: String,
    /// File name of the source document
    pub filename: String,
    /// Full path of the source document
    pub source: String,
    /// Similarity score, higher is more similar
    pub score: f32,
}

/// Which responder state produced the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Canned chit-chat reply, no services touched
    General,
    /// Answer generated from retrieved document context
    Grounded,
}

/// Response from a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The answer text
    pub answer: String,
    /// How the answer was produced
    pub kind: ResponseKind,
    /// Retrieved matches the answer was grounded on (empty for general chat)
    pub matches: Vec<SearchMatch>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl QueryResponse {
    /// Canned chit-chat response
    pub fn general(answer: String, processing_time_ms: u64) -> Self {
        Self {
            answer,
            kind: ResponseKind::General,
            matches: Vec::new(),
            processing_time_ms,
        }
    }

    /// Grounded response with the matches it was conditioned on
    pub fn grounded(
        answer: String,
        matches: Vec<SearchMatch>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            answer,
            kind: ResponseKind::Grounded,
            matches,
            processing_time_ms,
        }
    }
}
