//! access-rag: Retrieval-augmented Q&A over a categorized text corpus
//!
//! This crate ingests a directory tree of category-tagged text documents,
//! indexes overlapping chunk embeddings in a hosted vector database, and
//! answers user queries by conditioning a hosted chat model on retrieved
//! chunks. General chit-chat is short-circuited with canned replies.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use types::{
    document::{DocumentChunk, RawDocument},
    query::{ConversationTurn, QueryContext, QueryRequest},
    response::{QueryResponse, ResponseKind, SearchMatch},
};
