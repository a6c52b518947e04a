//! Core data types

pub mod document;
pub mod query;
pub mod response;

pub use document::{DocumentChunk, RawDocument};
pub use query::{ConversationTurn, QueryContext, QueryRequest};
pub use response::{QueryResponse, ResponseKind, SearchMatch};
