//! Provider abstractions for embeddings, vector storage, and chat completion
//!
//! All three external collaborators sit behind traits so service clients
//! are constructed once and passed in, and tests can substitute doubles.

pub mod embedding;
pub mod llm;
pub mod openai;
pub mod pinecone;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use llm::ChatProvider;
pub use openai::{OpenAiChat, OpenAiEmbedder, OpenAiProvider};
pub use pinecone::PineconeStore;
pub use vector_store::VectorStoreProvider;
