//! Corpus ingestion: load category directories, chunk, embed, index

mod chunker;
mod loader;
mod pipeline;

pub use chunker::TextChunker;
pub use loader::CorpusLoader;
pub use pipeline::{IngestPipeline, IngestStats};
