//! End-to-end responder and ingestion flow over fake service clients

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use access_rag::config::RagConfig;
use access_rag::error::Result;
use access_rag::generation::{Responder, SYSTEM_INSTRUCTION};
use access_rag::ingestion::IngestPipeline;
use access_rag::providers::{ChatProvider, EmbeddingProvider, VectorStoreProvider};
use access_rag::retrieval::Retriever;
use access_rag::types::{
    ConversationTurn, DocumentChunk, QueryContext, RawDocument, ResponseKind, SearchMatch,
};

struct FixedEmbedder;

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![0.1; 8])
    }

    fn dimensions(&self) -> usize {
        8
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// In-memory store that upserts by id and applies the category filter
/// the way the hosted index would
#[derive(Default)]
struct FakeStore {
    entries: Mutex<Vec<(String, DocumentChunk)>>,
    recorded_filters: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl VectorStoreProvider for FakeStore {
    async fn upsert(&self, chunks: &[DocumentChunk], embeddings: &[Vec<f32>]) -> Result<()> {
        assert_eq!(chunks.len(), embeddings.len());
        let mut entries = self.entries.lock();
        for chunk in chunks {
            let id = chunk.id();
            if let Some(existing) = entries.iter_mut().find(|(eid, _)| *eid == id) {
                existing.1 = chunk.clone();
            } else {
                entries.push((id, chunk.clone()));
            }
        }
        Ok(())
    }

    async fn query(
        &self,
        _embedding: &[f32],
        top_k: usize,
        category: Option<&str>,
    ) -> Result<Vec<SearchMatch>> {
        self.recorded_filters.lock().push(category.map(String::from));

        let entries = self.entries.lock();
        Ok(entries
            .iter()
            .filter(|(_, chunk)| category.map_or(true, |c| chunk.category == c))
            .take(top_k)
            .map(|(_, chunk)| SearchMatch {
                content: chunk.content.clone(),
                category: chunk.category.clone(),
                filename: chunk.filename.clone(),
                source: chunk.source.clone(),
                score: 0.9,
            })
            .collect())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Chat double that records every prompt and returns a scripted reply
struct ScriptedChat {
    reply: String,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedChat {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatProvider for ScriptedChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.prompts
            .lock()
            .push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }
}

fn chunk(category: &str, filename: &str, content: &str) -> DocumentChunk {
    DocumentChunk::new(
        &RawDocument {
            category: category.to_string(),
            filename: filename.to_string(),
            source: format!("data/categories/{}/{}", category, filename),
            content: String::new(),
        },
        content.to_string(),
        0,
    )
}

fn responder(
    store: Arc<FakeStore>,
    chat: Arc<ScriptedChat>,
) -> Responder {
    let retriever = Retriever::new(Arc::new(FixedEmbedder), store, 5);
    Responder::new(retriever, chat)
}

#[tokio::test]
async fn general_chat_answers_without_touching_services() {
    let store = Arc::new(FakeStore::default());
    let chat = Arc::new(ScriptedChat::new("unused"));
    let responder = responder(Arc::clone(&store), Arc::clone(&chat));

    let response = responder
        .respond("Hello there", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(response.kind, ResponseKind::General);
    assert!(response.answer.starts_with("Hello!"));
    assert!(response.matches.is_empty());
    assert!(store.recorded_filters.lock().is_empty());
    assert!(chat.prompts.lock().is_empty());
}

#[tokio::test]
async fn grounded_answer_uses_filtered_retrieval() {
    let store = Arc::new(FakeStore::default());
    let chunks = vec![
        chunk("blindness", "braille.txt", "Braille is a tactile system."),
        chunk("mobility", "canes.txt", "White canes aid travel."),
    ];
    let embeddings = vec![vec![0.1; 8], vec![0.2; 8]];
    store.upsert(&chunks, &embeddings).await.unwrap();

    let chat = Arc::new(ScriptedChat::new("Braille is read by touch."));
    let responder = responder(Arc::clone(&store), Arc::clone(&chat));

    let response = responder
        .respond(
            "What tools help blind students?",
            &QueryContext::with_category("blindness"),
        )
        .await
        .unwrap();

    assert_eq!(response.kind, ResponseKind::Grounded);
    assert_eq!(response.answer, "Braille is read by touch.");

    // The filter was delegated to the store, not applied afterwards
    assert_eq!(
        *store.recorded_filters.lock(),
        vec![Some("blindness".to_string())]
    );

    // Only matches from the requested category came back, metadata intact
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.matches[0].category, "blindness");
    assert_eq!(response.matches[0].filename, "braille.txt");
    assert!(response.matches[0].source.ends_with("braille.txt"));

    // The prompt carried the system instruction, the context, and the hint
    let prompts = chat.prompts.lock();
    let (system, user) = &prompts[0];
    assert_eq!(system, SYSTEM_INSTRUCTION);
    assert!(user.contains("focusing on blindness"));
    assert!(user.contains("Content: Braille is a tactile system."));
}

#[tokio::test]
async fn empty_retrieval_still_generates_an_answer() {
    let store = Arc::new(FakeStore::default());
    let chat = Arc::new(ScriptedChat::new(
        "I don't have material on that yet, but here are general pointers.",
    ));
    let responder = responder(store, Arc::clone(&chat));

    let response = responder
        .respond("What about echolocation training?", &QueryContext::default())
        .await
        .unwrap();

    assert_eq!(response.kind, ResponseKind::Grounded);
    assert!(!response.answer.is_empty());
    assert!(response.matches.is_empty());
    // The completion ran with an empty context block
    assert_eq!(chat.prompts.lock().len(), 1);
}

#[tokio::test]
async fn history_is_folded_into_the_prompt() {
    let store = Arc::new(FakeStore::default());
    let chat = Arc::new(ScriptedChat::new("As mentioned, braille works by touch."));
    let responder = responder(store, Arc::clone(&chat));

    let context = QueryContext::with_history(vec![ConversationTurn {
        human: "What is braille?".to_string(),
        assistant: "A tactile writing system.".to_string(),
    }]);

    responder
        .respond("How do students learn it?", &context)
        .await
        .unwrap();

    let prompts = chat.prompts.lock();
    let (_, user) = &prompts[0];
    assert!(user.contains("Previous conversation:"));
    assert!(user.contains("Human: What is braille?"));
    assert!(user.contains("Assistant: A tactile writing system."));
}

#[tokio::test]
async fn reingestion_overwrites_by_chunk_id() {
    let dir = tempfile::tempdir().unwrap();
    let category = dir.path().join("blindness");
    std::fs::create_dir(&category).unwrap();
    std::fs::write(
        category.join("braille.txt"),
        "Braille is a tactile writing system used by blind readers.",
    )
    .unwrap();

    let mut config = RagConfig::default();
    config.corpus.root = dir.path().to_path_buf();

    let store = Arc::new(FakeStore::default());
    let store_dyn: Arc<dyn VectorStoreProvider> = store.clone();
    let pipeline = IngestPipeline::new(&config, Arc::new(FixedEmbedder), store_dyn);

    let first = pipeline.run().await.unwrap();
    assert!(first.chunks > 0);
    assert_eq!(first.per_category.get("blindness"), Some(&first.chunks));
    let after_first = store.entries.lock().len();

    // Same corpus again: ids are content-location-derived, so the
    // second pass overwrites instead of duplicating
    let second = pipeline.run().await.unwrap();
    assert_eq!(second.chunks, first.chunks);
    assert_eq!(store.entries.lock().len(), after_first);
}
