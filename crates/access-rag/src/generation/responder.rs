//! The two-state responder: canned chit-chat or grounded answering

use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::providers::ChatProvider;
use crate::retrieval::Retriever;
use crate::types::{QueryContext, QueryResponse};

use super::classifier::{classify, QueryKind};
use super::prompt::{PromptBuilder, SYSTEM_INSTRUCTION};

/// Routes queries and produces answers
///
/// General chit-chat gets a canned reply without touching any service;
/// everything else is answered by the chat model conditioned on
/// retrieved context.
pub struct Responder {
    retriever: Retriever,
    chat: Arc<dyn ChatProvider>,
}

impl Responder {
    /// Create a responder over the given retriever and chat provider
    pub fn new(retriever: Retriever, chat: Arc<dyn ChatProvider>) -> Self {
        Self { retriever, chat }
    }

    /// Answer a query, honoring the optional category filter and history
    pub async fn respond(
        &self,
        question: &str,
        context: &QueryContext,
    ) -> Result<QueryResponse> {
        let start = Instant::now();

        match classify(question) {
            QueryKind::General(kind) => {
                tracing::info!("General chat ({:?}): \"{}\"", kind, question);
                Ok(QueryResponse::general(
                    kind.canned_reply().to_string(),
                    start.elapsed().as_millis() as u64,
                ))
            }
            QueryKind::Grounded => {
                let matches = self
                    .retriever
                    .search(question, context.category.as_deref())
                    .await?;

                if matches.is_empty() {
                    // Degrade gracefully: answer from an empty context
                    // rather than failing the request
                    tracing::warn!(
                        "No matches retrieved for \"{}\"; generating with empty context",
                        question
                    );
                }

                let context_block = PromptBuilder::build_context(&matches);
                let prompt = PromptBuilder::build_query_prompt(question, &context_block, context);

                let answer = self.chat.complete(SYSTEM_INSTRUCTION, &prompt).await?;

                tracing::info!(
                    "Grounded answer from {} matches in {}ms",
                    matches.len(),
                    start.elapsed().as_millis()
                );

                Ok(QueryResponse::grounded(
                    answer,
                    matches,
                    start.elapsed().as_millis() as u64,
                ))
            }
        }
    }
}
