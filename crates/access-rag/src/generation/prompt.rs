//! Prompt templates for grounded answer generation

use crate::types::{ConversationTurn, QueryContext, SearchMatch};

/// Fixed system instruction sent with every grounded completion
pub const SYSTEM_INSTRUCTION: &str = "You are an expert assistant helping educators \
make education accessible for visually impaired students. Your responses should be \
clear, structured, and actionable.";

/// Prompt builder for grounded queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Concatenate retrieved content and sources into a context block
    pub fn build_context(matches: &[SearchMatch]) -> String {
        matches
            .iter()
            .filter(|m| !m.content.is_empty())
            .map(|m| format!("Content: {}\nSource: {}\n", m.content, m.source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fold prior turns into a plain transcript
    pub fn build_history(turns: &[ConversationTurn]) -> String {
        turns
            .iter()
            .flat_map(|turn| {
                [
                    format!("Human: {}", turn.human),
                    format!("Assistant: {}", turn.assistant),
                ]
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the single grounded-answer prompt
    ///
    /// Embeds the query, the optional category hint, the optional prior
    /// turns, the retrieved context, and the fixed response structure.
    pub fn build_query_prompt(question: &str, context: &str, query_context: &QueryContext) -> String {
        let category_hint = query_context
            .category
            .as_deref()
            .map(|c| format!(" focusing on {}", c))
            .unwrap_or_default();

        let history_block = if query_context.history.is_empty() {
            String::new()
        } else {
            format!(
                "Previous conversation:\n{}\n\n",
                Self::build_history(&query_context.history)
            )
        };

        format!(
            r#"Based on the following context{category_hint}, provide a clear and structured response to the query: "{question}"

{history_block}Context:
{context}

Please structure your response with:
1. A brief introduction
2. Key points or main information
3. Specific examples or applications where relevant
4. Any important considerations or best practices
5. Remember to maintain a supportive and educational tone

Query: {question}"#,
            category_hint = category_hint,
            question = question,
            history_block = history_block,
            context = context,
        )
    }
}
