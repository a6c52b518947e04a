//! Query request types

use serde::{Deserialize, Serialize};

/// One prior exchange, folded into the prompt as plain text
///
/// No session state is persisted; callers resend the turns they want
/// the model to see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user said
    pub human: String,
    /// What the assistant replied
    pub assistant: String,
}

/// Optional structured context for a query
///
/// Unifies the two historical entry points: a category filter restricts
/// retrieval to one corpus category, prior turns are folded into the
/// prompt as a transcript. Either, both, or neither may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryContext {
    /// Restrict retrieval to chunks from this category
    #[serde(default)]
    pub category: Option<String>,
    /// Prior conversation turns, oldest first
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl QueryContext {
    /// Context with only a category filter
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            history: Vec::new(),
        }
    }

    /// Context with only prior turns
    pub fn with_history(history: Vec<ConversationTurn>) -> Self {
        Self {
            category: None,
            history,
        }
    }
}

/// Query request for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub question: String,
    /// Optional category filter
    #[serde(default)]
    pub category: Option<String>,
    /// Optional prior conversation turns
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl QueryRequest {
    /// Create a bare query
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            category: None,
            history: Vec::new(),
        }
    }

    /// The structured context carried by this request
    pub fn context(&self) -> QueryContext {
        QueryContext {
            category: self.category.clone(),
            history: self.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_without_context() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"question": "What is braille?"}"#).unwrap();
        assert_eq!(request.question, "What is braille?");
        assert!(request.category.is_none());
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_request_context_carries_both_variants() {
        let request: QueryRequest = serde_json::from_str(
            r#"{
                "question": "What about screen readers?",
                "category": "blindness",
                "history": [{"human": "hi", "assistant": "Hello!"}]
            }"#,
        )
        .unwrap();

        let context = request.context();
        assert_eq!(context.category.as_deref(), Some("blindness"));
        assert_eq!(context.history.len(), 1);
        assert_eq!(context.history[0].human, "hi");
    }
}
