//! OpenAI-backed providers for embeddings and chat completion
//!
//! One HTTP client serves both the `/embeddings` and `/chat/completions`
//! endpoints; the two provider traits wrap it separately so either half
//! can be swapped out in tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{env_api_key, EmbeddingConfig, LlmConfig};
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;
use super::llm::ChatProvider;

/// Raw OpenAI API client shared by the embedding and chat providers
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct EmbeddingsRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a new client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Generate embeddings for a batch of texts
    async fn embeddings(&self, model: &str, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.base_url);
        let request = EmbeddingsRequest {
            model: model.to_string(),
            input: texts.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Embedding(format!("Embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Embedding(format!(
                "Embedding failed: HTTP {} - {}",
                status, body
            )));
        }

        let embed_response: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| Error::Embedding(format!("Failed to parse embedding response: {}", e)))?;

        // The API may return entries out of order; `index` is authoritative
        let mut data = embed_response.data;
        data.sort_by_key(|d| d.index);

        if data.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    /// Run a system + user chat completion
    async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Completion failed: HTTP {} - {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse completion response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Llm("No completion in response".to_string()))
    }

    /// Check if the API is reachable with the configured credentials
    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.base_url);
        match self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

/// OpenAI embedding provider
pub struct OpenAiEmbedder {
    client: Arc<OpenAiClient>,
    model: String,
    dimensions: usize,
    batch_size: usize,
}

impl OpenAiEmbedder {
    /// Create from an existing client
    pub fn from_client(client: Arc<OpenAiClient>, config: &EmbeddingConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            dimensions: config.dimensions,
            batch_size: config.batch_size.max(1),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self
            .client
            .embeddings(&self.model, &[text.to_string()])
            .await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("No embedding in response".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut all_embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size) {
            all_embeddings.extend(self.client.embeddings(&self.model, batch).await?);
        }
        Ok(all_embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.health_check().await
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// OpenAI chat completion provider
pub struct OpenAiChat {
    client: Arc<OpenAiClient>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChat {
    /// Create from an existing client
    pub fn from_client(client: Arc<OpenAiClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::info!("Generating answer with model: {}", self.model);
        self.client
            .chat(&self.model, system, user, self.temperature, self.max_tokens)
            .await
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.health_check().await
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Combined OpenAI provider sharing a single client for both halves
pub struct OpenAiProvider {
    embedder: OpenAiEmbedder,
    chat: OpenAiChat,
}

impl OpenAiProvider {
    /// Create a combined provider with an explicit API key
    pub fn new(
        embeddings: &EmbeddingConfig,
        llm: &LlmConfig,
        api_key: String,
    ) -> Result<Self> {
        let client = Arc::new(OpenAiClient::new(
            llm.base_url.clone(),
            api_key,
            llm.timeout_secs,
        )?);

        Ok(Self {
            embedder: OpenAiEmbedder::from_client(Arc::clone(&client), embeddings),
            chat: OpenAiChat::from_client(client, llm),
        })
    }

    /// Create a combined provider with the key from `OPENAI_API_KEY`
    pub fn from_env(embeddings: &EmbeddingConfig, llm: &LlmConfig) -> Result<Self> {
        let api_key = env_api_key("OPENAI_API_KEY")?;
        Self::new(embeddings, llm, api_key)
    }

    /// Split into separate providers
    pub fn split(self) -> (OpenAiEmbedder, OpenAiChat) {
        (self.embedder, self.chat)
    }
}
