//! Error types for the RAG system

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG system errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unreadable or malformed corpus file (skipped during ingestion)
    #[error("Failed to load '{path}': {message}")]
    Load { path: String, message: String },

    /// Embedding service error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Vector store error
    #[error("Vector store error: {0}")]
    VectorDb(String),

    /// Chat completion error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a load error
    pub fn load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a vector db error
    pub fn vector_db(message: impl Into<String>) -> Self {
        Self::VectorDb(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Service failures are logged in full and surfaced to the caller
        // as a generic message.
        const SERVICE_MESSAGE: &str =
            "The assistant is temporarily unavailable. Please try again.";

        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::BAD_REQUEST, "config_error", msg.clone()),
            Error::Load { path, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "load_error",
                format!("Failed to load '{}': {}", path, message),
            ),
            Error::Embedding(msg) => {
                tracing::error!("Embedding service failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "embedding_error",
                    SERVICE_MESSAGE.to_string(),
                )
            }
            Error::VectorDb(msg) => {
                tracing::error!("Vector store failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "vector_db_error",
                    SERVICE_MESSAGE.to_string(),
                )
            }
            Error::Llm(msg) => {
                tracing::error!("Chat completion failure: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "llm_error",
                    SERVICE_MESSAGE.to_string(),
                )
            }
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => {
                tracing::error!("Upstream HTTP failure: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "http_error",
                    SERVICE_MESSAGE.to_string(),
                )
            }
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
