//! API routes for the RAG server

pub mod corpus;
pub mod query;

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/query", post(query::query))
        .route("/corpus", get(corpus::corpus_stats))
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "access-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Q&A assistant over a categorized accessibility-education corpus",
        "endpoints": {
            "POST /api/query": "Ask a question (optional category filter and history)",
            "GET /api/corpus": "Ingested corpus statistics",
            "GET /api/info": "This document"
        }
    }))
}
