//! Query endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse};

/// POST /api/query - Answer a question
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    tracing::info!("Query: \"{}\"", request.question);

    let response = state
        .responder()
        .respond(&request.question, &request.context())
        .await?;

    Ok(Json(response))
}
