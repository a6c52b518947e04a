//! Corpus statistics endpoint

use axum::{extract::State, Json};

use crate::ingestion::IngestStats;
use crate::server::state::AppState;

/// GET /api/corpus - Stats from the startup ingestion pass
pub async fn corpus_stats(State(state): State<AppState>) -> Json<IngestStats> {
    Json(state.corpus_stats())
}
