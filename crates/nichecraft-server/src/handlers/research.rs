//! Market research handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use nichecraft_core::MarketInsight;

const RESEARCH_FAILED: &str = "Research failed";

/// Request body for research
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub category: Option<String>,
}

/// Response for research
#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub results: Vec<MarketInsight>,
}

/// POST /api/research - Ranked market opportunities for a category
///
/// Results are returned in one body after the configured processing delay.
pub async fn run_research(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ResearchResponse>, AppError> {
    let request: ResearchRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(RESEARCH_FAILED).with_source(e))?;

    let category = request
        .category
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::bad_request("Category is required"))?;

    tokio::time::sleep(state.config.studio.research.delay).await;

    let outcome = state.matcher.analyze(&category);

    info!(
        category = %category,
        matched = ?outcome.matched,
        count = outcome.insights.len(),
        "Research complete"
    );

    Ok(Json(ResearchResponse {
        results: outcome.insights,
    }))
}
