//! Product generation handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::sse::{Event, Sse},
};
use futures::{Stream, StreamExt};
use serde::Deserialize;

use crate::{AppError, AppState};
use nichecraft_core::{Error, ProductRequest};

const GENERATION_FAILED: &str = "Generation failed";

/// Request body for generation. Fields are optional so that missing values
/// surface as a 400 rather than a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub product_type: Option<String>,
    pub topic: Option<String>,
}

/// POST /api/generate - Generate a product, streaming progress
///
/// Each event is framed as `data: <json>\n\n` with either a `progress` label or
/// the final `product`. Validation happens before the stream opens; if the
/// client disconnects the generation task stops on its own.
pub async fn generate_product(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, AppError> {
    let body: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(GENERATION_FAILED).with_source(e))?;

    let request = ProductRequest::new(
        body.product_type.unwrap_or_default(),
        body.topic.unwrap_or_default(),
    );

    let progress = state.pipeline.start(request).map_err(|e| match e {
        Error::Validation(msg) => AppError::bad_request(&msg),
        other => AppError::internal(GENERATION_FAILED).with_source(other),
    })?;

    // A serialization error ends the response early, so the client never sees
    // a product event for this stream
    let events = progress.map(|event| Event::default().json_data(&event));

    Ok(Sse::new(events))
}
