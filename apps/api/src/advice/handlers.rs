//! Axum route handlers for the Advice API.

use std::convert::Infallible;

use axum::{
    extract::{Multipart, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::{Stream, StreamExt};
use tracing::warn;

use crate::advice::catalog::{interest_catalog, InterestCatalog};
use crate::advice::models::{AdvicePayload, AdviceRequest, AdviceView, ResumeUpload};
use crate::advice::orchestrator::AdviceUpdate;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/advice/interests
pub async fn handle_interests() -> Json<InterestCatalog> {
    Json(interest_catalog())
}

/// POST /api/v1/advice
///
/// JSON profile in, six rendered fragments out. Provider failures are rendered
/// into the fragments, so this only errors on an undecodable body.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(payload): Json<AdvicePayload>,
) -> Result<Json<AdviceView>, AppError> {
    let request = AdviceRequest::try_from(payload)?;
    let rendered = state.orchestrator.advise(&request).await;
    Ok(Json(AdviceView::from(rendered)))
}

/// POST /api/v1/advice/upload
///
/// Multipart form with `bio`, `interest` and an optional `resume` file.
pub async fn handle_advice_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AdviceView>, AppError> {
    let request = read_profile_form(multipart).await?;
    let rendered = state.orchestrator.advise(&request).await;
    Ok(Json(AdviceView::from(rendered)))
}

/// POST /api/v1/advice/stream
///
/// Server-sent events: `thinking` immediately, then `final` once the provider answers.
pub async fn handle_advice_stream(
    State(state): State<AppState>,
    Json(payload): Json<AdvicePayload>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let request = AdviceRequest::try_from(payload)?;
    let events = state
        .orchestrator
        .advise_stream(request)
        .map(|update| Ok(update_event(&update)));
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn update_event(update: &AdviceUpdate) -> Event {
    Event::default()
        .event(update.phase.as_str())
        .json_data(update)
        .unwrap_or_else(|e| {
            warn!("Failed to encode advice update: {e}");
            Event::default().event("error").data(e.to_string())
        })
}

async fn read_profile_form(mut multipart: Multipart) -> Result<AdviceRequest, AppError> {
    let mut request = AdviceRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "bio" => request.bio = field.text().await?,
            "interest" => request.interest = field.text().await?,
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file is chosen.
                if !filename.is_empty() && !bytes.is_empty() {
                    request.resume = Some(ResumeUpload { filename, bytes });
                }
            }
            other => warn!("Ignoring unknown form field '{other}'"),
        }
    }

    Ok(request)
}
