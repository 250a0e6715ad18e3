//! Advice orchestration: validate → fetch advice → split → render.
//!
//! The orchestrator never fails. Missing input yields a guiding message, a
//! provider failure yields the uniform error state, anything else is rendered.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::advice::models::{AdviceDocument, AdviceRequest, AdviceView};
use crate::advice::provider::{AdviceProvider, ProviderError};
use crate::format::sections::{split_sections, SectionKey};
use crate::format::{format_sections, RenderedSections};

pub const VALIDATION_PROMPT: &str = "Please provide your bio/goals and select an interest area.";
pub const THINKING_MESSAGE: &str =
    "🤔 Agent is thinking... Parsing your profile and crafting a response. This may take a moment.";
pub const ERROR_PLACEHOLDER: &str = "Error occurred";
/// Advice text starting with this marker is a provider-side error message.
pub const EMBEDDED_ERROR_MARKER: &str = "Error";

/// Which render an incremental update carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePhase {
    Thinking,
    Final,
}

impl AdvicePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            AdvicePhase::Thinking => "thinking",
            AdvicePhase::Final => "final",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdviceUpdate {
    pub phase: AdvicePhase,
    #[serde(flatten)]
    pub view: AdviceView,
}

impl AdviceUpdate {
    fn new(phase: AdvicePhase, sections: RenderedSections) -> Self {
        Self {
            phase,
            view: AdviceView::from(sections),
        }
    }
}

#[derive(Clone)]
pub struct Orchestrator {
    provider: Arc<dyn AdviceProvider>,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self { provider }
    }

    /// Produces the six rendered fragments for one request.
    pub async fn advise(&self, request: &AdviceRequest) -> RenderedSections {
        if !request.is_complete() {
            info!("Rejecting advice request: bio or interest missing");
            return RenderedSections::message(VALIDATION_PROMPT);
        }

        let span = info_span!(
            "advice",
            request_id = %Uuid::new_v4(),
            backend = self.provider.backend(),
            interest = %request.interest,
        );
        self.fetch_and_render(request).instrument(span).await
    }

    /// Interim render shown while the provider call is outstanding.
    pub fn thinking() -> RenderedSections {
        RenderedSections::message(THINKING_MESSAGE)
    }

    /// Incremental delivery: a `thinking` update, then the `final` one. Invalid
    /// requests skip straight to the final validation message.
    pub fn advise_stream(&self, request: AdviceRequest) -> BoxStream<'static, AdviceUpdate> {
        if !request.is_complete() {
            let update = AdviceUpdate::new(
                AdvicePhase::Final,
                RenderedSections::message(VALIDATION_PROMPT),
            );
            return stream::once(async move { update }).boxed();
        }

        let this = self.clone();
        let thinking =
            stream::once(async { AdviceUpdate::new(AdvicePhase::Thinking, Self::thinking()) });
        let done = stream::once(async move {
            AdviceUpdate::new(AdvicePhase::Final, this.advise(&request).await)
        });
        thinking.chain(done).boxed()
    }

    async fn fetch_and_render(&self, request: &AdviceRequest) -> RenderedSections {
        let document = match self.provider.advise(request).await.and_then(reject_embedded_error) {
            Ok(document) => document,
            Err(e) => {
                error!("Advice request failed: {e}");
                return failure(&e);
            }
        };

        let sections = split_sections(document.as_str());
        for (key, content) in sections.iter() {
            if content.is_empty() {
                warn!("Advice has no {} section", key.as_str());
            }
        }

        let rendered = format_sections(&sections);
        info!(
            "Rendered advice fragments: {}",
            SectionKey::ALL
                .iter()
                .map(|key| format!("{}={}", key.as_str(), rendered.get(*key).len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        rendered
    }
}

fn reject_embedded_error(document: AdviceDocument) -> Result<AdviceDocument, ProviderError> {
    if document.as_str().trim_start().starts_with(EMBEDDED_ERROR_MARKER) {
        return Err(ProviderError::Embedded(document.as_str().trim().to_string()));
    }
    Ok(document)
}

fn failure(error: &ProviderError) -> RenderedSections {
    RenderedSections::failure(format!("An error occurred: {error}"), ERROR_PLACEHOLDER)
}
