//! Advice agent endpoint, the provider side of the advice flow.
//!
//! Accepts the same payload the `HttpAdviceProvider` sends and always answers
//! `{advice}` with status 200. Failures are written into `advice` as text
//! starting with `Error`, which the orchestrator renders as an error state.

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::advice::models::{AdviceEnvelope, AdvicePayload, ResumeUpload};
use crate::advice::provider::generate_markdown;
use crate::advice::resume::extract_resume_text;
use crate::llm_client::LlmClient;

/// POST /api/v1/agent/advice
///
/// Mounted with the LLM client as its state, so it only exists when one is configured.
pub async fn handle_agent_advice(
    State(llm): State<LlmClient>,
    Json(payload): Json<AdvicePayload>,
) -> Json<AdviceEnvelope> {
    Json(AdviceEnvelope {
        advice: run_agent(&llm, payload).await,
    })
}

async fn run_agent(llm: &LlmClient, payload: AdvicePayload) -> String {
    info!(
        "Agent request: interest='{}', resume={}",
        payload.interest,
        payload.resume.is_some()
    );

    let resume_text = match payload.resume.map(ResumeUpload::try_from).transpose() {
        Ok(Some(upload)) => Some(extract_resume_text(upload.bytes, &upload.filename).await),
        Ok(None) => None,
        Err(e) => {
            error!("Agent request rejected: {e}");
            return format!("Error occurred in web endpoint: {e}");
        }
    };

    match generate_markdown(llm, &payload.bio, &payload.interest, resume_text.as_deref()).await {
        Ok(advice) => {
            info!("Generated advice: {} chars", advice.len());
            advice
        }
        Err(e) => {
            error!("Generate content error: {e}");
            format!("Error generating content: {e}")
        }
    }
}
