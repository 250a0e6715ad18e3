//! Advice providers: where the markdown advice document comes from.
//!
//! `HttpAdviceProvider` posts the profile to a hosted agent endpoint;
//! `LlmAdviceProvider` runs the agent in-process against the LLM client.
//! `AppState` holds an `Arc<dyn AdviceProvider>`, chosen at startup via config.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::advice::models::{AdviceDocument, AdviceEnvelope, AdviceRequest};
use crate::advice::prompts::{build_advice_prompt, ADVICE_SYSTEM};
use crate::advice::resume::extract_resume_text;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to advice provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("advice provider timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("advice provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed advice provider response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Llm(#[from] LlmError),

    /// The provider answered, but its advice text is an error message.
    #[error("{0}")]
    Embedded(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Produces one advice document. Exactly one upstream attempt; no retry.
    async fn advise(&self, request: &AdviceRequest) -> Result<AdviceDocument, ProviderError>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpAdviceProvider: hosted agent endpoint
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpAdviceProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAdviceProvider {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
            timeout,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::Transport(error)
        }
    }
}

#[async_trait]
impl AdviceProvider for HttpAdviceProvider {
    async fn advise(&self, request: &AdviceRequest) -> Result<AdviceDocument, ProviderError> {
        info!("Requesting advice from {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request.to_payload())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        info!("Advice provider responded with status {}", status);

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: AdviceEnvelope =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        debug!("Advice text: {} chars", envelope.advice.len());

        Ok(AdviceDocument::new(envelope.advice))
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAdviceProvider: in-process agent
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAdviceProvider {
    llm: LlmClient,
}

impl LlmAdviceProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AdviceProvider for LlmAdviceProvider {
    async fn advise(&self, request: &AdviceRequest) -> Result<AdviceDocument, ProviderError> {
        let resume_text = match &request.resume {
            Some(upload) => Some(extract_resume_text(upload.bytes.clone(), &upload.filename).await),
            None => None,
        };
        let markdown = generate_markdown(
            &self.llm,
            &request.bio,
            &request.interest,
            resume_text.as_deref(),
        )
        .await?;
        Ok(AdviceDocument::new(markdown))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Builds the advice prompt and performs the single LLM call.
pub async fn generate_markdown(
    llm: &LlmClient,
    bio: &str,
    interest: &str,
    resume_text: Option<&str>,
) -> Result<String, LlmError> {
    let prompt = build_advice_prompt(bio, interest, resume_text);
    let response = llm.call(&prompt, ADVICE_SYSTEM).await?;
    Ok(response.markdown()?.to_string())
}
