/// LLM Client: the single point of entry for all Claude API calls in the advisor.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// One attempt per call: the advice flow is fail-fast, so there is no retry loop.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all advice generation.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }

    /// The text content with any whole-document markdown fence removed.
    pub fn markdown(&self) -> Result<&str, LlmError> {
        self.text()
            .map(strip_markdown_fence)
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with a fixed request timeout.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a single call to the Claude API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

/// Pulls `error.message` out of an Anthropic error envelope, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips a ```markdown / ```md / ``` fence wrapped around the whole response.
/// Inner fences (skill-meter, project-card) are left alone.
fn strip_markdown_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = ["```markdown", "```md", "```"]
        .iter()
        .find_map(|tag| text.strip_prefix(tag))
    else {
        return text;
    };
    // Only a bare opening fence counts; "```skill-meter" at the top is content.
    let Some(inner) = inner.strip_prefix('\n').or_else(|| inner.strip_prefix("\r\n")) else {
        return text;
    };
    inner
        .trim_end()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_fence_with_tag() {
        let input = "```markdown\n### 💫 Quick Summary\nHi\n```";
        assert_eq!(strip_markdown_fence(input), "### 💫 Quick Summary\nHi");
    }

    #[test]
    fn test_strip_markdown_fence_without_tag() {
        let input = "```\n### 🎯 Recommended Roles\n```";
        assert_eq!(strip_markdown_fence(input), "### 🎯 Recommended Roles");
    }

    #[test]
    fn test_strip_markdown_fence_no_fences() {
        let input = "### 💫 Quick Summary\n```skill-meter\nA [█] 10%\n```";
        assert_eq!(strip_markdown_fence(input), input);
    }

    #[test]
    fn test_strip_markdown_fence_keeps_leading_micro_format() {
        let input = "```skill-meter\nA [█] 10%\n```";
        assert_eq!(strip_markdown_fence(input), input);
    }

    #[test]
    fn test_markdown_rejects_missing_text_block() {
        let response: LlmResponse = serde_json::from_str(
            r#"{"content": [{"type": "tool_use"}], "usage": {"input_tokens": 1, "output_tokens": 0}}"#,
        )
        .unwrap();
        assert!(matches!(response.markdown(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_markdown_returns_first_text_block() {
        let response: LlmResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "```md\n### 💫 Quick Summary\n```"}], "usage": {"input_tokens": 5, "output_tokens": 9}}"#,
        )
        .unwrap();
        assert_eq!(response.markdown().unwrap(), "### 💫 Quick Summary");
    }

    #[test]
    fn test_api_error_message_prefers_envelope() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(api_error_message(body.to_string()), "Overloaded");
        assert_eq!(api_error_message("gateway down".to_string()), "gateway down");
    }
}
