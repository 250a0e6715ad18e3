use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::format::RenderedSections;

// ────────────────────────────────────────────────────────────────────────────
// Wire types shared by the orchestrator routes and the agent endpoint
// ────────────────────────────────────────────────────────────────────────────

/// An uploaded resume as carried in JSON: file name plus base64 file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePayload {
    pub name: String,
    pub data: String,
}

/// Request body accepted by `/api/v1/advice` and sent to the advice provider.
/// Missing `bio` / `interest` decode as empty and are caught by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvicePayload {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumePayload>,
}

/// Advice provider response. Provider-side failures are reported inline in
/// `advice` as text starting with `Error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceEnvelope {
    pub advice: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Domain types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn to_payload(&self) -> ResumePayload {
        ResumePayload {
            name: self.filename.clone(),
            data: STANDARD.encode(&self.bytes),
        }
    }
}

impl TryFrom<ResumePayload> for ResumeUpload {
    type Error = AppError;

    fn try_from(payload: ResumePayload) -> Result<Self, Self::Error> {
        let bytes = STANDARD.decode(payload.data.trim()).map_err(|e| {
            AppError::Validation(format!("resume.data is not valid base64: {e}"))
        })?;
        Ok(Self {
            filename: payload.name,
            bytes: Bytes::from(bytes),
        })
    }
}

/// One user profile submitted for advice.
#[derive(Debug, Clone, Default)]
pub struct AdviceRequest {
    pub bio: String,
    pub interest: String,
    pub resume: Option<ResumeUpload>,
}

impl AdviceRequest {
    /// Bio and interest are both required; whitespace-only counts as missing.
    pub fn is_complete(&self) -> bool {
        !self.bio.trim().is_empty() && !self.interest.trim().is_empty()
    }

    pub fn to_payload(&self) -> AdvicePayload {
        AdvicePayload {
            bio: self.bio.clone(),
            interest: self.interest.clone(),
            resume: self.resume.as_ref().map(ResumeUpload::to_payload),
        }
    }
}

impl TryFrom<AdvicePayload> for AdviceRequest {
    type Error = AppError;

    fn try_from(payload: AdvicePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            bio: payload.bio,
            interest: payload.interest,
            resume: payload.resume.map(ResumeUpload::try_from).transpose()?,
        })
    }
}

/// The model's markdown answer, before splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceDocument(String);

impl AdviceDocument {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rendered advice as returned to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceView {
    #[serde(flatten)]
    pub sections: RenderedSections,
    pub generated_at: DateTime<Utc>,
}

impl From<RenderedSections> for AdviceView {
    fn from(sections: RenderedSections) -> Self {
        Self {
            sections,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_resume_omits_field() {
        let payload = AdviceRequest {
            bio: "Java dev".to_string(),
            interest: "DevOps".to_string(),
            resume: None,
        }
        .to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"bio": "Java dev", "interest": "DevOps"}));
    }

    #[test]
    fn test_resume_is_base64_encoded_on_the_wire() {
        let upload = ResumeUpload {
            filename: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4"),
        };
        let payload = upload.to_payload();
        assert_eq!(payload.name, "cv.pdf");
        assert_eq!(payload.data, "JVBERi0xLjQ=");

        let decoded = ResumeUpload::try_from(payload).unwrap();
        assert_eq!(decoded.bytes, Bytes::from_static(b"%PDF-1.4"));
    }

    #[test]
    fn test_invalid_base64_is_a_validation_error() {
        let payload = AdvicePayload {
            bio: "x".to_string(),
            interest: "y".to_string(),
            resume: Some(ResumePayload {
                name: "cv.pdf".to_string(),
                data: "not base64!!".to_string(),
            }),
        };
        assert!(matches!(
            AdviceRequest::try_from(payload),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let payload: AdvicePayload = serde_json::from_str(r#"{"interest": "DevOps"}"#).unwrap();
        let request = AdviceRequest::try_from(payload).unwrap();
        assert_eq!(request.bio, "");
        assert!(!request.is_complete());
    }

    #[test]
    fn test_whitespace_bio_is_incomplete() {
        let request = AdviceRequest {
            bio: "   ".to_string(),
            interest: "Cybersecurity".to_string(),
            resume: None,
        };
        assert!(!request.is_complete());
    }

    #[test]
    fn test_view_flattens_sections() {
        let view = AdviceView::from(RenderedSections::message("hello"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["summary"], "hello");
        assert_eq!(json["certifications"], "");
        assert!(json["generated_at"].is_string());
    }
}
