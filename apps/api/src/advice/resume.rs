//! Resume text extraction for PDF and DOCX uploads.
//!
//! Extraction never fails past this module: problems come back as text starting
//! with [`RESUME_ERROR_PREFIX`], which is forwarded to the model like any other
//! resume text.

use std::io::{Cursor, Read};

use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

pub const RESUME_ERROR_PREFIX: &str = "Error parsing resume";

const DOCX_BODY: &str = "word/document.xml";

static XML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

#[derive(Debug, Error)]
enum ExtractError {
    #[error("{0}")]
    Pdf(String),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl ResumeFormat {
    fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            ResumeFormat::Pdf
        } else if lower.ends_with(".docx") {
            ResumeFormat::Docx
        } else {
            ResumeFormat::Unsupported
        }
    }
}

/// Extracts plain text from an uploaded resume on the blocking pool.
///
/// Unsupported extensions yield an empty string.
pub async fn extract_resume_text(bytes: Bytes, filename: &str) -> String {
    let name = filename.to_string();
    let outcome = tokio::task::spawn_blocking(move || extract(&bytes, &name)).await;

    match outcome {
        Ok(Ok(text)) => {
            info!("Parsed resume '{}': {} chars", filename, text.len());
            text
        }
        Ok(Err(e)) => {
            warn!("Error parsing resume '{}': {}", filename, e);
            format!("{RESUME_ERROR_PREFIX}: {e}")
        }
        // The PDF parser panics on some malformed files.
        Err(join_error) => {
            warn!("Resume extraction for '{}' aborted: {}", filename, join_error);
            format!("{RESUME_ERROR_PREFIX}: extraction aborted ({join_error})")
        }
    }
}

fn extract(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    match ResumeFormat::from_filename(filename) {
        ResumeFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        ResumeFormat::Docx => docx_text(bytes),
        ResumeFormat::Unsupported => Ok(String::new()),
    }
}

fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;
    Ok(document_xml_to_text(&xml))
}

/// One line per `<w:p>` paragraph, tags stripped, entities decoded.
fn document_xml_to_text(xml: &str) -> String {
    let marked = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");
    let stripped = XML_TAG.replace_all(&marked, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
