//! Certification lists → certification cards.
//!
//! Two list shapes are accepted, tried in this order:
//! 1. dash lists, where a `- ` line that is not a detail names a certification
//!    and the `- ` detail lines below it belong to it;
//! 2. asterisk lists, where a `*` line names a certification and every
//!    non-blank line below it is a detail.
//!
//! Inputs that mix both conventions are read as dash lists.

use crate::format::segment::{blocks, is_non_blank, Block};

pub const NO_CERTIFICATIONS: &str =
    r#"<div class="cert-card"><div class="cert-name">No certifications found</div></div>"#;

/// Keywords that mark a dash line as a detail rather than a certification name.
const DETAIL_KEYWORDS: [&str; 3] = ["difficulty level", "time commitment", "cost range"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationDetailKind {
    DifficultyLevel,
    TimeCommitment,
    CostRange,
    Other,
}

impl CertificationDetailKind {
    const LABELLED: [CertificationDetailKind; 3] = [
        CertificationDetailKind::DifficultyLevel,
        CertificationDetailKind::TimeCommitment,
        CertificationDetailKind::CostRange,
    ];

    pub fn label(self) -> Option<&'static str> {
        match self {
            CertificationDetailKind::DifficultyLevel => Some("Difficulty Level"),
            CertificationDetailKind::TimeCommitment => Some("Time Commitment"),
            CertificationDetailKind::CostRange => Some("Cost Range"),
            CertificationDetailKind::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationDetail {
    pub kind: CertificationDetailKind,
    pub text: String,
}

impl CertificationDetail {
    fn parse(line: &str) -> Self {
        let line = line.trim().trim_matches('*').trim_matches('-').trim();
        let lower = line.to_lowercase();

        for kind in CertificationDetailKind::LABELLED {
            let Some(label) = kind.label() else { continue };
            if lower.contains(&format!("{}:", label.to_lowercase())) {
                let value = line.split_once(':').map_or("", |(_, v)| v.trim());
                return Self {
                    kind,
                    text: value.to_string(),
                };
            }
        }

        Self {
            kind: CertificationDetailKind::Other,
            text: line.to_string(),
        }
    }

    fn render(&self) -> String {
        match self.kind.label() {
            Some(label) => format!(
                r#"<div class="cert-detail"><strong>{label}:</strong> {}</div>"#,
                self.text
            ),
            None => format!(r#"<div class="cert-detail">• {}</div>"#, self.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationCard {
    pub name: String,
    pub details: Vec<CertificationDetail>,
}

impl CertificationCard {
    fn from_block(block: &Block<'_>) -> Self {
        let header = block.header.trim();
        let name = header.strip_prefix("- ").unwrap_or(header).replace('*', "");

        Self {
            name: name.trim().to_string(),
            details: block
                .body
                .iter()
                .map(|line| CertificationDetail::parse(line))
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<div class=\"cert-card\">\n    <div class=\"cert-name\">{}</div>\n",
            self.name
        );
        for detail in &self.details {
            html.push_str(&detail.render());
        }
        html.push_str("</div>");
        html
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListShape {
    Dashed,
    Starred,
}

impl ListShape {
    fn detect(text: &str) -> Self {
        if text.lines().any(is_dash_line) {
            ListShape::Dashed
        } else {
            ListShape::Starred
        }
    }
}

fn is_dash_line(line: &str) -> bool {
    line.trim().starts_with("- ")
}

fn is_dash_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    is_dash_line(line) && !DETAIL_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn is_star_header(line: &str) -> bool {
    line.trim().starts_with('*')
}

pub fn parse_certifications(text: &str) -> Vec<CertificationCard> {
    let groups = match ListShape::detect(text) {
        ListShape::Dashed => blocks(text, is_dash_header, is_dash_line),
        ListShape::Starred => blocks(text, is_star_header, is_non_blank),
    };
    groups.iter().map(CertificationCard::from_block).collect()
}

/// Renders the `certifications` section; an input with no certification yields
/// the single [`NO_CERTIFICATIONS`] card.
pub fn render_certifications(text: &str) -> String {
    let cards = parse_certifications(text);
    if cards.is_empty() {
        return NO_CERTIFICATIONS.to_string();
    }
    cards
        .iter()
        .map(CertificationCard::render)
        .collect::<Vec<_>>()
        .join("\n")
}
