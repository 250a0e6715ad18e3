//! Numbered role entries → role cards.
//!
//! ```text
//! 1. **Data Analyst** (Match Score: 8/10)
//!     - Salary Range: $60,000 - $90,000
//!     - Key Requirements: SQL, Excel, Tableau
//!     - Why It Fits: Builds on your marketing analytics work
//! ```

use crate::format::segment::{is_non_blank, is_numbered_entry, parse_blocks, Block};

const MATCH_SCORE_MARKER: &str = "(Match Score:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleDetailKind {
    SalaryRange,
    KeyRequirements,
    WhyItFits,
    Other,
}

impl RoleDetailKind {
    /// Labelled kinds in classification order.
    const LABELLED: [RoleDetailKind; 3] = [
        RoleDetailKind::SalaryRange,
        RoleDetailKind::KeyRequirements,
        RoleDetailKind::WhyItFits,
    ];

    pub fn label(self) -> Option<&'static str> {
        match self {
            RoleDetailKind::SalaryRange => Some("Salary Range"),
            RoleDetailKind::KeyRequirements => Some("Key Requirements"),
            RoleDetailKind::WhyItFits => Some("Why It Fits"),
            RoleDetailKind::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDetail {
    pub kind: RoleDetailKind,
    pub text: String,
}

impl RoleDetail {
    /// Classifies a dash-stripped detail by the first `Label:` it contains.
    fn classify(detail: &str) -> Self {
        for kind in RoleDetailKind::LABELLED {
            let Some(label) = kind.label() else { continue };
            if let Some((_, value)) = detail.split_once(&format!("{label}:")) {
                return Self {
                    kind,
                    text: value.trim().to_string(),
                };
            }
        }
        Self {
            kind: RoleDetailKind::Other,
            text: detail.to_string(),
        }
    }

    fn render(&self) -> String {
        match self.kind.label() {
            Some(label) => format!(
                r#"<div class="role-detail"><strong>{label}:</strong> {}</div>"#,
                self.text
            ),
            None => format!(r#"<div class="role-detail">{}</div>"#, self.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCard {
    pub name: String,
    pub match_score: String,
    pub details: Vec<RoleDetail>,
}

impl RoleCard {
    pub fn from_block(block: &Block<'_>) -> Self {
        let title = block.header.trim();
        let details = block
            .body
            .iter()
            .filter_map(|line| line.trim().strip_prefix('-'))
            .map(|detail| RoleDetail::classify(detail.trim()))
            .collect();

        Self {
            name: role_name(title),
            match_score: match_score(title),
            details,
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<div class=\"role-card\">\n    <div class=\"role-title\">{} (Match Score: {})</div>\n",
            self.name, self.match_score
        );
        for detail in &self.details {
            html.push_str(&detail.render());
        }
        html.push_str("</div>");
        html
    }
}

/// Text inside the first `**…**` emphasis; empty when there is none.
fn role_name(title: &str) -> String {
    title
        .split("**")
        .nth(1)
        .map(|name| name.trim().to_string())
        .unwrap_or_default()
}

/// Text between `(Match Score:` and the next `)`; empty when the marker is absent.
fn match_score(title: &str) -> String {
    title
        .split_once(MATCH_SCORE_MARKER)
        .map(|(_, rest)| rest.split_once(')').map_or(rest, |(score, _)| score))
        .map(|score| score.trim().to_string())
        .unwrap_or_default()
}

pub fn parse_roles(text: &str) -> Vec<RoleCard> {
    parse_blocks(text, is_numbered_entry, is_non_blank, RoleCard::from_block)
}

pub fn render_roles(text: &str) -> String {
    parse_roles(text)
        .iter()
        .map(RoleCard::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &str = "\
1. **Data Analyst** (Match Score: 8/10)
    - Salary Range: $60,000 - $90,000
    - Key Requirements: SQL, Excel
    - Why It Fits: You already run campaign reports

2. **Marketing Data Scientist** (Match Score: 7/10)
    - Salary Range: $90,000 - $130,000
    - Mentoring available
3. **BI Developer** (Match Score: 6/10)";

    #[test]
    fn test_title_and_salary_row() {
        let html = render_roles(
            "1. **Data Analyst** (Match Score: 8/10)\n- Salary Range: $60,000 - $90,000",
        );
        assert!(html.contains(r#"<div class="role-title">Data Analyst (Match Score: 8/10)</div>"#));
        assert!(html.contains(
            r#"<div class="role-detail"><strong>Salary Range:</strong> $60,000 - $90,000</div>"#
        ));
        assert_eq!(html.matches("role-detail").count(), 1);
    }

    #[test]
    fn test_one_card_per_numbered_entry() {
        let cards = parse_roles(ROLES);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].name, "Marketing Data Scientist");
        assert_eq!(cards[2].match_score, "6/10");
        assert!(cards[2].details.is_empty());
    }

    #[test]
    fn test_details_are_classified_in_order() {
        let cards = parse_roles(ROLES);
        let kinds: Vec<_> = cards[0].details.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RoleDetailKind::SalaryRange,
                RoleDetailKind::KeyRequirements,
                RoleDetailKind::WhyItFits
            ]
        );
        assert_eq!(cards[0].details[1].text, "SQL, Excel");
        assert_eq!(cards[1].details[1].kind, RoleDetailKind::Other);
        assert_eq!(cards[1].details[1].text, "Mentoring available");
    }

    #[test]
    fn test_other_detail_renders_without_label() {
        let html = render_roles("1. **X**\n- Remote friendly");
        assert!(html.contains(r#"<div class="role-detail">Remote friendly</div>"#));
    }

    #[test]
    fn test_missing_emphasis_and_score_render_empty() {
        let cards = parse_roles("2. Plain role title");
        assert_eq!(cards[0].name, "");
        assert_eq!(cards[0].match_score, "");
        assert!(cards[0].render().contains(r#"<div class="role-title"> (Match Score: )</div>"#));
    }

    #[test]
    fn test_score_without_emphasis_is_still_found() {
        let cards = parse_roles("1. Analyst (Match Score: 9/10)");
        assert_eq!(cards[0].match_score, "9/10");
    }

    #[test]
    fn test_non_dash_lines_are_not_details() {
        let cards = parse_roles("1. **Dev**\n   free prose line\n   - Key Requirements: Rust");
        assert_eq!(cards[0].details.len(), 1);
    }

    #[test]
    fn test_no_numbered_entries_renders_nothing() {
        assert_eq!(render_roles("Roles will follow."), "");
    }
}
