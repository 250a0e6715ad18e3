//! Quick-summary section → expandable card.

const SUMMARY_TITLE: &str = "Quick Summary";

/// Wraps every non-blank summary line in a `content-line` row of an
/// expanded, collapsible card.
pub fn render_summary(text: &str) -> String {
    let mut out = vec![
        r#"<div class="expandable-card expanded">"#.to_string(),
        r#"<div class="card-header">"#.to_string(),
        format!(r#"<div class="card-title">{SUMMARY_TITLE}</div>"#),
        r#"<div class="expand-icon">▼</div>"#.to_string(),
        "</div>".to_string(),
        r#"<div class="card-content">"#.to_string(),
    ];
    out.extend(
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!(r#"<div class="content-line">{line}</div>"#)),
    );
    out.push("</div>".to_string());
    out.push("</div>".to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_become_content_rows() {
        let html = render_summary("You have **strong** SQL skills.\n\nNext: learn Python.");
        assert!(html.contains(r#"<div class="content-line">You have **strong** SQL skills.</div>"#));
        assert!(html.contains(r#"<div class="content-line">Next: learn Python.</div>"#));
        assert_eq!(html.matches("content-line").count(), 2);
    }

    #[test]
    fn test_empty_summary_still_renders_card_shell() {
        let html = render_summary("");
        assert!(html.contains("Quick Summary"));
        assert!(!html.contains("content-line"));
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }
}
