//! Skill-meter fence → progress bars.
//!
//! ```text
//! ```skill-meter
//! Current Skills Relevant to AI / Data Science:
//! Python     [████░░░░░░] 40%
//! ```
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::segment::{fenced, Reopen, Segment};

pub const SKILL_METER_FENCE: &str = "```skill-meter";

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").expect("valid percent pattern"));

/// One parsed skill-meter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    /// Clamped to 0–100.
    pub percent: u8,
}

impl SkillEntry {
    /// Parses `Name [bar] N%`. Returns `None` when the line has no bracket pair
    /// or no percentage after the first `[`.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.contains(']') {
            return None;
        }
        let (name, rest) = line.split_once('[')?;
        let digits = PERCENT.captures(rest)?.get(1)?.as_str();
        let percent = digits.parse::<u32>().ok()?.min(100);

        Some(Self {
            name: name.trim().to_string(),
            percent: percent as u8,
        })
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="skill-bar">
    <div class="skill-name">{name}</div>
    <div class="progress-bar">
        <div class="progress" style="width: {pct}%;"></div>
    </div>
    <div class="percentage">{pct}%</div>
</div>"#,
            name = self.name,
            pct = self.percent,
        )
    }
}

/// Renders the `skills` section. Rows that fail to parse and every line outside
/// a skill-meter fence are passed through unchanged.
pub fn render_skill_bars(text: &str) -> String {
    let mut out = Vec::new();

    for segment in fenced(text, SKILL_METER_FENCE, Reopen::Flush) {
        match segment {
            Segment::Line(line) => out.push(line.to_string()),
            Segment::Fence { lines, .. } => {
                out.push(r#"<div class="skill-bars">"#.to_string());
                out.extend(lines.into_iter().map(|line| {
                    SkillEntry::parse(line)
                        .map(|entry| entry.render())
                        .unwrap_or_else(|| line.to_string())
                }));
                out.push("</div>".to_string());
            }
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_row_renders_proportional_bar() {
        let html = render_skill_bars("```skill-meter\nPython     [████░░░░░░] 40%\n```");
        assert!(html.contains(r#"<div class="skill-name">Python</div>"#));
        assert!(html.contains("width: 40%;"));
        assert!(html.contains(r#"<div class="percentage">40%</div>"#));
        assert!(html.starts_with(r#"<div class="skill-bars">"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_parse_takes_name_before_first_bracket() {
        let entry = SkillEntry::parse("  Machine Learning [██░] (basic) 25% [note]").unwrap();
        assert_eq!(entry.name, "Machine Learning");
        assert_eq!(entry.percent, 25);
    }

    #[test]
    fn test_parse_clamps_percent() {
        assert_eq!(SkillEntry::parse("SQL [██████████] 150%").unwrap().percent, 100);
    }

    #[test]
    fn test_row_without_percentage_passes_through() {
        let html = render_skill_bars("```skill-meter\nDocker [█████░░░░░]\n```");
        assert!(html.contains("\nDocker [█████░░░░░]\n"));
        assert!(!html.contains("skill-bar\""));
    }

    #[test]
    fn test_caption_inside_fence_passes_through() {
        let html = render_skill_bars("```skill-meter\nCurrent Skills:\nGo [██] 20%\n```");
        assert!(html.contains("\nCurrent Skills:\n"));
        assert!(html.contains("width: 20%;"));
    }

    #[test]
    fn test_lines_outside_fence_are_untouched() {
        let text = "Intro [not a bar] 50%\nplain";
        assert_eq!(render_skill_bars(text), text);
    }

    #[test]
    fn test_unterminated_fence_is_still_closed() {
        let html = render_skill_bars("```skill-meter\nRust [███] 30%");
        assert_eq!(html.matches("<div class=\"skill-bars\">").count(), 1);
        assert!(html.ends_with("</div>\n</div>"));
    }

    #[test]
    fn test_oversized_number_passes_through() {
        let line = "Bash [█] 99999999999999999999%";
        assert!(SkillEntry::parse(line).is_none());
    }

    #[test]
    fn test_second_open_marker_keeps_earlier_rows() {
        let text = "```skill-meter\nPython [████] 40%\n```skill-meter\nSQL [██] 20%\n```";
        let html = render_skill_bars(text);
        assert!(html.contains("width: 40%;"));
        assert!(html.contains("width: 20%;"));
        assert_eq!(html.matches("<div class=\"skill-bars\">").count(), 2);
    }
}
