//! Numbered learning-path months → learning cards.

use crate::format::segment::{is_non_blank, is_numbered_entry, parse_blocks, Block};

const COURSE_LABEL: &str = "Course:";
const PROJECT_LABEL: &str = "Project:";
const OUTCOME_LABEL: &str = "Expected Outcome:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearningCard {
    pub month_range: String,
    pub course: Option<String>,
    pub project: Option<String>,
    pub outcome: Option<String>,
}

impl LearningCard {
    pub fn from_block(block: &Block<'_>) -> Self {
        let month_range = block
            .header
            .split(':')
            .next()
            .unwrap_or_default()
            .replace('*', "")
            .trim()
            .to_string();

        let mut card = Self {
            month_range,
            ..Self::default()
        };

        // A line is filed under the first label it contains; the first line per
        // label wins.
        for line in &block.body {
            let line = line.trim();
            let (slot, value) = if let Some(v) = labelled_value(line, COURSE_LABEL) {
                (&mut card.course, v)
            } else if let Some(v) = labelled_value(line, PROJECT_LABEL) {
                (&mut card.project, v)
            } else if let Some(v) = labelled_value(line, OUTCOME_LABEL) {
                (&mut card.outcome, v)
            } else {
                continue;
            };
            slot.get_or_insert(value);
        }

        card
    }

    pub fn render(&self) -> String {
        let mut rows = vec![format!(
            r#"    <div class="month-range">{}</div>"#,
            self.month_range
        )];
        if let Some(course) = &self.course {
            rows.push(format!(r#"    <div class="course-name">📚 Course: {course}</div>"#));
        }
        if let Some(project) = &self.project {
            rows.push(format!(r#"    <div class="project-name">💻 Project: {project}</div>"#));
        }
        if let Some(outcome) = &self.outcome {
            rows.push(format!(r#"    <div class="outcome">🎯 Expected Outcome: {outcome}</div>"#));
        }
        format!("<div class=\"learning-card\">\n{}\n</div>", rows.join("\n"))
    }
}

/// Text after `label`, with surrounding quotes and whitespace removed.
fn labelled_value(line: &str, label: &str) -> Option<String> {
    line.split_once(label).map(|(_, value)| {
        value
            .trim_matches(|c: char| c == '"' || c.is_whitespace())
            .to_string()
    })
}

pub fn parse_learning_path(text: &str) -> Vec<LearningCard> {
    parse_blocks(text, is_numbered_entry, is_non_blank, LearningCard::from_block)
}

pub fn render_learning_path(text: &str) -> String {
    parse_learning_path(text)
        .iter()
        .map(LearningCard::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = r#"
1. **Month 1-2: Foundation**
    - Course: "Google Data Analytics" (Coursera)
    - Project: "Campaign dashboard"
    - Expected Outcome: "Comfortable with SQL"
2. **Month 3-4: Machine Learning**
    - Course: "Intro to ML" (Kaggle)
3. **Month 5-6: Portfolio**
"#;

    #[test]
    fn test_one_card_per_month_block() {
        let cards = parse_learning_path(PATH);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].month_range, "1. Month 1-2");
        assert_eq!(cards[2].month_range, "3. Month 5-6");
    }

    #[test]
    fn test_labelled_values_are_unquoted() {
        let cards = parse_learning_path(PATH);
        assert_eq!(
            cards[0],
            LearningCard {
                month_range: "1. Month 1-2".to_string(),
                course: Some("Google Data Analytics\" (Coursera)".to_string()),
                project: Some("Campaign dashboard".to_string()),
                outcome: Some("Comfortable with SQL".to_string()),
            }
        );
    }

    #[test]
    fn test_only_found_labels_render() {
        let html = render_learning_path(PATH);
        assert_eq!(html.matches("class=\"learning-card\"").count(), 3);
        assert_eq!(html.matches("class=\"course-name\"").count(), 2);
        assert_eq!(html.matches("class=\"project-name\"").count(), 1);
        assert_eq!(html.matches("class=\"outcome\"").count(), 1);
    }

    #[test]
    fn test_repeated_label_keeps_only_first_line() {
        let text = "1. **Month 1**:\n    - Course: \"SQL Basics\"\n    - Course: \"Advanced SQL\"";
        let html = render_learning_path(text);
        assert_eq!(html.matches("class=\"course-name\"").count(), 1);
        assert!(html.contains("📚 Course: SQL Basics"));
        assert!(!html.contains("Advanced SQL"));
    }

    #[test]
    fn test_unlabelled_lines_are_ignored() {
        let cards = parse_learning_path("1. Month 1: Start\n   Read the docs daily");
        assert_eq!(cards[0].course, None);
        assert_eq!(cards[0].project, None);
        assert_eq!(cards[0].outcome, None);
        assert!(!cards[0].render().contains("Read the docs"));
    }

    #[test]
    fn test_header_without_colon_keeps_whole_title() {
        let cards = parse_learning_path("2. **Week 1 Sprint**");
        assert_eq!(cards[0].month_range, "2. Week 1 Sprint");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_learning_path(""), "");
    }
}
