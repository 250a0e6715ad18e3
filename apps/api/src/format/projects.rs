//! Project-card fences → project cards.

use crate::format::segment::{fenced, Reopen, Segment};

pub const PROJECT_CARD_FENCE: &str = "```project-card";

/// A rendered project idea. Fields missing from the fence take the values of
/// [`ProjectCard::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub difficulty: String,
    pub duration: String,
    pub skills: String,
    pub description: String,
}

impl Default for ProjectCard {
    fn default() -> Self {
        Self {
            name: "Project".to_string(),
            difficulty: "⭐⭐⭐".to_string(),
            duration: "2 weeks".to_string(),
            skills: "Various skills".to_string(),
            description: "Project description".to_string(),
        }
    }
}

impl ProjectCard {
    pub fn render(&self) -> String {
        format!(
            r#"<div class="project-card">
    <div class="project-name">{}</div>
    <div><strong>Difficulty:</strong> {}</div>
    <div><strong>Duration:</strong> {}</div>
    <div><strong>Skills:</strong> {}</div>
    <div><strong>Description:</strong> {}</div>
</div>"#,
            self.name, self.difficulty, self.duration, self.skills, self.description
        )
    }
}

/// Labelled values collected from inside one fence.
#[derive(Debug, Default)]
struct ProjectFields {
    name: Option<String>,
    difficulty: Option<String>,
    duration: Option<String>,
    skills: Option<String>,
    description: Option<String>,
}

impl ProjectFields {
    fn from_lines(lines: &[&str]) -> Self {
        let mut fields = Self::default();
        for line in lines {
            fields.absorb(line);
        }
        fields
    }

    /// Files a `Label: value` line. Unlabelled lines are ignored; a repeated
    /// label overwrites the earlier value.
    fn absorb(&mut self, line: &str) {
        let line = line.trim();
        let (slot, value) = if let Some(v) = line.strip_prefix("Project:") {
            (&mut self.name, v)
        } else if let Some(v) = line.strip_prefix("Difficulty:") {
            (&mut self.difficulty, v)
        } else if let Some(v) = line.strip_prefix("Duration:") {
            (&mut self.duration, v)
        } else if let Some(v) = line.strip_prefix("Skills:") {
            (&mut self.skills, v)
        } else if let Some(v) = line.strip_prefix("Description:") {
            (&mut self.description, v)
        } else {
            return;
        };
        *slot = Some(value.trim().to_string());
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.difficulty.is_none()
            && self.duration.is_none()
            && self.skills.is_none()
            && self.description.is_none()
    }

    /// Merges the parsed fields over the defaults.
    fn into_card(self) -> ProjectCard {
        let defaults = ProjectCard::default();
        ProjectCard {
            name: self.name.unwrap_or(defaults.name),
            difficulty: self.difficulty.unwrap_or(defaults.difficulty),
            duration: self.duration.unwrap_or(defaults.duration),
            skills: self.skills.unwrap_or(defaults.skills),
            description: self.description.unwrap_or(defaults.description),
        }
    }
}

/// Parses one fence body. A fence with no labelled line yields no card.
pub fn parse_project_card(lines: &[&str]) -> Option<ProjectCard> {
    let fields = ProjectFields::from_lines(lines);
    (!fields.is_empty()).then(|| fields.into_card())
}

/// Renders the `projects` section: each fence becomes a card, lines outside
/// fences pass through.
pub fn render_project_cards(text: &str) -> String {
    let mut out = Vec::new();

    for segment in fenced(text, PROJECT_CARD_FENCE, Reopen::Discard) {
        match segment {
            Segment::Line(line) => out.push(line.to_string()),
            Segment::Fence { lines, .. } => {
                out.extend(parse_project_card(&lines).map(|card| card.render()));
            }
        }
    }

    out.join("\n")
}
