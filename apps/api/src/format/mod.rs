// Advice formatter: splits the model's markdown into sections and renders each
// section's micro-format as HTML cards. Every renderer is total: unrecognised
// input passes through or falls back to a default, it never errors.

pub mod certifications;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod learning;
pub mod projects;
pub mod roles;
pub mod sections;
pub mod segment;
pub mod skills;
pub mod styles;
pub mod summary;

use serde::Serialize;

use crate::format::certifications::render_certifications;
use crate::format::learning::render_learning_path;
use crate::format::projects::render_project_cards;
use crate::format::roles::render_roles;
use crate::format::sections::{split_sections, SectionKey, Sections};
use crate::format::skills::render_skill_bars;
use crate::format::styles::themed;
use crate::format::summary::render_summary;

/// The six HTML fragments handed to the UI, one per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedSections {
    pub summary: String,
    pub roles: String,
    pub skills: String,
    pub learning: String,
    pub projects: String,
    pub certifications: String,
}

impl RenderedSections {
    /// A message in the summary slot and nothing elsewhere.
    pub fn message(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Uniform failure state: `summary` plus `placeholder` in every other slot.
    pub fn failure(summary: impl Into<String>, placeholder: &str) -> Self {
        Self {
            summary: summary.into(),
            roles: placeholder.to_string(),
            skills: placeholder.to_string(),
            learning: placeholder.to_string(),
            projects: placeholder.to_string(),
            certifications: placeholder.to_string(),
        }
    }

    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Summary => &self.summary,
            SectionKey::Roles => &self.roles,
            SectionKey::Skills => &self.skills,
            SectionKey::Learning => &self.learning,
            SectionKey::Projects => &self.projects,
            SectionKey::Certifications => &self.certifications,
        }
    }
}

/// Renders already split sections. The summary is an expandable card; the other
/// five fragments carry the card theme.
pub fn format_sections(sections: &Sections) -> RenderedSections {
    RenderedSections {
        summary: render_summary(sections.get(SectionKey::Summary)),
        roles: themed(&render_roles(sections.get(SectionKey::Roles))),
        skills: themed(&render_skill_bars(sections.get(SectionKey::Skills))),
        learning: themed(&render_learning_path(sections.get(SectionKey::Learning))),
        projects: themed(&render_project_cards(sections.get(SectionKey::Projects))),
        certifications: themed(&render_certifications(
            sections.get(SectionKey::Certifications),
        )),
    }
}

/// Splits and renders one advice document.
pub fn render_advice(markdown: &str) -> RenderedSections {
    format_sections(&split_sections(markdown))
}
