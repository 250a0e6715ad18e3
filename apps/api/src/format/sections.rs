//! Splits one advice document into its six named sections.
//!
//! Sections are recognised by literal heading prefixes. The roadmap heading is
//! recognised too, but only so its content can be dropped.

use tracing::debug;

/// The six sections rendered for the UI, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Summary,
    Roles,
    Skills,
    Learning,
    Projects,
    Certifications,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Summary,
        SectionKey::Roles,
        SectionKey::Skills,
        SectionKey::Learning,
        SectionKey::Projects,
        SectionKey::Certifications,
    ];

    /// Heading prefix that opens this section.
    pub fn heading(self) -> &'static str {
        match self {
            SectionKey::Summary => "### 💫",
            SectionKey::Roles => "### 🎯",
            SectionKey::Skills => "### 📊",
            SectionKey::Learning => "### 📚",
            SectionKey::Projects => "### 💡",
            SectionKey::Certifications => "### 🎓",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Roles => "roles",
            SectionKey::Skills => "skills",
            SectionKey::Learning => "learning",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Roadmap / diagram heading. Matched without the emoji variation selector so
/// both `🗺` and `🗺️` count.
pub const ROADMAP_HEADING: &str = "### 🗺";

/// Where the scan currently files content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Before the first recognised heading.
    Idle,
    In(SectionKey),
    /// Inside the roadmap section.
    Excluded,
}

impl Cursor {
    /// The state a heading line switches to, or `None` for ordinary content.
    fn transition(line: &str) -> Option<Cursor> {
        if let Some(key) = SectionKey::ALL
            .into_iter()
            .find(|key| line.starts_with(key.heading()))
        {
            return Some(Cursor::In(key));
        }
        line.starts_with(ROADMAP_HEADING).then_some(Cursor::Excluded)
    }
}

/// Raw markdown per section. Every key is always present; absent sections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    parts: [String; 6],
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> &str {
        &self.parts[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        SectionKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// Scans `markdown` once, filing each line under the section opened by the last
/// recognised heading.
///
/// A repeated heading restarts its section. Unrecognised headings are content.
pub fn split_sections(markdown: &str) -> Sections {
    let mut collected: [Vec<&str>; 6] = Default::default();
    let mut cursor = Cursor::Idle;

    for line in markdown.lines() {
        if let Some(next) = Cursor::transition(line) {
            match next {
                Cursor::In(key) => collected[key.index()].clear(),
                Cursor::Excluded => debug!("Skipping roadmap section"),
                Cursor::Idle => {}
            }
            cursor = next;
            continue;
        }

        if let Cursor::In(key) = cursor {
            collected[key.index()].push(line);
        }
    }

    Sections {
        parts: collected.map(|lines| lines.join("\n")),
    }
}
