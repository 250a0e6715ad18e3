use serde::Serialize;

/// Interest areas offered by the profile form.
pub const INTEREST_AREAS: [&str; 6] = [
    "AI / Data Science",
    "Web Development",
    "Cybersecurity",
    "Cloud Computing",
    "DevOps",
    "Game Development",
];

#[derive(Debug, Clone, Serialize)]
pub struct ExampleProfile {
    pub bio: &'static str,
    pub interest: &'static str,
}

pub const EXAMPLE_PROFILES: [ExampleProfile; 2] = [
    ExampleProfile {
        bio: "I am a software developer with 5 years of experience in Java, and I want to transition into a DevOps role.",
        interest: "DevOps",
    },
    ExampleProfile {
        bio: "I'm a final year marketing student fascinated by data. I know some basic Python and SQL and want a career that blends marketing with data analytics.",
        interest: "AI / Data Science",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct InterestCatalog {
    pub interests: &'static [&'static str],
    pub examples: &'static [ExampleProfile],
}

pub fn interest_catalog() -> InterestCatalog {
    InterestCatalog {
        interests: &INTEREST_AREAS,
        examples: &EXAMPLE_PROFILES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_use_offered_interests() {
        for example in &EXAMPLE_PROFILES {
            assert!(INTEREST_AREAS.contains(&example.interest));
        }
    }
}
