//! Session defaults: the blank document and the pre-filled sample.
//!
//! # Responsibility
//! - Build the document a session starts from when storage is empty.
//! - Decide the initial content of newly added entries, bullets and skills.
//!
//! # Invariants
//! - Sample entry ids are small fixed integers (1, 2) and unique per list.
//! - Blank additions are empty strings; the preview supplies placeholders.

use super::document::{
    EducationEntry, EntryId, ExperienceEntry, Profile, ResumeDocument, TemplateId,
};
use std::str::FromStr;

/// Which defaults a session is seeded with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DocumentVariant {
    /// Empty profile and lists.
    #[default]
    Blank,
    /// Pre-filled professional example content.
    Sample,
}

impl DocumentVariant {
    /// Builds the default document for this variant.
    pub fn document(self) -> ResumeDocument {
        match self {
            Self::Blank => ResumeDocument::default(),
            Self::Sample => sample_document(),
        }
    }

    /// Builds a new experience entry for the `Add` command.
    pub fn new_experience(self, id: EntryId) -> ExperienceEntry {
        match self {
            Self::Blank => ExperienceEntry {
                bullets: vec![String::new()],
                ..ExperienceEntry::empty(id)
            },
            Self::Sample => ExperienceEntry {
                id,
                role: "New Role".to_string(),
                company: "Company".to_string(),
                dates: "YYYY – YYYY".to_string(),
                bullets: vec!["Achievement...".to_string()],
            },
        }
    }

    /// Builds a new education entry for the `Add` command.
    pub fn new_education(self, id: EntryId) -> EducationEntry {
        match self {
            Self::Blank => EducationEntry::empty(id),
            Self::Sample => EducationEntry {
                id,
                school: "School".to_string(),
                degree: "Degree".to_string(),
                dates: "YYYY".to_string(),
            },
        }
    }

    /// Text of a freshly added bullet.
    pub fn new_bullet(self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Sample => "New bullet...".to_string(),
        }
    }

    /// Text of a freshly added skill.
    pub fn new_skill(self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Sample => "New skill".to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Sample => "sample",
        }
    }
}

impl FromStr for DocumentVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "sample" => Ok(Self::Sample),
            other => Err(format!(
                "unsupported document variant `{other}`; expected blank|sample"
            )),
        }
    }
}

fn sample_document() -> ResumeDocument {
    ResumeDocument {
        profile: Profile {
            name: "Jane Doe".to_string(),
            title: "Senior Product Designer".to_string(),
            contact: "jane.doe@email.com | (555) 555-5555 | linkedin.com/in/janedoe".to_string(),
            summary: "Senior Product Designer with 7+ years designing user-centered web and \
                      mobile experiences. Strengths include design systems, cross-functional \
                      collaboration, user research, and delivering measurable UX improvements."
                .to_string(),
        },
        template: TemplateId::Simple,
        experience: vec![
            ExperienceEntry {
                id: EntryId(1),
                role: "Senior Product Designer".to_string(),
                company: "Acme Co".to_string(),
                dates: "2021 – Present".to_string(),
                bullets: strings(&[
                    "Led design for a cross-platform product used by 1M+ monthly active users; \
                     improved task completion by 18%.",
                    "Owned design system components and documentation to reduce \
                     design-engineering rework by 35%.",
                    "Conducted user research and moderated usability tests that informed \
                     product roadmap priorities.",
                ]),
            },
            ExperienceEntry {
                id: EntryId(2),
                role: "Product Designer".to_string(),
                company: "BrightLabs UI".to_string(),
                dates: "2018 – 2021".to_string(),
                bullets: strings(&[
                    "Designed responsive SaaS interfaces, increasing conversion by 12% through \
                     UX improvements.",
                    "Built reusable Figma libraries and collaborated with engineers to deliver \
                     polished implementations.",
                    "Performed heuristic reviews and competitor analysis to prioritize feature \
                     improvements.",
                ]),
            },
        ],
        education: vec![EducationEntry {
            id: EntryId(1),
            school: "State University".to_string(),
            degree: "B.A., Graphic & Interaction Design".to_string(),
            dates: "2014 – 2018".to_string(),
        }],
        skills: strings(&[
            "Figma",
            "UX Research",
            "Design Systems",
            "Prototyping",
            "Usability Testing",
            "HTML/CSS",
            "Accessibility (WCAG)",
        ]),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
