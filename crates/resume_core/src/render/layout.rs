//! Layout tree types and the document projection.

use crate::model::document::{
    EducationEntry, EntryId, ExperienceEntry, ResumeDocument, TemplateId,
};

/// Placeholder and notice strings shown in place of empty values.
pub mod placeholders {
    pub const NAME: &str = "Your Name";
    pub const TITLE: &str = "Job Title";
    pub const CONTACT: &str = "Email | Phone | LinkedIn";
    pub const SUMMARY: &str = "Short professional summary or objective goes here.";
    pub const ROLE: &str = "Role";
    pub const COMPANY: &str = "Company";
    pub const BULLET: &str = "Achievement...";
    pub const SCHOOL: &str = "School";
    pub const DEGREE: &str = "Degree";
    pub const SKILL: &str = "Skill";

    pub const NO_EXPERIENCE: &str = "No experience to show.";
    pub const NO_EDUCATION: &str = "No education to show.";
    pub const NO_SKILLS: &str = "No skills listed.";
}

/// One displayed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    /// `true` when `text` is a placeholder standing in for an empty value.
    pub placeholder: bool,
}

impl TextNode {
    /// Uses `value` when non-empty, otherwise `fallback`.
    pub fn or_placeholder(value: &str, fallback: &str) -> Self {
        if value.is_empty() {
            Self {
                text: fallback.to_string(),
                placeholder: true,
            }
        } else {
            Self {
                text: value.to_string(),
                placeholder: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: TextNode,
    pub title: TextNode,
    pub contact: TextNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: EntryId,
    pub role: TextNode,
    pub company: TextNode,
    /// Dates have no placeholder and may be empty.
    pub dates: String,
    pub bullets: Vec<TextNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub id: EntryId,
    pub school: TextNode,
    pub degree: TextNode,
    pub dates: String,
}

/// Single-column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleLayout {
    pub header: Header,
    pub summary: TextNode,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    /// Rendered as inline tags.
    pub skills: Vec<TextNode>,
}

/// Left column of the modern layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub header: Header,
    /// Rendered as a bulleted list.
    pub skills: Vec<TextNode>,
}

/// Right column of the modern layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainRegion {
    pub summary: TextNode,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
}

/// Two-region layout carrying the same information as `SimpleLayout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModernLayout {
    pub sidebar: Sidebar,
    pub main: MainRegion,
}

/// Projected preview for the document's selected template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeLayout {
    Simple(SimpleLayout),
    Modern(ModernLayout),
}

impl ResumeLayout {
    pub fn template(&self) -> TemplateId {
        match self {
            Self::Simple(_) => TemplateId::Simple,
            Self::Modern(_) => TemplateId::Modern,
        }
    }
}

/// Projects `document` into the layout of its selected template.
pub fn project(document: &ResumeDocument) -> ResumeLayout {
    let header = project_header(document);
    let summary = TextNode::or_placeholder(&document.profile.summary, placeholders::SUMMARY);
    let experience: Vec<ExperienceItem> = document
        .experience
        .iter()
        .map(project_experience)
        .collect();
    let education: Vec<EducationItem> = document
        .education
        .iter()
        .map(project_education)
        .collect();
    let skills: Vec<TextNode> = document
        .skills
        .iter()
        .map(|skill| TextNode::or_placeholder(skill, placeholders::SKILL))
        .collect();

    match document.template {
        TemplateId::Simple => ResumeLayout::Simple(SimpleLayout {
            header,
            summary,
            experience,
            education,
            skills,
        }),
        TemplateId::Modern => ResumeLayout::Modern(ModernLayout {
            sidebar: Sidebar { header, skills },
            main: MainRegion {
                summary,
                experience,
                education,
            },
        }),
    }
}

fn project_header(document: &ResumeDocument) -> Header {
    let profile = &document.profile;
    Header {
        name: TextNode::or_placeholder(&profile.name, placeholders::NAME),
        title: TextNode::or_placeholder(&profile.title, placeholders::TITLE),
        contact: TextNode::or_placeholder(&profile.contact, placeholders::CONTACT),
    }
}

fn project_experience(entry: &ExperienceEntry) -> ExperienceItem {
    ExperienceItem {
        id: entry.id,
        role: TextNode::or_placeholder(&entry.role, placeholders::ROLE),
        company: TextNode::or_placeholder(&entry.company, placeholders::COMPANY),
        dates: entry.dates.clone(),
        bullets: entry
            .bullets
            .iter()
            .map(|bullet| TextNode::or_placeholder(bullet, placeholders::BULLET))
            .collect(),
    }
}

fn project_education(entry: &EducationEntry) -> EducationItem {
    EducationItem {
        id: entry.id,
        school: TextNode::or_placeholder(&entry.school, placeholders::SCHOOL),
        degree: TextNode::or_placeholder(&entry.degree, placeholders::DEGREE),
        dates: entry.dates.clone(),
    }
}
