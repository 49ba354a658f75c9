//! Plain-text serialization of a layout tree, used by the CLI probe and
//! host-side accessibility/clipboard paths.

use super::layout::{
    placeholders, EducationItem, ExperienceItem, Header, ResumeLayout, TextNode,
};

/// Serializes `layout` as plain text, one logical line per displayed row.
pub fn to_plain_text(layout: &ResumeLayout) -> String {
    let mut lines: Vec<String> = Vec::new();
    match layout {
        ResumeLayout::Simple(simple) => {
            push_header(&mut lines, &simple.header);
            lines.push(String::new());
            lines.push(simple.summary.text.clone());
            push_experience(&mut lines, &simple.experience);
            push_education(&mut lines, &simple.education);
            push_heading(&mut lines, "SKILLS");
            if simple.skills.is_empty() {
                lines.push(placeholders::NO_SKILLS.to_string());
            } else {
                lines.push(
                    simple
                        .skills
                        .iter()
                        .map(|skill| format!("[{}]", skill.text))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
        }
        ResumeLayout::Modern(modern) => {
            push_header(&mut lines, &modern.sidebar.header);
            push_heading(&mut lines, "SKILLS");
            lines.extend(modern.sidebar.skills.iter().map(bullet));
            push_heading(&mut lines, "SUMMARY");
            lines.push(modern.main.summary.text.clone());
            push_experience(&mut lines, &modern.main.experience);
            push_education(&mut lines, &modern.main.education);
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn push_header(lines: &mut Vec<String>, header: &Header) {
    lines.push(header.name.text.clone());
    lines.push(header.title.text.clone());
    lines.push(header.contact.text.clone());
}

fn push_heading(lines: &mut Vec<String>, heading: &str) {
    lines.push(String::new());
    lines.push(heading.to_string());
}

fn push_experience(lines: &mut Vec<String>, items: &[ExperienceItem]) {
    push_heading(lines, "EXPERIENCE");
    if items.is_empty() {
        lines.push(placeholders::NO_EXPERIENCE.to_string());
    }
    for item in items {
        lines.push(with_dates(
            format!("{} — {}", item.role.text, item.company.text),
            &item.dates,
        ));
        lines.extend(item.bullets.iter().map(bullet));
    }
}

fn push_education(lines: &mut Vec<String>, items: &[EducationItem]) {
    push_heading(lines, "EDUCATION");
    if items.is_empty() {
        lines.push(placeholders::NO_EDUCATION.to_string());
    }
    for item in items {
        lines.push(with_dates(
            format!("{} — {}", item.school.text, item.degree.text),
            &item.dates,
        ));
    }
}

fn with_dates(line: String, dates: &str) -> String {
    if dates.is_empty() {
        line
    } else {
        format!("{line} ({dates})")
    }
}

fn bullet(node: &TextNode) -> String {
    format!("  • {}", node.text)
}
