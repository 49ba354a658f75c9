//! Printable HTML serialization of a layout tree.
//!
//! # Invariants
//! - All user text is HTML-escaped.
//! - Output is one standalone document; print CSS hides nothing but the
//!   page chrome, so the host can hand it straight to a print/PDF facility.
//! - Placeholder nodes carry `class="placeholder"`.

use super::layout::{
    placeholders, EducationItem, ExperienceItem, Header, ModernLayout, ResumeLayout,
    SimpleLayout, TextNode,
};

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;color:#111;margin:0;}\
.resume{max-width:48rem;margin:0 auto;padding:1.25rem;}\
.resume.modern{display:grid;grid-template-columns:1fr 2fr;gap:1.5rem;}\
aside{background:#f9fafb;padding:1rem;border-radius:.25rem;}\
h3{font-size:1rem;margin:1rem 0 .5rem;}\
.muted{color:#4b5563;font-size:.875rem;}\
.placeholder{color:#9ca3af;}\
.empty{color:#6b7280;font-size:.875rem;}\
.tag{display:inline-block;font-size:.75rem;padding:.25rem .5rem;border:1px solid #d1d5db;border-radius:.25rem;margin:0 .5rem .5rem 0;}\
@media print{@page{margin:1cm;}.resume{padding:0;}}";

/// Serializes `layout` into a printable HTML document.
pub fn to_html(layout: &ResumeLayout) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>");
    out.push_str(&escape(&header_of(layout).name.text));
    out.push_str("</title><style>");
    out.push_str(STYLE);
    out.push_str("</style></head><body>");
    match layout {
        ResumeLayout::Simple(simple) => render_simple(&mut out, simple),
        ResumeLayout::Modern(modern) => render_modern(&mut out, modern),
    }
    out.push_str("</body></html>");
    out
}

fn header_of(layout: &ResumeLayout) -> &Header {
    match layout {
        ResumeLayout::Simple(simple) => &simple.header,
        ResumeLayout::Modern(modern) => &modern.sidebar.header,
    }
}

fn render_simple(out: &mut String, layout: &SimpleLayout) {
    out.push_str("<div class=\"resume simple\"><header>");
    out.push_str(&node("h1", "", &layout.header.name));
    out.push_str(&node("div", "muted", &layout.header.title));
    out.push_str(&node("div", "muted", &layout.header.contact));
    out.push_str("</header><section>");
    out.push_str(&node("p", "", &layout.summary));
    out.push_str("</section>");

    render_experience(out, &layout.experience);
    render_education(out, &layout.education);

    out.push_str("<section><h3>Skills</h3><div>");
    if layout.skills.is_empty() {
        out.push_str(&empty_notice(placeholders::NO_SKILLS));
    }
    for skill in &layout.skills {
        out.push_str(&node("span", "tag", skill));
    }
    out.push_str("</div></section></div>");
}

fn render_modern(out: &mut String, layout: &ModernLayout) {
    let sidebar = &layout.sidebar;
    out.push_str("<div class=\"resume modern\"><aside>");
    out.push_str(&node("h2", "", &sidebar.header.name));
    out.push_str(&node("div", "muted", &sidebar.header.title));
    out.push_str("<h3>Contact</h3>");
    out.push_str(&node("div", "muted", &sidebar.header.contact));
    out.push_str("<h3>Skills</h3><ul>");
    for skill in &sidebar.skills {
        out.push_str(&node("li", "", skill));
    }
    out.push_str("</ul></aside><main><section><h3>Summary</h3>");
    out.push_str(&node("p", "", &layout.main.summary));
    out.push_str("</section>");

    render_experience(out, &layout.main.experience);
    render_education(out, &layout.main.education);
    out.push_str("</main></div>");
}

fn render_experience(out: &mut String, items: &[ExperienceItem]) {
    out.push_str("<section><h3>Experience</h3>");
    if items.is_empty() {
        out.push_str(&empty_notice(placeholders::NO_EXPERIENCE));
    }
    for item in items {
        out.push_str(&format!("<article data-entry-id=\"{}\"><div>", item.id));
        out.push_str(&node("strong", "", &item.role));
        out.push_str(" — ");
        out.push_str(&node("span", "muted", &item.company));
        out.push_str(&format!(
            "</div><div class=\"muted\">{}</div><ul>",
            escape(&item.dates)
        ));
        for bullet in &item.bullets {
            out.push_str(&node("li", "", bullet));
        }
        out.push_str("</ul></article>");
    }
    out.push_str("</section>");
}

fn render_education(out: &mut String, items: &[EducationItem]) {
    out.push_str("<section><h3>Education</h3>");
    if items.is_empty() {
        out.push_str(&empty_notice(placeholders::NO_EDUCATION));
    }
    for item in items {
        out.push_str(&format!("<div data-entry-id=\"{}\">", item.id));
        out.push_str(&node("span", "", &item.school));
        out.push_str(" — ");
        out.push_str(&node("span", "muted", &item.degree));
        out.push_str(&format!(
            "<div class=\"muted\">{}</div></div>",
            escape(&item.dates)
        ));
    }
    out.push_str("</section>");
}

fn node(tag: &str, class: &str, text: &TextNode) -> String {
    let class = match (class.is_empty(), text.placeholder) {
        (true, false) => String::new(),
        (true, true) => " class=\"placeholder\"".to_string(),
        (false, false) => format!(" class=\"{class}\""),
        (false, true) => format!(" class=\"{class} placeholder\""),
    };
    format!("<{tag}{class}>{}</{tag}>", escape(&text.text))
}

fn empty_notice(message: &str) -> String {
    format!("<div class=\"empty\">{}</div>", escape(message))
}

/// Escapes text for element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, to_html};
    use crate::model::document::{ResumeDocument, TemplateId};
    use crate::render::layout::{placeholders, project};

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape("<b>\"R&D\"</b> it's"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn user_text_is_escaped_in_output() {
        let mut document = ResumeDocument::default();
        document.profile.name = "<script>alert(1)</script>".to_string();

        let html = to_html(&project(&document));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn simple_blank_document_shows_empty_notices() {
        let html = to_html(&project(&ResumeDocument::default()));
        assert!(html.contains(placeholders::NO_EXPERIENCE));
        assert!(html.contains(placeholders::NO_EDUCATION));
        assert!(html.contains(placeholders::NO_SKILLS));
        assert!(html.contains("class=\"placeholder\""));
    }

    #[test]
    fn modern_layout_renders_sidebar() {
        let document = ResumeDocument {
            template: TemplateId::Modern,
            skills: vec!["Rust".to_string()],
            ..ResumeDocument::default()
        };
        let html = to_html(&project(&document));
        assert!(html.contains("<aside>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(!html.contains(placeholders::NO_SKILLS));
    }
}
