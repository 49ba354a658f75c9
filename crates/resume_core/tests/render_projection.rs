use resume_core::render::layout::placeholders;
use resume_core::render::{ModernLayout, SimpleLayout};
use resume_core::{
    project, to_html, to_plain_text, DocumentVariant, EntryId, ExperienceEntry, ResumeDocument,
    ResumeLayout, TemplateId,
};

fn expect_simple(layout: ResumeLayout) -> SimpleLayout {
    match layout {
        ResumeLayout::Simple(simple) => simple,
        other => panic!("expected simple layout, got {:?}", other.template()),
    }
}

fn expect_modern(layout: ResumeLayout) -> ModernLayout {
    match layout {
        ResumeLayout::Modern(modern) => modern,
        other => panic!("expected modern layout, got {:?}", other.template()),
    }
}

#[test]
fn projection_is_pure_and_deterministic() {
    for template in [TemplateId::Simple, TemplateId::Modern] {
        let document = ResumeDocument {
            template,
            ..DocumentVariant::Sample.document()
        };
        let snapshot = document.clone();

        let first = project(&document);
        let second = project(&document);

        assert_eq!(first, second);
        assert_eq!(to_html(&first), to_html(&second));
        assert_eq!(to_plain_text(&first), to_plain_text(&second));
        assert_eq!(document, snapshot);
    }
}

#[test]
fn empty_values_render_placeholders_but_model_keeps_empty_strings() {
    let mut document = ResumeDocument::default();
    document.experience.push(ExperienceEntry {
        bullets: vec![String::new(), "Shipped".to_string()],
        ..ExperienceEntry::empty(EntryId(4))
    });
    document.skills.push(String::new());

    let layout = expect_simple(project(&document));
    let item = &layout.experience[0];
    assert_eq!(item.role.text, placeholders::ROLE);
    assert_eq!(item.company.text, placeholders::COMPANY);
    assert!(item.dates.is_empty());
    assert_eq!(item.bullets[0].text, placeholders::BULLET);
    assert!(item.bullets[0].placeholder);
    assert_eq!(item.bullets[1].text, "Shipped");
    assert!(!item.bullets[1].placeholder);
    assert_eq!(layout.skills[0].text, placeholders::SKILL);

    assert_eq!(document.experience[0].bullets[0], "");
    assert_eq!(document.skills[0], "");
}

#[test]
fn modern_sidebar_holds_profile_and_skills() {
    let document = ResumeDocument {
        template: TemplateId::Modern,
        ..DocumentVariant::Sample.document()
    };

    let layout = expect_modern(project(&document));
    assert_eq!(layout.sidebar.header.name.text, "Jane Doe");
    assert_eq!(layout.sidebar.skills.len(), 7);
    assert_eq!(layout.main.experience.len(), 2);
    assert_eq!(layout.main.education[0].school.text, "State University");

    let text = to_plain_text(&ResumeLayout::Modern(layout));
    assert!(text.contains("SKILLS\n  • Figma"));
    assert!(text.contains("SUMMARY\nSenior Product Designer with 7+ years"));
}

#[test]
fn blank_plain_text_is_fully_populated() {
    let text = to_plain_text(&project(&ResumeDocument::default()));
    assert!(text.starts_with("Your Name\nJob Title\nEmail | Phone | LinkedIn\n"));
    assert!(text.contains(placeholders::SUMMARY));
    assert!(text.contains(placeholders::NO_EXPERIENCE));
    assert!(text.contains(placeholders::NO_EDUCATION));
    assert!(text.contains(placeholders::NO_SKILLS));
}
