//! Render projection of a resume document.
//!
//! # Responsibility
//! - Map a document to a template-specific layout tree (`project`).
//! - Serialize layout trees to printable HTML and to plain text.
//!
//! # Invariants
//! - Projection is pure: same document in, identical layout out; the input
//!   is only borrowed immutably.
//! - Placeholders exist only in the layout, never in the document.

pub mod html;
pub mod layout;
pub mod text;

pub use html::to_html;
pub use layout::{
    project, EducationItem, ExperienceItem, Header, MainRegion, ModernLayout, ResumeLayout,
    Sidebar, SimpleLayout, TextNode,
};
pub use text::to_plain_text;
