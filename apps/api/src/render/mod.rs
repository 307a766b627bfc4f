//! Renderer — pure projection from (Document, template id) to a visual tree.
//!
//! No side effects, no I/O, deterministic: the same document and template
//! always produce a structurally identical tree, which is the contract both
//! live-preview and final export depend on. Malformed or partial documents
//! never error here; missing data simply omits output.

pub mod dates;
pub mod header;
pub mod sections;
pub mod tree;

pub use tree::VisualDocument;

use crate::models::document::Document;
use crate::render::tree::{non_empty, SummaryBlock};
use crate::templates;

const SUMMARY_HEADING: &str = "Professional Summary";

pub fn render(doc: &Document, template_id: &str) -> VisualDocument {
    let template = templates::get_by_id(template_id);

    let mut visible: Vec<_> = doc.sections.iter().filter(|s| s.visible).collect();
    visible.sort_by_key(|s| s.order);

    VisualDocument {
        template_id: template.id.to_string(),
        page_size: template.page_size,
        margins: template.margins,
        header: header::render_header(&doc.personal_info, template),
        summary: non_empty(&doc.summary).map(|text| SummaryBlock {
            heading: SUMMARY_HEADING.to_string(),
            text,
        }),
        sections: visible
            .into_iter()
            .map(sections::render_section)
            .collect(),
    }
}
