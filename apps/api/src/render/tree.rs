//! The renderer's output: a serializable tree of layout blocks the
//! presentation layer styles and paginates. `PartialEq` across the tree makes
//! the determinism contract directly assertable.

use serde::Serialize;
use uuid::Uuid;

use crate::templates::{Margins, PageSize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualDocument {
    pub template_id: String,
    pub page_size: PageSize,
    pub margins: Margins,
    pub header: Header,
    /// Absent entirely when the summary is empty; an empty heading is never
    /// rendered.
    pub summary: Option<SummaryBlock>,
    pub sections: Vec<SectionBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBlock {
    pub heading: String,
    pub text: String,
}

/// Template-keyed header layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "style", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Header {
    /// Centered name over one separator-joined contact line.
    Contact { name: String, contact_line: Vec<String> },
    /// Labeled personal details, a link list and a photo slot.
    Profile {
        name: String,
        details: Vec<LabeledValue>,
        links: Vec<String>,
        photo_url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    pub id: Uuid,
    pub title: String,
    pub nodes: Vec<Node>,
}

/// One layout node inside a section. Every field is non-empty by construction;
/// empty source data omits the node (or the field) instead of rendering blanks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Node {
    /// Heading line of one item: e.g. company / role / "Jan 2020 – Present".
    Entry {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        subheading: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        dates: Option<String>,
    },
    Paragraph { text: String },
    Labeled { label: String, value: String },
    Bullets { items: Vec<String> },
    InlineList { items: Vec<String> },
    /// Pre-sanitized free-form markup from a custom section, passed verbatim.
    Markup { content: String },
}

impl Node {
    pub(crate) fn entry(
        heading: Option<String>,
        subheading: Option<String>,
        dates: Option<String>,
    ) -> Option<Node> {
        if heading.is_none() && subheading.is_none() && dates.is_none() {
            return None;
        }
        Some(Node::Entry {
            heading,
            subheading,
            dates,
        })
    }
}

/// `Some(trimmed-nonempty)` or `None`. The whole renderer's "omit that line"
/// policy funnels through this.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
