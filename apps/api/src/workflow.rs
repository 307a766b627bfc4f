//! Workflow Controller — produces the initial Document for one of the three
//! entry modes, then hands everything off to the document operations.
//!
//! The AI-assisted and import branches are the core's only two integration
//! points. Each makes exactly one external call; on failure the error
//! propagates and no document is produced — there are no partial writes.

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::analysis::{CvDraftRequest, TextAnalyzer};
use crate::document::{
    apply_op, create_empty, set_summary, set_title, update_section, DocumentOp, SectionPatch,
};
use crate::errors::AppError;
use crate::models::document::{Document, SectionData, SectionType, SourceType};
use crate::models::item::{Item, SkillItem};
use crate::storage::ResumeTextSource;

/// How many characters of extracted text the import workflow keeps as the
/// summary excerpt.
const IMPORT_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowKind {
    Manual,
    AiAssisted,
    Import,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry workflows
// ────────────────────────────────────────────────────────────────────────────

/// Manual entry: an empty document, nothing external.
pub fn start_manual(template_id: &str) -> Document {
    create_empty(template_id)
}

/// AI-assisted entry: one call to the text-analysis service, then its draft is
/// mapped into the seeded sections through the normal document operations.
pub async fn start_ai_assisted(
    analyzer: &dyn TextAnalyzer,
    template_id: &str,
    input: &CvDraftRequest,
) -> Result<Document, AppError> {
    if input.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "targetRole cannot be empty".to_string(),
        ));
    }

    let draft = analyzer.draft_cv(input).await?;

    let mut doc = create_empty(template_id);
    doc.source_type = SourceType::AiGenerated;
    doc = set_summary(&doc, &draft.description);

    if let Some((section_id, item_id)) = first_item_of(&doc, SectionType::Experience) {
        doc = apply_op(
            &doc,
            &DocumentOp::UpdateItem {
                section_id,
                item_id,
                patch: patch(json!({
                    "role": input.target_role,
                    "current": true,
                    "description": input.experience_summary,
                })),
            },
        );
    }

    if !draft.suggested_skills.is_empty() {
        let skills_section = doc
            .sections
            .iter()
            .find(|s| s.section_type == SectionType::Skills)
            .map(|s| s.id);
        if let Some(section_id) = skills_section {
            let items = draft
                .suggested_skills
                .iter()
                .map(|name| {
                    Item::Skill(SkillItem {
                        id: Uuid::new_v4(),
                        name: name.clone(),
                        level: String::new(),
                    })
                })
                .collect();
            doc = update_section(
                &doc,
                section_id,
                &SectionPatch {
                    data: Some(SectionData::Items { items }),
                    ..SectionPatch::default()
                },
            );
        }
    }

    if !input.education_summary.trim().is_empty() {
        if let Some((section_id, item_id)) = first_item_of(&doc, SectionType::Education) {
            doc = apply_op(
                &doc,
                &DocumentOp::UpdateItem {
                    section_id,
                    item_id,
                    patch: patch(json!({"degree": input.education_summary})),
                },
            );
        }
    }

    Ok(doc)
}

/// Import entry: fetches the extracted text of an existing resume and maps it
/// into a title plus a truncated summary excerpt.
//
// TODO: map the extracted text into populated experience/education/skills
// sections instead of a summary excerpt.
pub async fn start_import(
    source: &dyn ResumeTextSource,
    template_id: &str,
    resume_id: Uuid,
) -> Result<Document, AppError> {
    let extracted = source.extracted_text(resume_id).await?;

    let mut doc = create_empty(template_id);
    doc.source_type = SourceType::Imported;
    doc = set_title(&doc, &format!("CV - {}", strip_extension(&extracted.filename)));
    doc = set_summary(&doc, &excerpt(&extracted.extracted_text));
    Ok(doc)
}

fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => filename,
    }
}

fn excerpt(text: &str) -> String {
    let mut excerpt: String = text.chars().take(IMPORT_EXCERPT_CHARS).collect();
    if text.chars().count() > IMPORT_EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}

fn first_item_of(doc: &Document, section_type: SectionType) -> Option<(Uuid, Uuid)> {
    let section = doc.sections.iter().find(|s| s.section_type == section_type)?;
    let item = section.data.items().first()?;
    Some((section.id, item.id()))
}

fn patch(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder session state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderStep {
    ChoosingWorkflow,
    ChoosingTemplate,
    Editing,
}

/// The per-session builder state: choosing-workflow → choosing-template →
/// editing. Forward transitions are guarded; backward transitions discard the
/// in-progress selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderSession {
    pub step: BuilderStep,
    pub workflow: Option<WorkflowKind>,
    pub template_id: Option<String>,
    pub document: Option<Document>,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderSession {
    pub fn new() -> Self {
        BuilderSession {
            step: BuilderStep::ChoosingWorkflow,
            workflow: None,
            template_id: None,
            document: None,
        }
    }

    pub fn choose_workflow(&mut self, workflow: WorkflowKind) -> Result<(), AppError> {
        if self.step != BuilderStep::ChoosingWorkflow {
            return Err(AppError::Validation(
                "workflow can only be chosen from the entry step".to_string(),
            ));
        }
        self.workflow = Some(workflow);
        self.step = BuilderStep::ChoosingTemplate;
        Ok(())
    }

    pub fn choose_template(&mut self, template_id: &str) -> Result<(), AppError> {
        if self.step != BuilderStep::ChoosingTemplate {
            return Err(AppError::Validation(
                "a workflow must be selected before a template".to_string(),
            ));
        }
        self.template_id = Some(template_id.to_string());
        Ok(())
    }

    /// Enters editing with the initial document produced by the chosen
    /// workflow's entry branch.
    pub fn enter_editing(&mut self, document: Document) -> Result<(), AppError> {
        if self.step != BuilderStep::ChoosingTemplate || self.template_id.is_none() {
            return Err(AppError::Validation(
                "a template must be selected before editing".to_string(),
            ));
        }
        self.document = Some(document);
        self.step = BuilderStep::Editing;
        Ok(())
    }

    /// One step back. Discards the document when leaving editing, and both the
    /// workflow and template when returning to the entry step. No-op at the
    /// first step.
    pub fn back(&mut self) {
        match self.step {
            BuilderStep::Editing => {
                self.document = None;
                self.step = BuilderStep::ChoosingTemplate;
            }
            BuilderStep::ChoosingTemplate => {
                self.workflow = None;
                self.template_id = None;
                self.step = BuilderStep::ChoosingWorkflow;
            }
            BuilderStep::ChoosingWorkflow => {}
        }
    }
}
