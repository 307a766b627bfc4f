//! Document Model — owns every mutation on the CV aggregate.
//!
//! Nothing here mutates in place: each operation takes a borrowed value and
//! returns a new one, so callers (undo stacks, reactive UIs) can diff old vs
//! new. Validation is a separate explicit step, never a write-time gate —
//! transient invalid states are normal while the user is typing.
//!
//! Tolerance rules: unknown section/item ids are no-ops (operations are
//! idempotent under stale handles); only index-range violations in
//! [`reorder_sections`] are treated as caller bugs and panic.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::document::{
    Document, PersonalField, PersonalInfo, Section, SectionType, SourceType,
};
use crate::models::item::Item;
use crate::schema;
use crate::templates;

/// Shallow JSON object merged over an item's serialized form. `id` keys are
/// ignored; a merge that no longer matches any item shape is a no-op.
pub type ItemPatch = serde_json::Map<String, Value>;

/// Partial update for section-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub visible: Option<bool>,
    pub data: Option<crate::models::document::SectionData>,
}

// ────────────────────────────────────────────────────────────────────────────
// Document operations
// ────────────────────────────────────────────────────────────────────────────

/// A fresh Document: empty personal info, empty summary, and the three seed
/// sections (experience=1, education=2, skills=3). `source_type` starts as
/// manual; workflows adjust it after the entry mode is chosen.
pub fn create_empty(template_id: &str) -> Document {
    let seeds = [
        SectionType::Experience,
        SectionType::Education,
        SectionType::Skills,
    ];
    let sections = seeds
        .iter()
        .enumerate()
        .map(|(i, &section_type)| Section {
            id: Uuid::new_v4(),
            section_type,
            title: schema::default_title(section_type).to_string(),
            order: i as u32 + 1,
            visible: true,
            data: schema::empty_section_data(section_type),
        })
        .collect();

    Document {
        id: None,
        title: "Untitled CV".to_string(),
        template_id: template_id.to_string(),
        source_type: SourceType::Manual,
        personal_info: PersonalInfo::default(),
        summary: String::new(),
        sections,
    }
}

pub fn set_title(doc: &Document, title: &str) -> Document {
    let mut doc = doc.clone();
    doc.title = title.to_string();
    doc
}

pub fn set_personal_field(doc: &Document, field: PersonalField, value: &str) -> Document {
    let mut doc = doc.clone();
    doc.personal_info.set(field, value.to_string());
    doc
}

pub fn set_summary(doc: &Document, text: &str) -> Document {
    let mut doc = doc.clone();
    doc.summary = text.to_string();
    doc
}

/// Appends a new section of the given type at `order = max(existing) + 1`,
/// titled and populated from the schema registry. The type being a closed enum
/// is what makes this infallible.
pub fn add_section(doc: &Document, section_type: SectionType) -> Document {
    let mut doc = doc.clone();
    let next_order = doc.sections.iter().map(|s| s.order).max().unwrap_or(0) + 1;
    doc.sections.push(Section {
        id: Uuid::new_v4(),
        section_type,
        title: schema::default_title(section_type).to_string(),
        order: next_order,
        visible: true,
        data: schema::empty_section_data(section_type),
    });
    doc
}

/// Removes a section by id. Remaining `order` values are NOT renumbered — gaps
/// are allowed after removal; renumbering happens only on explicit reorder.
/// Unknown ids are a no-op.
pub fn remove_section(doc: &Document, section_id: Uuid) -> Document {
    let mut doc = doc.clone();
    doc.sections.retain(|s| s.id != section_id);
    doc
}

/// Shallow-merges the patch into the named section. Unknown ids are a no-op.
pub fn update_section(doc: &Document, section_id: Uuid, patch: &SectionPatch) -> Document {
    with_section(doc, section_id, |section| {
        let mut section = section.clone();
        if let Some(title) = &patch.title {
            section.title = title.clone();
        }
        if let Some(visible) = patch.visible {
            section.visible = visible;
        }
        if let Some(data) = &patch.data {
            section.data = data.clone();
        }
        section
    })
}

/// Flips `visible` on the named section. Invisible sections stay in the model
/// but are excluded from rendering.
pub fn toggle_section_visibility(doc: &Document, section_id: Uuid) -> Document {
    let visible = match doc.section(section_id) {
        Some(section) => section.visible,
        None => return doc.clone(),
    };
    update_section(
        doc,
        section_id,
        &SectionPatch {
            visible: Some(!visible),
            ..SectionPatch::default()
        },
    )
}

/// Moves the section at `from_index` of the order-sorted sequence to
/// `to_index`, then renumbers all sections' `order` to 1..N.
///
/// # Panics
///
/// Panics if either index is out of range. Out-of-range indices are a caller
/// bug; wire-facing callers clamp first (see [`apply_op`]).
pub fn reorder_sections(doc: &Document, from_index: usize, to_index: usize) -> Document {
    let mut doc = doc.clone();
    doc.sections.sort_by_key(|s| s.order);
    assert!(
        from_index < doc.sections.len() && to_index < doc.sections.len(),
        "reorder index out of range: {from_index} -> {to_index} with {} sections",
        doc.sections.len()
    );
    let moved = doc.sections.remove(from_index);
    doc.sections.insert(to_index, moved);
    for (i, section) in doc.sections.iter_mut().enumerate() {
        section.order = i as u32 + 1;
    }
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// Item operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends one fresh empty item of the section's type. For custom sections
/// this is the minimal `{id, text}` shape.
pub fn add_item(section: &Section) -> Section {
    let mut section = section.clone();
    section
        .data
        .items_mut()
        .push(schema::empty_item(section.section_type));
    section
}

/// Filters out the item by id; idempotent if absent.
pub fn remove_item(section: &Section, item_id: Uuid) -> Section {
    let mut section = section.clone();
    section.data.items_mut().retain(|i| i.id() != item_id);
    section
}

/// Shallow-merges the patch into the matching item by id. No-op if the id is
/// absent or the merged record no longer parses as a valid item. The `id` key
/// itself is immutable and ignored in patches.
pub fn update_item(section: &Section, item_id: Uuid, patch: &ItemPatch) -> Section {
    let mut section = section.clone();
    let items = section.data.items_mut();
    if let Some(pos) = items.iter().position(|i| i.id() == item_id) {
        if let Some(merged) = merge_item(&items[pos], patch) {
            items[pos] = merged;
        }
    }
    section
}

fn merge_item(item: &Item, patch: &ItemPatch) -> Option<Item> {
    let Ok(Value::Object(mut record)) = serde_json::to_value(item) else {
        return None;
    };
    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        record.insert(key.clone(), value.clone());
    }
    serde_json::from_value(Value::Object(record)).ok()
}

fn with_section<F>(doc: &Document, section_id: Uuid, f: F) -> Document
where
    F: FnOnce(&Section) -> Section,
{
    let mut doc = doc.clone();
    if let Some(pos) = doc.sections.iter().position(|s| s.id == section_id) {
        doc.sections[pos] = f(&doc.sections[pos]);
    }
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Result of an explicit validation pass. Always returned as data, never an
/// error — the UI shows every problem at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks the universal rules (full name, email) and the target template's
/// required personal-info fields. Errors accumulate; nothing short-circuits.
pub fn validate(doc: &Document, template_id: &str) -> ValidationReport {
    let template = templates::get_by_id(template_id);
    let mut errors = Vec::new();

    if doc.personal_info.full_name.trim().is_empty() {
        errors.push("Full name is required".to_string());
    }
    if doc.personal_info.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }

    for &field in template.required_fields {
        // Universal fields are already covered above.
        if matches!(field, PersonalField::FullName | PersonalField::Email) {
            continue;
        }
        if doc.personal_info.get(field).trim().is_empty() {
            errors.push(format!(
                "{} is required for the {} template",
                field.label(),
                template.name
            ));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serializable command surface
// ────────────────────────────────────────────────────────────────────────────

/// One edit command, so the stateless route layer can forward edits without a
/// per-operation endpoint. Glue over the operations above, not new semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DocumentOp {
    SetTitle {
        title: String,
    },
    SetPersonalField {
        field: PersonalField,
        value: String,
    },
    SetSummary {
        text: String,
    },
    AddSection {
        section_type: SectionType,
    },
    RemoveSection {
        section_id: Uuid,
    },
    UpdateSection {
        section_id: Uuid,
        patch: SectionPatch,
    },
    ToggleSectionVisibility {
        section_id: Uuid,
    },
    ReorderSections {
        from_index: usize,
        to_index: usize,
    },
    AddItem {
        section_id: Uuid,
    },
    RemoveItem {
        section_id: Uuid,
        item_id: Uuid,
    },
    UpdateItem {
        section_id: Uuid,
        item_id: Uuid,
        patch: ItemPatch,
    },
}

/// Applies one command to a document. This is the wire-facing entry point, so
/// reorder indices are clamped here instead of panicking on caller input.
pub fn apply_op(doc: &Document, op: &DocumentOp) -> Document {
    match op {
        DocumentOp::SetTitle { title } => set_title(doc, title),
        DocumentOp::SetPersonalField { field, value } => set_personal_field(doc, *field, value),
        DocumentOp::SetSummary { text } => set_summary(doc, text),
        DocumentOp::AddSection { section_type } => add_section(doc, *section_type),
        DocumentOp::RemoveSection { section_id } => remove_section(doc, *section_id),
        DocumentOp::UpdateSection { section_id, patch } => update_section(doc, *section_id, patch),
        DocumentOp::ToggleSectionVisibility { section_id } => {
            toggle_section_visibility(doc, *section_id)
        }
        DocumentOp::ReorderSections {
            from_index,
            to_index,
        } => {
            if doc.sections.is_empty() {
                return doc.clone();
            }
            let last = doc.sections.len() - 1;
            reorder_sections(doc, (*from_index).min(last), (*to_index).min(last))
        }
        DocumentOp::AddItem { section_id } => with_section(doc, *section_id, add_item),
        DocumentOp::RemoveItem {
            section_id,
            item_id,
        } => with_section(doc, *section_id, |s| remove_item(s, *item_id)),
        DocumentOp::UpdateItem {
            section_id,
            item_id,
            patch,
        } => with_section(doc, *section_id, |s| update_item(s, *item_id, patch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section_of(doc: &Document, section_type: SectionType) -> &Section {
        doc.sections
            .iter()
            .find(|s| s.section_type == section_type)
            .expect("seed section missing")
    }

    fn patch_of(value: Value) -> ItemPatch {
        match value {
            Value::Object(map) => map,
            other => panic!("patch fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_create_empty_seeds_three_sections_in_order() {
        let doc = create_empty("ats-friendly");
        assert_eq!(doc.title, "Untitled CV");
        assert_eq!(doc.source_type, SourceType::Manual);
        assert_eq!(doc.sections.len(), 3);
        let orders: Vec<(SectionType, u32)> = doc
            .sections
            .iter()
            .map(|s| (s.section_type, s.order))
            .collect();
        assert_eq!(
            orders,
            vec![
                (SectionType::Experience, 1),
                (SectionType::Education, 2),
                (SectionType::Skills, 3),
            ]
        );
        // Each seed section starts with exactly one empty item.
        for section in &doc.sections {
            assert_eq!(section.data.items().len(), 1);
        }
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let doc = create_empty("ats-friendly");
        let before = doc.clone();
        let _ = set_summary(&doc, "changed");
        let _ = add_section(&doc, SectionType::Awards);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_add_then_remove_preserves_orders() {
        let doc = create_empty("ats-friendly");
        let with_projects = add_section(&doc, SectionType::Projects);
        assert_eq!(with_projects.sections.len(), 4);
        let projects = section_of(&with_projects, SectionType::Projects);
        assert_eq!(projects.order, 4);

        let back = remove_section(&with_projects, projects.id);
        assert_eq!(back.sections.len(), 3);
        let mut orders: Vec<u32> = back.sections.iter().map(|s| s.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2, 3], "plain removal must not renumber");
    }

    #[test]
    fn test_remove_section_is_idempotent() {
        let doc = create_empty("ats-friendly");
        let target = doc.sections[1].id;
        let once = remove_section(&doc, target);
        let twice = remove_section(&once, target);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_removal_leaves_gaps_until_reorder() {
        let doc = create_empty("ats-friendly");
        let gapped = remove_section(&doc, doc.sections[1].id);
        let mut orders: Vec<u32> = gapped.sections.iter().map(|s| s.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 3]);
    }

    #[test]
    fn test_reorder_renumbers_one_to_n() {
        let doc = add_section(&create_empty("ats-friendly"), SectionType::Languages);
        let gapped = remove_section(&doc, doc.sections[0].id);
        let reordered = reorder_sections(&gapped, 2, 0);
        let mut orders: Vec<u32> = reordered.sections.iter().map(|s| s.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(
            reordered.sections[0].section_type,
            SectionType::Languages,
            "moved section must land at the target position"
        );
    }

    #[test]
    #[should_panic(expected = "reorder index out of range")]
    fn test_reorder_out_of_range_panics() {
        let doc = create_empty("ats-friendly");
        let _ = reorder_sections(&doc, 0, 7);
    }

    #[test]
    fn test_update_section_merges_only_given_fields() {
        let doc = create_empty("ats-friendly");
        let id = doc.sections[0].id;
        let updated = update_section(
            &doc,
            id,
            &SectionPatch {
                title: Some("Employment".to_string()),
                ..SectionPatch::default()
            },
        );
        let section = updated.section(id).unwrap();
        assert_eq!(section.title, "Employment");
        assert!(section.visible);
        assert_eq!(section.data, doc.sections[0].data);
    }

    #[test]
    fn test_update_section_unknown_id_is_noop() {
        let doc = create_empty("ats-friendly");
        let updated = update_section(
            &doc,
            Uuid::new_v4(),
            &SectionPatch {
                title: Some("ghost".to_string()),
                ..SectionPatch::default()
            },
        );
        assert_eq!(updated, doc);
    }

    #[test]
    fn test_toggle_visibility_flips() {
        let doc = create_empty("ats-friendly");
        let id = doc.sections[2].id;
        let hidden = toggle_section_visibility(&doc, id);
        assert!(!hidden.section(id).unwrap().visible);
        let shown = toggle_section_visibility(&hidden, id);
        assert!(shown.section(id).unwrap().visible);
    }

    #[test]
    fn test_add_item_appends_fresh_item() {
        let doc = create_empty("ats-friendly");
        let skills = section_of(&doc, SectionType::Skills);
        let grown = add_item(skills);
        assert_eq!(grown.data.items().len(), 2);
        assert_ne!(grown.data.items()[0].id(), grown.data.items()[1].id());
    }

    #[test]
    fn test_add_item_to_custom_uses_minimal_shape() {
        let doc = add_section(&create_empty("ats-friendly"), SectionType::Custom);
        let custom = section_of(&doc, SectionType::Custom);
        let grown = add_item(custom);
        assert!(matches!(grown.data.items()[0], Item::Custom(_)));
    }

    #[test]
    fn test_update_item_changes_only_target_item() {
        let doc = create_empty("ats-friendly");
        let skills = add_item(section_of(&doc, SectionType::Skills));
        let first = skills.data.items()[0].id();
        let second = skills.data.items()[1].id();

        let updated = update_item(&skills, first, &patch_of(json!({"name": "Rust"})));
        match &updated.data.items()[0] {
            Item::Skill(s) => {
                assert_eq!(s.id, first, "item id must be stable across updates");
                assert_eq!(s.name, "Rust");
                assert_eq!(s.level, "");
            }
            other => panic!("expected skill item, got {other:?}"),
        }
        assert_eq!(
            updated.data.items()[1].id(),
            second,
            "sibling items must be untouched"
        );
        match &updated.data.items()[1] {
            Item::Skill(s) => assert_eq!(s.name, ""),
            other => panic!("expected skill item, got {other:?}"),
        }
    }

    #[test]
    fn test_update_item_cannot_change_id() {
        let doc = create_empty("ats-friendly");
        let skills = section_of(&doc, SectionType::Skills);
        let id = skills.data.items()[0].id();
        let updated = update_item(
            skills,
            id,
            &patch_of(json!({"id": Uuid::new_v4(), "name": "Go"})),
        );
        assert_eq!(updated.data.items()[0].id(), id);
    }

    #[test]
    fn test_update_item_invalid_merge_is_noop() {
        let doc = create_empty("ats-friendly");
        let skills = section_of(&doc, SectionType::Skills);
        let id = skills.data.items()[0].id();
        // `level` must be a string; a numeric merge no longer parses.
        let updated = update_item(skills, id, &patch_of(json!({"level": 5})));
        assert_eq!(&updated, skills);
    }

    #[test]
    fn test_update_item_unknown_id_is_noop() {
        let doc = create_empty("ats-friendly");
        let skills = section_of(&doc, SectionType::Skills);
        let updated = update_item(skills, Uuid::new_v4(), &patch_of(json!({"name": "X"})));
        assert_eq!(&updated, skills);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let doc = create_empty("ats-friendly");
        let skills = section_of(&doc, SectionType::Skills);
        let id = skills.data.items()[0].id();
        let once = remove_item(skills, id);
        let twice = remove_item(&once, id);
        assert_eq!(once, twice);
        assert!(once.data.items().is_empty());
    }

    #[test]
    fn test_validate_universal_rules() {
        let doc = create_empty("ats-friendly");
        let report = validate(&doc, "ats-friendly");
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Full name is required", "Email is required"]
        );

        let filled = set_personal_field(
            &set_personal_field(&doc, PersonalField::FullName, "Ada Lovelace"),
            PersonalField::Email,
            "ada@example.com",
        );
        assert!(validate(&filled, "ats-friendly").is_valid);
    }

    #[test]
    fn test_validate_whitespace_only_counts_as_empty() {
        let doc = set_personal_field(
            &create_empty("ats-friendly"),
            PersonalField::FullName,
            "   ",
        );
        let report = validate(&doc, "ats-friendly");
        assert!(report.errors.contains(&"Full name is required".to_string()));
    }

    #[test]
    fn test_validate_accumulates_template_requirements() {
        let doc = create_empty("eu-swiss");
        let report = validate(&doc, "eu-swiss");
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 4, "errors: {:?}", report.errors);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Photo") && e.contains("EU/Swiss Professional")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Nationality") && e.contains("EU/Swiss Professional")));
    }

    #[test]
    fn test_apply_op_roundtrips_through_json() {
        let doc = create_empty("ats-friendly");
        let op: DocumentOp = serde_json::from_value(json!({
            "op": "setPersonalField",
            "field": "fullName",
            "value": "Ada Lovelace"
        }))
        .unwrap();
        let updated = apply_op(&doc, &op);
        assert_eq!(updated.personal_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_apply_op_clamps_reorder_indices() {
        let doc = create_empty("ats-friendly");
        let updated = apply_op(
            &doc,
            &DocumentOp::ReorderSections {
                from_index: 99,
                to_index: 0,
            },
        );
        assert_eq!(updated.sections[0].section_type, SectionType::Skills);
        let orders: Vec<u32> = updated.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_op_item_commands_target_section() {
        let doc = create_empty("ats-friendly");
        let skills_id = section_of(&doc, SectionType::Skills).id;
        let grown = apply_op(
            &doc,
            &DocumentOp::AddItem {
                section_id: skills_id,
            },
        );
        assert_eq!(grown.section(skills_id).unwrap().data.items().len(), 2);

        // Unknown section id: no-op.
        let same = apply_op(
            &doc,
            &DocumentOp::AddItem {
                section_id: Uuid::new_v4(),
            },
        );
        assert_eq!(same, doc);
    }
}
