//! Per-section-type layout rules.
//!
//! One rule per section type, dispatched over the closed enum. The custom arm
//! doubles as the defensive fallback: a section whose payload carries free-form
//! content, or an item that does not belong to the section's type, degrades to
//! verbatim markup / a stringified bullet instead of failing. The renderer
//! never raises for partial data.

use crate::models::document::{Section, SectionData, SectionType};
use crate::models::item::Item;
use crate::render::dates::{date_range, format_date};
use crate::render::tree::{non_empty, Node, SectionBlock};

pub fn render_section(section: &Section) -> SectionBlock {
    // Free-form payloads take the custom path no matter what the section's
    // type claims. This is the step-5 fallback.
    let nodes = match (&section.data, section.section_type) {
        (SectionData::Custom { content, items }, _) => custom_nodes(content, items),
        (SectionData::Items { items }, SectionType::Skills) => {
            inline_nodes(items, skill_label, |i| matches!(i, Item::Skill(_)))
        }
        (SectionData::Items { items }, SectionType::Languages) => {
            inline_nodes(items, language_label, |i| matches!(i, Item::Language(_)))
        }
        (SectionData::Items { items }, _) => items.iter().flat_map(item_nodes).collect(),
    };

    SectionBlock {
        id: section.id,
        title: section.title.clone(),
        nodes,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Structured item rules
// ────────────────────────────────────────────────────────────────────────────

fn item_nodes(item: &Item) -> Vec<Node> {
    let mut nodes = Vec::new();
    match item {
        Item::Experience(exp) => {
            push_entry(
                &mut nodes,
                non_empty(&exp.company),
                joined(&exp.role, &exp.location, " | "),
                date_range(&exp.start_date, &exp.end_date, exp.current),
            );
            push_paragraph(&mut nodes, &exp.description);
            push_bullets(&mut nodes, &exp.achievements);
        }
        Item::Education(edu) => {
            push_entry(
                &mut nodes,
                non_empty(&edu.school),
                joined(&edu.degree, &edu.field, " in "),
                date_range(&edu.start_date, &edu.end_date, false),
            );
            push_paragraph(&mut nodes, &edu.location);
            push_labeled(&mut nodes, "GPA", &edu.gpa);
            push_bullets(&mut nodes, &edu.achievements);
        }
        Item::Project(project) => {
            push_entry(
                &mut nodes,
                non_empty(&project.name),
                None,
                date_range(&project.start_date, &project.end_date, false),
            );
            push_paragraph(&mut nodes, &project.description);
            let technologies: Vec<String> = project
                .technologies
                .iter()
                .filter_map(|t| non_empty(t))
                .collect();
            if !technologies.is_empty() {
                nodes.push(Node::InlineList {
                    items: technologies,
                });
            }
            push_labeled(&mut nodes, "Link", &project.link);
        }
        Item::Certification(cert) => {
            push_entry(
                &mut nodes,
                non_empty(&cert.name),
                non_empty(&cert.issuer),
                non_empty(&format_date(&cert.date)),
            );
            push_labeled(&mut nodes, "Credential ID", &cert.credential_id);
            push_labeled(&mut nodes, "Link", &cert.link);
        }
        Item::Volunteer(vol) => {
            push_entry(
                &mut nodes,
                non_empty(&vol.organization),
                non_empty(&vol.role),
                date_range(&vol.start_date, &vol.end_date, false),
            );
            push_paragraph(&mut nodes, &vol.description);
        }
        Item::Publication(publication) => {
            push_entry(
                &mut nodes,
                non_empty(&publication.title),
                non_empty(&publication.publisher),
                non_empty(&format_date(&publication.date)),
            );
            push_labeled(&mut nodes, "Link", &publication.link);
        }
        Item::Award(award) => {
            push_entry(
                &mut nodes,
                non_empty(&award.title),
                non_empty(&award.issuer),
                non_empty(&format_date(&award.date)),
            );
            push_paragraph(&mut nodes, &award.description);
        }
        // Skill/language items outside their aggregating section, and custom
        // items inside a structured section, degrade to a single bullet.
        Item::Skill(_) | Item::Language(_) | Item::Custom(_) => {
            if let Some(text) = fallback_text(item) {
                nodes.push(Node::Bullets { items: vec![text] });
            }
        }
    }
    nodes
}

// ────────────────────────────────────────────────────────────────────────────
// Inline sections (skills, languages)
// ────────────────────────────────────────────────────────────────────────────

fn inline_nodes(
    items: &[Item],
    label: fn(&Item) -> Option<String>,
    native: fn(&Item) -> bool,
) -> Vec<Node> {
    let entries: Vec<String> = items
        .iter()
        .filter_map(|item| match label(item) {
            Some(entry) => Some(entry),
            // A native item with nothing to show is omitted, not stringified;
            // only foreign items take the fallback path.
            None if native(item) => None,
            None => fallback_text(item),
        })
        .collect();
    if entries.is_empty() {
        Vec::new()
    } else {
        vec![Node::InlineList { items: entries }]
    }
}

fn skill_label(item: &Item) -> Option<String> {
    match item {
        Item::Skill(skill) => {
            let name = non_empty(&skill.name)?;
            Some(match non_empty(&skill.level) {
                Some(level) => format!("{name} ({level})"),
                None => name,
            })
        }
        _ => None,
    }
}

fn language_label(item: &Item) -> Option<String> {
    match item {
        Item::Language(lang) => {
            let language = non_empty(&lang.language)?;
            Some(match non_empty(&lang.proficiency) {
                Some(proficiency) => format!("{language} ({proficiency})"),
                None => language,
            })
        }
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Custom / fallback path
// ────────────────────────────────────────────────────────────────────────────

fn custom_nodes(content: &str, items: &[Item]) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(content) = non_empty(content) {
        nodes.push(Node::Markup { content });
    }
    let bullets: Vec<String> = items.iter().filter_map(fallback_text).collect();
    if !bullets.is_empty() {
        nodes.push(Node::Bullets { items: bullets });
    }
    nodes
}

/// Display text for an item outside its own rule: custom items render their
/// text, anything else its stringified record.
fn fallback_text(item: &Item) -> Option<String> {
    match item {
        Item::Custom(custom) => non_empty(&custom.text),
        other => serde_json::to_string(other).ok(),
    }
}

fn push_entry(
    nodes: &mut Vec<Node>,
    heading: Option<String>,
    subheading: Option<String>,
    dates: Option<String>,
) {
    if let Some(node) = Node::entry(heading, subheading, dates) {
        nodes.push(node);
    }
}

fn push_paragraph(nodes: &mut Vec<Node>, text: &str) {
    if let Some(text) = non_empty(text) {
        nodes.push(Node::Paragraph { text });
    }
}

fn push_labeled(nodes: &mut Vec<Node>, label: &str, value: &str) {
    if let Some(value) = non_empty(value) {
        nodes.push(Node::Labeled {
            label: label.to_string(),
            value,
        });
    }
}

fn push_bullets(nodes: &mut Vec<Node>, items: &[String]) {
    let items: Vec<String> = items.iter().filter_map(|i| non_empty(i)).collect();
    if !items.is_empty() {
        nodes.push(Node::Bullets { items });
    }
}

/// "left sep right" when both sides are present, otherwise whichever is.
fn joined(left: &str, right: &str, separator: &str) -> Option<String> {
    match (non_empty(left), non_empty(right)) {
        (Some(l), Some(r)) => Some(format!("{l}{separator}{r}")),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{CustomItem, ExperienceItem, SkillItem};
    use uuid::Uuid;

    fn make_section(section_type: SectionType, data: SectionData) -> Section {
        Section {
            id: Uuid::new_v4(),
            section_type,
            title: "Test".to_string(),
            order: 1,
            visible: true,
            data,
        }
    }

    fn make_experience(current: bool) -> Item {
        Item::Experience(ExperienceItem {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            location: "Zurich".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2022-06".to_string(),
            current,
            description: "Built things.".to_string(),
            achievements: vec!["Shipped v1".to_string(), "".to_string()],
        })
    }

    #[test]
    fn test_experience_current_renders_present() {
        let block = render_section(&make_section(
            SectionType::Experience,
            SectionData::Items {
                items: vec![make_experience(true)],
            },
        ));
        match &block.nodes[0] {
            Node::Entry {
                heading,
                subheading,
                dates,
            } => {
                assert_eq!(heading.as_deref(), Some("Acme"));
                assert_eq!(subheading.as_deref(), Some("Engineer | Zurich"));
                assert_eq!(dates.as_deref(), Some("Jan 2020 – Present"));
            }
            other => panic!("expected entry node, got {other:?}"),
        }
        // Empty achievement strings are dropped, non-empty ones kept.
        assert!(matches!(
            &block.nodes[2],
            Node::Bullets { items } if items == &vec!["Shipped v1".to_string()]
        ));
    }

    #[test]
    fn test_empty_items_produce_no_nodes() {
        let block = render_section(&make_section(
            SectionType::Experience,
            crate::schema::empty_section_data(SectionType::Experience),
        ));
        assert!(
            block.nodes.is_empty(),
            "a fully empty item must render nothing, got {:?}",
            block.nodes
        );
    }

    #[test]
    fn test_skills_aggregate_into_one_inline_list() {
        let items = vec![
            Item::Skill(SkillItem {
                id: Uuid::new_v4(),
                name: "Rust".to_string(),
                level: "Expert".to_string(),
            }),
            Item::Skill(SkillItem {
                id: Uuid::new_v4(),
                name: "SQL".to_string(),
                level: "".to_string(),
            }),
            Item::Skill(SkillItem {
                id: Uuid::new_v4(),
                name: "".to_string(),
                level: "ignored".to_string(),
            }),
        ];
        let block = render_section(&make_section(
            SectionType::Skills,
            SectionData::Items { items },
        ));
        assert_eq!(
            block.nodes,
            vec![Node::InlineList {
                items: vec!["Rust (Expert)".to_string(), "SQL".to_string()]
            }]
        );
    }

    #[test]
    fn test_fresh_empty_inline_sections_render_nothing() {
        // A newly created document seeds skills/languages with one blank item;
        // that item must be skipped, not stringified.
        for section_type in [SectionType::Skills, SectionType::Languages] {
            let block = render_section(&make_section(
                section_type,
                crate::schema::empty_section_data(section_type),
            ));
            assert!(
                block.nodes.is_empty(),
                "fresh empty {section_type:?} section must render nothing, got {:?}",
                block.nodes
            );
        }
    }

    #[test]
    fn test_foreign_item_in_skills_section_still_falls_back() {
        let block = render_section(&make_section(
            SectionType::Skills,
            SectionData::Items {
                items: vec![Item::Custom(CustomItem {
                    id: Uuid::new_v4(),
                    text: "Hand-entered skill".to_string(),
                })],
            },
        ));
        assert_eq!(
            block.nodes,
            vec![Node::InlineList {
                items: vec!["Hand-entered skill".to_string()]
            }]
        );
    }

    #[test]
    fn test_custom_section_markup_and_bullets() {
        let block = render_section(&make_section(
            SectionType::Custom,
            SectionData::Custom {
                content: "<p>Hobbies</p>".to_string(),
                items: vec![Item::Custom(CustomItem {
                    id: Uuid::new_v4(),
                    text: "Chess".to_string(),
                })],
            },
        ));
        assert_eq!(block.nodes.len(), 2);
        assert!(matches!(&block.nodes[0], Node::Markup { content } if content == "<p>Hobbies</p>"));
        assert!(matches!(&block.nodes[1], Node::Bullets { items } if items == &vec!["Chess".to_string()]));
    }

    #[test]
    fn test_foreign_item_in_custom_section_is_stringified() {
        let block = render_section(&make_section(
            SectionType::Custom,
            SectionData::Custom {
                content: String::new(),
                items: vec![Item::Skill(SkillItem {
                    id: Uuid::new_v4(),
                    name: "Rust".to_string(),
                    level: "".to_string(),
                })],
            },
        ));
        match &block.nodes[0] {
            Node::Bullets { items } => {
                assert!(items[0].contains("\"name\":\"Rust\""));
            }
            other => panic!("expected bullets node, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_payload_under_structured_type_takes_fallback_path() {
        let block = render_section(&make_section(
            SectionType::Experience,
            SectionData::Custom {
                content: "legacy blob".to_string(),
                items: vec![],
            },
        ));
        assert_eq!(
            block.nodes,
            vec![Node::Markup {
                content: "legacy blob".to_string()
            }]
        );
    }
}
