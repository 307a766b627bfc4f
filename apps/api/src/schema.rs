//! Section Schema Registry — the single source of truth for what each section
//! type looks like when empty.
//!
//! Every factory returns items with *all* fields present (strings `""`, arrays
//! `[]`, booleans `false`). Editors and renderers therefore never need existence
//! checks, only emptiness checks. With `SectionType` a closed enum these are
//! total matches; "unknown type" cannot reach this module.

use uuid::Uuid;

use crate::models::document::{SectionData, SectionType};
use crate::models::item::{
    AwardItem, CertificationItem, CustomItem, EducationItem, ExperienceItem, Item, LanguageItem,
    ProjectItem, PublicationItem, SkillItem, VolunteerItem,
};

/// Every section type, in the order the UI pickers present them.
pub const SECTION_TYPES: &[SectionType] = &[
    SectionType::Experience,
    SectionType::Education,
    SectionType::Skills,
    SectionType::Projects,
    SectionType::Certifications,
    SectionType::Languages,
    SectionType::Volunteer,
    SectionType::Publications,
    SectionType::Awards,
    SectionType::Custom,
];

/// Default display title for a newly added section. The title is free text
/// afterwards; only the type fixes structure.
pub fn default_title(section_type: SectionType) -> &'static str {
    match section_type {
        SectionType::Experience => "Work Experience",
        SectionType::Education => "Education",
        SectionType::Skills => "Skills",
        SectionType::Projects => "Projects",
        SectionType::Certifications => "Certifications",
        SectionType::Languages => "Languages",
        SectionType::Volunteer => "Volunteer Experience",
        SectionType::Publications => "Publications",
        SectionType::Awards => "Awards",
        SectionType::Custom => "Custom Section",
    }
}

/// One empty, well-formed item for the given type, with a fresh id.
pub fn empty_item(section_type: SectionType) -> Item {
    match section_type {
        SectionType::Experience => Item::Experience(ExperienceItem {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            achievements: Vec::new(),
        }),
        SectionType::Education => Item::Education(EducationItem {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: String::new(),
            achievements: Vec::new(),
        }),
        SectionType::Skills => Item::Skill(SkillItem {
            id: Uuid::new_v4(),
            name: String::new(),
            level: String::new(),
        }),
        SectionType::Projects => Item::Project(ProjectItem {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }),
        SectionType::Certifications => Item::Certification(CertificationItem {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            credential_id: String::new(),
            link: String::new(),
        }),
        SectionType::Languages => Item::Language(LanguageItem {
            id: Uuid::new_v4(),
            language: String::new(),
            proficiency: String::new(),
        }),
        SectionType::Volunteer => Item::Volunteer(VolunteerItem {
            id: Uuid::new_v4(),
            organization: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }),
        SectionType::Publications => Item::Publication(PublicationItem {
            id: Uuid::new_v4(),
            title: String::new(),
            publisher: String::new(),
            date: String::new(),
            link: String::new(),
        }),
        SectionType::Awards => Item::Award(AwardItem {
            id: Uuid::new_v4(),
            title: String::new(),
            issuer: String::new(),
            date: String::new(),
            description: String::new(),
        }),
        SectionType::Custom => Item::Custom(CustomItem {
            id: Uuid::new_v4(),
            text: String::new(),
        }),
    }
}

/// Default payload for a new section: one empty item for structured types,
/// `{content: "", items: []}` for custom.
pub fn empty_section_data(section_type: SectionType) -> SectionData {
    match section_type {
        SectionType::Custom => SectionData::Custom {
            content: String::new(),
            items: Vec::new(),
        },
        _ => SectionData::Items {
            items: vec![empty_item(section_type)],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items_have_fresh_unique_ids() {
        let a = empty_item(SectionType::Skills);
        let b = empty_item(SectionType::Skills);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_empty_experience_item_all_fields_empty() {
        match empty_item(SectionType::Experience) {
            Item::Experience(item) => {
                assert_eq!(item.company, "");
                assert_eq!(item.role, "");
                assert!(!item.current);
                assert!(item.achievements.is_empty());
            }
            other => panic!("expected experience item, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_section_data_shapes() {
        match empty_section_data(SectionType::Projects) {
            SectionData::Items { items } => {
                assert_eq!(items.len(), 1);
                assert!(matches!(items[0], Item::Project(_)));
            }
            other => panic!("expected items payload, got {other:?}"),
        }
        match empty_section_data(SectionType::Custom) {
            SectionData::Custom { content, items } => {
                assert_eq!(content, "");
                assert!(items.is_empty());
            }
            other => panic!("expected custom payload, got {other:?}"),
        }
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(default_title(SectionType::Experience), "Work Experience");
        assert_eq!(default_title(SectionType::Volunteer), "Volunteer Experience");
        assert_eq!(default_title(SectionType::Custom), "Custom Section");
    }
}
