//! Per-section-type item shapes, as one tagged union.
//!
//! The schema registry guarantees every field is always present (empty, not
//! omitted), so each variant's required key set is unique and the union can be
//! serialized untagged: a record that drops fields fails to deserialize, which is
//! exactly the "reject malformed items at the boundary" rule. Variant order
//! matters only for the `Custom` catch-all, which must stay last.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Experience(ExperienceItem),
    Education(EducationItem),
    Skill(SkillItem),
    Project(ProjectItem),
    Certification(CertificationItem),
    Language(LanguageItem),
    Volunteer(VolunteerItem),
    Publication(PublicationItem),
    Award(AwardItem),
    Custom(CustomItem),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub id: Uuid,
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerItem {
    pub id: Uuid,
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationItem {
    pub id: Uuid,
    pub title: String,
    pub publisher: String,
    pub date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardItem {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// Minimal free-form entry used inside `custom` sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomItem {
    pub id: Uuid,
    pub text: String,
}

impl Item {
    /// The stable handle for update/remove operations. Never use positional
    /// indices — item lists mutate.
    pub fn id(&self) -> Uuid {
        match self {
            Item::Experience(i) => i.id,
            Item::Education(i) => i.id,
            Item::Skill(i) => i.id,
            Item::Project(i) => i.id,
            Item::Certification(i) => i.id,
            Item::Language(i) => i.id,
            Item::Volunteer(i) => i.id,
            Item::Publication(i) => i.id,
            Item::Award(i) => i.id,
            Item::Custom(i) => i.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_item_resolves_by_key_set() {
        let json = r#"{
            "id": "7b0c8f50-9a14-4a6e-9f9c-2a8e4f1d3b21",
            "company": "Acme", "role": "Engineer", "location": "",
            "startDate": "2020-01", "endDate": "", "current": true,
            "description": "", "achievements": []
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(matches!(item, Item::Experience(_)));

        let json = r#"{"id": "7b0c8f50-9a14-4a6e-9f9c-2a8e4f1d3b21", "name": "Rust", "level": "expert"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(matches!(item, Item::Skill(_)));

        let json = r#"{"id": "7b0c8f50-9a14-4a6e-9f9c-2a8e4f1d3b21", "text": "anything"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(matches!(item, Item::Custom(_)));
    }

    #[test]
    fn test_item_with_dropped_field_rejected() {
        // An experience record missing `achievements` matches no variant.
        let json = r#"{
            "id": "7b0c8f50-9a14-4a6e-9f9c-2a8e4f1d3b21",
            "company": "Acme", "role": "Engineer", "location": "",
            "startDate": "2020-01", "endDate": "", "current": true,
            "description": ""
        }"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_item_roundtrip_preserves_variant() {
        let original = Item::Publication(PublicationItem {
            id: Uuid::new_v4(),
            title: "Paper".to_string(),
            publisher: "ACM".to_string(),
            date: "2023-05".to_string(),
            link: "".to_string(),
        });
        let json = serde_json::to_string(&original).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
