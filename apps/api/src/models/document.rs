//! The CV aggregate: Document → Sections → Items.
//!
//! Field names serialize in camelCase so the wire/persistence record matches the
//! frontend's shape (`templateId`, `photoUrl`, `startDate`, ...). Documents travel
//! whole in request bodies — the server holds no per-session state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::item::Item;

/// One in-progress CV. `id` stays `None` until the (external) persistence layer
/// assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Option<Uuid>,
    pub title: String,
    pub template_id: String,
    pub source_type: SourceType,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub sections: Vec<Section>,
}

/// Provenance tag. Informational only — no behavior depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    Manual,
    AiGenerated,
    Imported,
    Optimizer,
}

/// Fixed contact fields plus the four template-conditional ones (photo, date of
/// birth, nationality, residence status). All fields are always present; empty
/// string means "not filled in yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub photo_url: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub residence_status: String,
}

/// Typed handle for one `PersonalInfo` field, so template requirement lists are
/// slices of this enum rather than loose strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Website,
    PhotoUrl,
    DateOfBirth,
    Nationality,
    ResidenceStatus,
}

impl PersonalField {
    /// Human-readable label used in validation messages and profile headers.
    pub fn label(self) -> &'static str {
        match self {
            PersonalField::FullName => "Full name",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone",
            PersonalField::Location => "Address",
            PersonalField::Linkedin => "LinkedIn",
            PersonalField::Github => "GitHub",
            PersonalField::Website => "Website",
            PersonalField::PhotoUrl => "Photo",
            PersonalField::DateOfBirth => "Date of birth",
            PersonalField::Nationality => "Nationality",
            PersonalField::ResidenceStatus => "Residence status",
        }
    }
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::Github => &self.github,
            PersonalField::Website => &self.website,
            PersonalField::PhotoUrl => &self.photo_url,
            PersonalField::DateOfBirth => &self.date_of_birth,
            PersonalField::Nationality => &self.nationality,
            PersonalField::ResidenceStatus => &self.residence_status,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: String) {
        match field {
            PersonalField::FullName => self.full_name = value,
            PersonalField::Email => self.email = value,
            PersonalField::Phone => self.phone = value,
            PersonalField::Location => self.location = value,
            PersonalField::Linkedin => self.linkedin = value,
            PersonalField::Github => self.github = value,
            PersonalField::Website => self.website = value,
            PersonalField::PhotoUrl => self.photo_url = value,
            PersonalField::DateOfBirth => self.date_of_birth = value,
            PersonalField::Nationality => self.nationality = value,
            PersonalField::ResidenceStatus => self.residence_status = value,
        }
    }
}

/// The closed set of section types. `type` fixes an item's structure; the
/// user-editable `title` on the section is free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Volunteer,
    Publications,
    Awards,
    Custom,
}

/// One named, typed, orderable block within a Document.
///
/// `order` is an explicit position field, not the list index. After a reorder it
/// is renumbered 1..N; plain removal leaves gaps on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub title: String,
    pub order: u32,
    pub visible: bool,
    pub data: SectionData,
}

/// Section payload. Structured types carry `{items}`; `custom` sections carry
/// free-form markup plus an optional item list. Untagged: the presence of
/// `content` is what distinguishes the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionData {
    Custom { content: String, items: Vec<Item> },
    Items { items: Vec<Item> },
}

impl SectionData {
    pub fn items(&self) -> &[Item] {
        match self {
            SectionData::Custom { items, .. } | SectionData::Items { items } => items,
        }
    }

    pub fn items_mut(&mut self) -> &mut Vec<Item> {
        match self {
            SectionData::Custom { items, .. } | SectionData::Items { items } => items,
        }
    }
}

impl Document {
    pub fn section(&self, section_id: Uuid) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }
}
