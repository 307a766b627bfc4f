//! Template Registry — static catalog of presentation templates.
//!
//! Lookup only, no mutation. `get_by_id` never fails (unknown ids fall back to
//! the default entry) so the renderer stays total; the strict `find` exists for
//! HTTP lookups that want to 404 instead.

use serde::Serialize;

use crate::models::document::PersonalField;

/// Page formats supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US letter, 8.5 x 11 inches.
    Letter,
    A4,
}

/// Page insets in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    const fn uniform(inset: f32) -> Self {
        Margins {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }
}

/// Which header layout the renderer uses for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderStyle {
    /// Centered name over a separator-joined contact line (ATS style).
    Contact,
    /// Labeled personal details, link list and a photo slot (EU style).
    Profile,
}

/// One immutable registry entry. Requirement lists are typed field slices, so
/// validation is data-driven and adding a template never touches validation
/// logic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Presentation-layer asset; stored as an opaque URL string.
    pub thumbnail: &'static str,
    pub features: &'static [&'static str],
    pub required_fields: &'static [PersonalField],
    pub optional_fields: &'static [PersonalField],
    pub page_size: PageSize,
    pub margins: Margins,
    pub recommended_for: &'static [&'static str],
    #[serde(skip)]
    pub header_style: HeaderStyle,
}

impl Template {
    /// True if the template lists the field as required or optional. The four
    /// template-conditional personal fields render only when declared.
    pub fn declares(&self, field: PersonalField) -> bool {
        self.required_fields.contains(&field) || self.optional_fields.contains(&field)
    }
}

pub const DEFAULT_TEMPLATE_ID: &str = "ats-friendly";

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "ats-friendly",
        name: "ATS-Friendly",
        description: "Clean, minimal, optimized for applicant tracking systems",
        category: "simple",
        thumbnail: "/assets/templates/ats-friendly-thumb.png",
        features: &[
            "No photo",
            "Single column",
            "ATS-optimized",
            "Clean formatting",
        ],
        required_fields: &[],
        optional_fields: &[
            PersonalField::Linkedin,
            PersonalField::Github,
            PersonalField::Website,
        ],
        page_size: PageSize::Letter,
        margins: Margins::uniform(0.75),
        recommended_for: &["Corporate", "Traditional industries", "Large companies"],
        header_style: HeaderStyle::Contact,
    },
    Template {
        id: "eu-swiss",
        name: "EU/Swiss Professional",
        description: "Professional format with photo, common in Europe and Switzerland",
        category: "modern",
        thumbnail: "/assets/templates/eu-swiss-thumb.webp",
        features: &[
            "Photo included",
            "Formal structure",
            "Personal details",
            "European standard",
        ],
        required_fields: &[PersonalField::PhotoUrl, PersonalField::Nationality],
        optional_fields: &[PersonalField::DateOfBirth, PersonalField::ResidenceStatus],
        page_size: PageSize::A4,
        margins: Margins::uniform(0.5),
        recommended_for: &["European companies", "Swiss companies", "Formal applications"],
        header_style: HeaderStyle::Profile,
    },
];

/// Keywords whose presence in a job description suggests the EU/Swiss template.
const EUROPEAN_KEYWORDS: &[&str] = &[
    "europe",
    "european",
    "switzerland",
    "swiss",
    "germany",
    "german",
    "france",
    "french",
];

/// Strict lookup. Use this where "unknown template" should surface as an error.
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Defaulting lookup: unknown or absent ids resolve to the default template.
/// This is what keeps rendering total.
pub fn get_by_id(id: &str) -> &'static Template {
    find(id).unwrap_or_else(default_template)
}

fn default_template() -> &'static Template {
    // verify_registry checks at startup that this lookup cannot miss.
    TEMPLATES
        .iter()
        .find(|t| t.id == DEFAULT_TEMPLATE_ID)
        .expect("template registry has no default entry")
}

pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Category filter. `"all"` returns everything; an unknown category returns an
/// empty list, not an error.
pub fn by_category(category: &str) -> Vec<&'static Template> {
    if category == "all" {
        return TEMPLATES.iter().collect();
    }
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

/// Advisory template recommendation from a job description: any European-context
/// keyword selects the EU/Swiss template, otherwise the default. Never
/// auto-applied without user confirmation.
pub fn recommend(job_description: &str) -> &'static str {
    let lowered = job_description.to_lowercase();
    if EUROPEAN_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        "eu-swiss"
    } else {
        DEFAULT_TEMPLATE_ID
    }
}

/// Startup check: ids are unique, the default resolves, and no field is listed
/// as both required and optional. A malformed registry is a configuration
/// error and fatal, not a per-render error.
pub fn verify_registry() -> anyhow::Result<()> {
    for (i, template) in TEMPLATES.iter().enumerate() {
        if TEMPLATES[..i].iter().any(|t| t.id == template.id) {
            anyhow::bail!("duplicate template id '{}'", template.id);
        }
        for field in template.required_fields {
            if template.optional_fields.contains(field) {
                anyhow::bail!(
                    "template '{}' lists {:?} as both required and optional",
                    template.id,
                    field
                );
            }
        }
    }
    if find(DEFAULT_TEMPLATE_ID).is_none() {
        anyhow::bail!("default template '{DEFAULT_TEMPLATE_ID}' is not registered");
    }
    Ok(())
}
