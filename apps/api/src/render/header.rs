//! Header block rendering, keyed by the template's declared style.

use crate::models::document::{PersonalField, PersonalInfo};
use crate::render::tree::{non_empty, Header, LabeledValue};
use crate::templates::{HeaderStyle, Template};

/// Renders the personal-info header for the resolved template. The fixed
/// contact fields render on any template when non-empty; the template-
/// conditional ones only when the template declares them.
pub fn render_header(info: &PersonalInfo, template: &Template) -> Header {
    match template.header_style {
        HeaderStyle::Contact => Header::Contact {
            name: display_name(info),
            contact_line: [
                &info.location,
                &info.email,
                &info.phone,
                &info.linkedin,
                &info.github,
                &info.website,
            ]
            .iter()
            .filter_map(|v| non_empty(v))
            .collect(),
        },
        HeaderStyle::Profile => {
            let mut details: Vec<LabeledValue> = Vec::new();
            let mut push = |field: PersonalField| {
                if let Some(value) = non_empty(info.get(field)) {
                    details.push(LabeledValue {
                        label: field.label().to_string(),
                        value,
                    });
                }
            };
            push(PersonalField::Email);
            push(PersonalField::Phone);
            push(PersonalField::Location);
            for field in [
                PersonalField::DateOfBirth,
                PersonalField::Nationality,
                PersonalField::ResidenceStatus,
            ] {
                if template.declares(field) {
                    push(field);
                }
            }

            Header::Profile {
                name: display_name(info),
                details,
                links: [&info.linkedin, &info.github, &info.website]
                    .iter()
                    .filter_map(|v| non_empty(v))
                    .collect(),
                photo_url: if template.declares(PersonalField::PhotoUrl) {
                    non_empty(&info.photo_url)
                } else {
                    None
                },
            }
        }
    }
}

fn display_name(info: &PersonalInfo) -> String {
    non_empty(&info.full_name).unwrap_or_default()
}
