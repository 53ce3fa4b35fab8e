//! Placeholder resolution — classifies a scanned token and produces its
//! replacement text from the Document.
//!
//! Canonical placeholder scheme (one scheme, applied everywhere):
//!
//! - Singular: `{FULL_NAME}` `{EMAIL}` `{PHONE}` `{LOCATION}` `{TAGLINE}`
//!   `{SUMMARY}` — the personal-info field, or a fallback phrase when empty.
//! - Section: `{WORK_EXPERIENCE}` `{EDUCATION}` `{SKILLS}` `{ACHIEVEMENTS}`
//!   `{REFERENCES}` — one fragment per entry, or one example fragment when
//!   the section is empty.
//! - Indexed (1-based `_n` suffix): whole-entry fragments
//!   `{WORK_EXPERIENCE_n}` `{EDUCATION_n}` `{SKILL_n}` `{ACHIEVEMENT_n}`
//!   `{REFERENCE_n}`, and single fields such as `{JOB_TITLE_n}`
//!   `{COMPANY_n}` `{INSTITUTION_n}` `{REFERENCE_EMAIL_n}`. An index past
//!   the end of the section resolves to the empty string.
//! - Anything else matching the token syntax resolves to the empty string.
//!   That last rule is the cleanup stage: no `{TOKEN}`-shaped text ever
//!   reaches the output, and malformed input is never an error.

use crate::models::document::Document;
use crate::render::{fallbacks, fragments};

/// Multi-entry sections of a Document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WorkExperience,
    Education,
    Skills,
    Achievements,
    References,
}

/// Singular personal-info fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularField {
    FullName,
    Email,
    Phone,
    Location,
    Tagline,
    Summary,
}

/// Per-field access into one work-experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkField {
    JobTitle,
    Company,
    JobLocation,
    StartDate,
    EndDate,
    JobDescription,
}

/// Per-field access into one education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    GraduationDate,
    EducationLocation,
    EducationDescription,
}

/// Per-field access into one reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceField {
    Name,
    Position,
    Company,
    Email,
    Phone,
}

/// A classified placeholder token. Indexes are 1-based as written in the
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Singular(SingularField),
    Section(Section),
    EntryFragment(Section, usize),
    WorkField(WorkField, usize),
    EducationField(EducationField, usize),
    ReferenceField(ReferenceField, usize),
    Unknown,
}

/// Classifies a token (brace-stripped). Exact names win; otherwise a
/// trailing `_n` numeric suffix makes it an indexed token if the base is a
/// known indexed name.
pub fn classify(token: &str) -> Placeholder {
    match token {
        "FULL_NAME" => return Placeholder::Singular(SingularField::FullName),
        "EMAIL" => return Placeholder::Singular(SingularField::Email),
        "PHONE" => return Placeholder::Singular(SingularField::Phone),
        "LOCATION" => return Placeholder::Singular(SingularField::Location),
        "TAGLINE" => return Placeholder::Singular(SingularField::Tagline),
        "SUMMARY" => return Placeholder::Singular(SingularField::Summary),
        "WORK_EXPERIENCE" => return Placeholder::Section(Section::WorkExperience),
        "EDUCATION" => return Placeholder::Section(Section::Education),
        "SKILLS" => return Placeholder::Section(Section::Skills),
        "ACHIEVEMENTS" => return Placeholder::Section(Section::Achievements),
        "REFERENCES" => return Placeholder::Section(Section::References),
        _ => {}
    }

    let Some((base, index)) = split_index(token) else {
        return Placeholder::Unknown;
    };

    match base {
        "WORK_EXPERIENCE" => Placeholder::EntryFragment(Section::WorkExperience, index),
        "EDUCATION" => Placeholder::EntryFragment(Section::Education, index),
        "SKILL" => Placeholder::EntryFragment(Section::Skills, index),
        "ACHIEVEMENT" => Placeholder::EntryFragment(Section::Achievements, index),
        "REFERENCE" => Placeholder::EntryFragment(Section::References, index),

        "JOB_TITLE" => Placeholder::WorkField(WorkField::JobTitle, index),
        "COMPANY" => Placeholder::WorkField(WorkField::Company, index),
        "JOB_LOCATION" => Placeholder::WorkField(WorkField::JobLocation, index),
        "START_DATE" => Placeholder::WorkField(WorkField::StartDate, index),
        "END_DATE" => Placeholder::WorkField(WorkField::EndDate, index),
        "JOB_DESCRIPTION" => Placeholder::WorkField(WorkField::JobDescription, index),

        "INSTITUTION" => Placeholder::EducationField(EducationField::Institution, index),
        "DEGREE" => Placeholder::EducationField(EducationField::Degree, index),
        "GRADUATION_DATE" => {
            Placeholder::EducationField(EducationField::GraduationDate, index)
        }
        "EDUCATION_LOCATION" => {
            Placeholder::EducationField(EducationField::EducationLocation, index)
        }
        "EDUCATION_DESCRIPTION" => {
            Placeholder::EducationField(EducationField::EducationDescription, index)
        }

        "REFERENCE_NAME" => Placeholder::ReferenceField(ReferenceField::Name, index),
        "REFERENCE_POSITION" => Placeholder::ReferenceField(ReferenceField::Position, index),
        "REFERENCE_COMPANY" => Placeholder::ReferenceField(ReferenceField::Company, index),
        "REFERENCE_EMAIL" => Placeholder::ReferenceField(ReferenceField::Email, index),
        "REFERENCE_PHONE" => Placeholder::ReferenceField(ReferenceField::Phone, index),

        _ => Placeholder::Unknown,
    }
}

/// Splits `BASE_n` into (`BASE`, n) when the text after the last underscore
/// is all digits. Returns `None` for tokens without a numeric suffix or
/// with an index too large to represent.
fn split_index(token: &str) -> Option<(&str, usize)> {
    let (base, suffix) = token.rsplit_once('_')?;
    if base.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((base, suffix.parse().ok()?))
}

/// Produces the replacement text for one token. Never fails: unknown and
/// out-of-range tokens become the empty string.
pub fn resolve(doc: &Document, token: &str) -> String {
    match classify(token) {
        Placeholder::Singular(field) => {
            let info = &doc.personal_info;
            let (value, fallback) = match field {
                SingularField::FullName => (&info.full_name, fallbacks::FULL_NAME),
                SingularField::Email => (&info.email, fallbacks::EMAIL),
                SingularField::Phone => (&info.phone, fallbacks::PHONE),
                SingularField::Location => (&info.location, fallbacks::LOCATION),
                SingularField::Tagline => (&info.tagline, fallbacks::TAGLINE),
                SingularField::Summary => (&info.summary, fallbacks::SUMMARY),
            };
            fallbacks::or_fallback(value, fallback).to_string()
        }

        Placeholder::Section(section) => fragments::section(doc, section),

        Placeholder::EntryFragment(section, n) => {
            let Some(i) = n.checked_sub(1) else {
                return String::new();
            };
            match section {
                Section::WorkExperience => doc
                    .work_experience
                    .get(i)
                    .map(fragments::experience)
                    .unwrap_or_default(),
                Section::Education => doc
                    .education
                    .get(i)
                    .map(fragments::education)
                    .unwrap_or_default(),
                Section::Skills => doc
                    .skills
                    .get(i)
                    .map(|s| fragments::skill(s))
                    .unwrap_or_default(),
                Section::Achievements => doc
                    .achievements
                    .get(i)
                    .map(|a| fragments::achievement(a))
                    .unwrap_or_default(),
                Section::References => doc
                    .references
                    .get(i)
                    .map(fragments::reference)
                    .unwrap_or_default(),
            }
        }

        Placeholder::WorkField(field, n) => entry_field(n, &doc.work_experience, |e| {
            match field {
                WorkField::JobTitle => e.position.clone(),
                WorkField::Company => e.company.clone(),
                WorkField::JobLocation => e.location.clone(),
                WorkField::StartDate => e.start_date.clone(),
                WorkField::EndDate => e.end_date.clone(),
                WorkField::JobDescription => e.description.clone(),
            }
        }),

        Placeholder::EducationField(field, n) => entry_field(n, &doc.education, |e| {
            match field {
                EducationField::Institution => e.institution.clone(),
                EducationField::Degree => e.degree.clone(),
                EducationField::GraduationDate => e.graduation_date.clone(),
                EducationField::EducationLocation => e.location.clone(),
                EducationField::EducationDescription => e.description.clone(),
            }
        }),

        Placeholder::ReferenceField(field, n) => entry_field(n, &doc.references, |e| {
            match field {
                ReferenceField::Name => e.name.clone(),
                ReferenceField::Position => e.position.clone(),
                ReferenceField::Company => e.company.clone(),
                ReferenceField::Email => e.email.clone(),
                ReferenceField::Phone => e.phone.clone(),
            }
        }),

        Placeholder::Unknown => String::new(),
    }
}

fn entry_field<T>(n: usize, entries: &[T], pick: impl Fn(&T) -> String) -> String {
    n.checked_sub(1)
        .and_then(|i| entries.get(i))
        .map(pick)
        .unwrap_or_default()
}
