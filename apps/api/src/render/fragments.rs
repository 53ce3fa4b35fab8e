//! Section fragments — the fixed sub-templates behind multi-entry
//! placeholders.
//!
//! Each entry of a multi-entry section renders through one fixed fragment
//! template; a section placeholder expands to the concatenation of its
//! fragments in Document order. The fragment markers are lowercase on
//! purpose: the scanner only recognizes uppercase tokens, so fragment
//! output can never be re-interpreted as a placeholder.
//!
//! The work-experience fragment emits position, dates, employer, location,
//! description in that fixed order.

use crate::models::document::{
    Document, EducationEntry, ExperienceEntry, ReferenceEntry,
};
use crate::render::fallbacks;
use crate::render::resolver::Section;

const EXPERIENCE_FRAGMENT: &str = r#"<div class="entry entry-experience">
  <div class="entry-heading"><span class="entry-title">{position}</span><span class="entry-dates">{dates}</span></div>
  <div class="entry-subheading"><span class="entry-org">{company}</span><span class="entry-place">{location}</span></div>
  <p class="entry-description">{description}</p>
</div>
"#;

const EDUCATION_FRAGMENT: &str = r#"<div class="entry entry-education">
  <div class="entry-heading"><span class="entry-title">{degree}</span><span class="entry-dates">{graduation_date}</span></div>
  <div class="entry-subheading"><span class="entry-org">{institution}</span><span class="entry-place">{location}</span></div>
  <p class="entry-description">{description}</p>
</div>
"#;

const REFERENCE_FRAGMENT: &str = r#"<div class="entry entry-reference">
  <span class="reference-name">{name}</span>, <span class="reference-role">{position}</span> at <span class="reference-org">{company}</span>
  <div class="reference-contact">{email} | {phone}</div>
</div>
"#;

const SKILL_FRAGMENT: &str = "<li class=\"skill-item\">{skill}</li>\n";

const ACHIEVEMENT_FRAGMENT: &str = "<li class=\"achievement-item\">{achievement}</li>\n";

/// Renders the date range for a work entry. An empty end date with a
/// non-empty start means the position is current.
pub fn date_range(start: &str, end: &str) -> String {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => format!("{start} - Present"),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}

pub fn experience(entry: &ExperienceEntry) -> String {
    EXPERIENCE_FRAGMENT
        .replace("{position}", &entry.position)
        .replace("{dates}", &date_range(&entry.start_date, &entry.end_date))
        .replace("{company}", &entry.company)
        .replace("{location}", &entry.location)
        .replace("{description}", &entry.description)
}

pub fn education(entry: &EducationEntry) -> String {
    EDUCATION_FRAGMENT
        .replace("{degree}", &entry.degree)
        .replace("{graduation_date}", &entry.graduation_date)
        .replace("{institution}", &entry.institution)
        .replace("{location}", &entry.location)
        .replace("{description}", &entry.description)
}

pub fn reference(entry: &ReferenceEntry) -> String {
    REFERENCE_FRAGMENT
        .replace("{name}", &entry.name)
        .replace("{position}", &entry.position)
        .replace("{company}", &entry.company)
        .replace("{email}", &entry.email)
        .replace("{phone}", &entry.phone)
}

pub fn skill(text: &str) -> String {
    SKILL_FRAGMENT.replace("{skill}", text)
}

pub fn achievement(text: &str) -> String {
    ACHIEVEMENT_FRAGMENT.replace("{achievement}", text)
}

/// Expands a section placeholder: one fragment per entry in Document order,
/// or one synthetic example fragment when the section is empty so the
/// preview never appears blank.
pub fn section(doc: &Document, section: Section) -> String {
    match section {
        Section::WorkExperience => {
            if doc.work_experience.is_empty() {
                experience(&fallbacks::sample_experience())
            } else {
                doc.work_experience.iter().map(experience).collect()
            }
        }
        Section::Education => {
            if doc.education.is_empty() {
                education(&fallbacks::sample_education())
            } else {
                doc.education.iter().map(education).collect()
            }
        }
        Section::Skills => {
            if doc.skills.is_empty() {
                skill(fallbacks::SAMPLE_SKILL)
            } else {
                doc.skills.iter().map(|s| skill(s)).collect()
            }
        }
        Section::Achievements => {
            if doc.achievements.is_empty() {
                achievement(fallbacks::SAMPLE_ACHIEVEMENT)
            } else {
                doc.achievements.iter().map(|a| achievement(a)).collect()
            }
        }
        Section::References => {
            if doc.references.is_empty() {
                reference(&fallbacks::sample_reference())
            } else {
                doc.references.iter().map(reference).collect()
            }
        }
    }
}
