//! Fallback content — what the renderer substitutes when the Document has
//! nothing to say.
//!
//! The renderer sits in a live-typing preview path where empty fields are
//! the common case, so a blank Document must still produce a readable
//! preview: singular fields fall back to a placeholder phrase, and an empty
//! section expands to one synthetic example fragment.

use crate::models::document::{EducationEntry, ExperienceEntry, ReferenceEntry};

pub const FULL_NAME: &str = "Your Name";
pub const EMAIL: &str = "email@example.com";
pub const PHONE: &str = "(555) 123-4567";
pub const LOCATION: &str = "City, State";
pub const TAGLINE: &str = "Your Professional Tagline";
pub const SUMMARY: &str =
    "A short summary of your background, strengths, and what you are looking for.";

pub const SAMPLE_SKILL: &str = "Your Skill";
pub const SAMPLE_ACHIEVEMENT: &str = "A notable achievement, award, or certification";

/// Synthetic work-experience entry shown when the section is empty.
pub fn sample_experience() -> ExperienceEntry {
    ExperienceEntry {
        company: "Company Name".to_string(),
        position: "Job Title".to_string(),
        location: "City, State".to_string(),
        start_date: "Month Year".to_string(),
        end_date: "Present".to_string(),
        description: "Describe your responsibilities and accomplishments in this role."
            .to_string(),
    }
}

/// Synthetic education entry shown when the section is empty.
pub fn sample_education() -> EducationEntry {
    EducationEntry {
        institution: "Institution Name".to_string(),
        degree: "Degree or Certificate".to_string(),
        location: "City, State".to_string(),
        graduation_date: "Month Year".to_string(),
        description: "Relevant coursework, honors, or activities.".to_string(),
    }
}

/// Synthetic reference entry shown when the section is empty.
pub fn sample_reference() -> ReferenceEntry {
    ReferenceEntry {
        name: "Reference Name".to_string(),
        position: "Their Title".to_string(),
        company: "Their Company".to_string(),
        email: "reference@example.com".to_string(),
        phone: "(555) 987-6543".to_string(),
    }
}

/// Singular-field substitution: the value when present, the fallback phrase
/// when the field is empty or whitespace.
pub fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback_prefers_value() {
        assert_eq!(or_fallback("Ada Lovelace", FULL_NAME), "Ada Lovelace");
    }

    #[test]
    fn test_or_fallback_on_empty() {
        assert_eq!(or_fallback("", FULL_NAME), "Your Name");
    }

    #[test]
    fn test_or_fallback_on_whitespace() {
        assert_eq!(or_fallback("   ", EMAIL), EMAIL);
    }

    #[test]
    fn test_sample_entries_are_fully_populated() {
        let exp = sample_experience();
        assert!(!exp.company.is_empty());
        assert!(!exp.position.is_empty());
        assert!(!exp.description.is_empty());

        let edu = sample_education();
        assert!(!edu.institution.is_empty());
        assert!(!edu.degree.is_empty());

        let re = sample_reference();
        assert!(!re.name.is_empty());
        assert!(!re.email.is_empty());
    }
}
