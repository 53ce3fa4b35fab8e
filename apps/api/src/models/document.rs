//! Document model — the structured resume content a session builds up.
//!
//! A Document is created empty, mutated field-by-field from form input, and
//! converted to markup on demand by the renderer. Every field is a plain
//! string with an empty default; dates are free text (an empty `end_date`
//! means "still here" and renders as the Present sentinel). Section vectors
//! are ordered — display order is input order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    /// Empty means the position is current ("Present").
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub graduation_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// The full structured resume content for one session.
///
/// Duplicates are allowed in `skills` — no dedup is enforced anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_fully_empty() {
        let doc = Document::default();
        assert!(doc.personal_info.full_name.is_empty());
        assert!(doc.work_experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.achievements.is_empty());
        assert!(doc.references.is_empty());
    }

    #[test]
    fn test_document_deserializes_with_missing_fields() {
        // Form clients send partial bodies — every field must default.
        let doc: Document = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert_eq!(doc.skills, vec!["Rust".to_string()]);
        assert!(doc.personal_info.email.is_empty());
        assert!(doc.work_experience.is_empty());
    }

    #[test]
    fn test_experience_entry_round_trips() {
        let entry = ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: "Remote".to_string(),
            start_date: "01/2020".to_string(),
            end_date: String::new(),
            description: "Built things".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let recovered: ExperienceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, entry);
    }

    #[test]
    fn test_skills_allow_duplicates() {
        let doc: Document =
            serde_json::from_str(r#"{"skills": ["SQL", "SQL"]}"#).unwrap();
        assert_eq!(doc.skills.len(), 2);
    }
}
