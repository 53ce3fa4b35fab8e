//! Template Renderer — substitutes Document content into a placeholder
//! template in one structured pass.
//!
//! Flow: scan → resolve each token → assemble. The renderer is pure and
//! infallible: same (Document, template) pair always yields the same
//! output, nothing is awaited, and no input (empty Document, malformed
//! token, out-of-range index) is an error.

pub mod fallbacks;
pub mod fragments;
pub mod handlers;
pub mod resolver;
pub mod scanner;

use crate::models::document::Document;
use crate::render::scanner::Segment;

/// Renders `template` against `document`, producing display-ready markup.
pub fn render(document: &Document, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in scanner::scan(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => out.push_str(&resolver::resolve(document, token)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::ExperienceEntry;

    /// True if `output` still contains a `{[A-Z0-9_]+}` substring.
    fn has_token_shaped_text(output: &str) -> bool {
        scanner::scan(output)
            .iter()
            .any(|s| matches!(s, Segment::Token(_)))
    }

    fn acme_doc() -> Document {
        let mut doc = Document::default();
        doc.work_experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: String::new(),
            start_date: "01/2020".to_string(),
            end_date: "Present".to_string(),
            description: "Built things".to_string(),
        });
        doc
    }

    #[test]
    fn test_no_token_shaped_text_survives_rendering() {
        let doc = Document::default();
        let template = "{FULL_NAME} {WORK_EXPERIENCE} {NOT_A_TOKEN} {SKILL_9} {EDUCATION}";
        let out = render(&doc, template);
        assert!(
            !has_token_shaped_text(&out),
            "cleanup invariant violated: {out}"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = acme_doc();
        let template = "<body>{FULL_NAME}{WORK_EXPERIENCE}{SKILLS}</body>";
        assert_eq!(render(&doc, template), render(&doc, template));
    }

    #[test]
    fn test_work_experience_fragment_contents_and_order() {
        let out = render(&acme_doc(), "{WORK_EXPERIENCE}");
        for needle in ["Acme", "Engineer", "01/2020", "Present", "Built things"] {
            assert!(out.contains(needle), "missing {needle} in {out}");
        }
        // Fragment order is position, dates, employer, location, description.
        let pos = out.find("Engineer").unwrap();
        let start = out.find("01/2020").unwrap();
        let company = out.find("Acme").unwrap();
        let desc = out.find("Built things").unwrap();
        assert!(pos < start && start < company && company < desc);
    }

    #[test]
    fn test_empty_document_gets_fallbacks_not_blanks() {
        let out = render(&Document::default(), "<h1>{FULL_NAME}</h1>{WORK_EXPERIENCE}");
        assert!(out.contains("Your Name"));
        // Exactly one example experience fragment, never a blank section.
        assert_eq!(out.matches("entry-experience").count(), 1);
        assert!(!out.contains("<h1></h1>"));
    }

    #[test]
    fn test_out_of_range_indexed_token_is_omitted() {
        let mut doc = Document::default();
        doc.skills = vec!["Rust".to_string(), "SQL".to_string()];
        let out = render(&doc, "a{SKILL_3}b");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_appending_entry_extends_output_in_place() {
        let template = "{WORK_EXPERIENCE}";
        let mut doc = acme_doc();
        let before = render(&doc, template);

        doc.work_experience.push(ExperienceEntry {
            company: "Globex".to_string(),
            position: "Lead".to_string(),
            ..Default::default()
        });
        let after = render(&doc, template);

        assert_eq!(after.matches("entry-experience").count(), 2);
        // Earlier fragments are byte-unchanged and keep their order.
        assert!(after.starts_with(&before));
        assert!(after.find("Acme").unwrap() < after.find("Globex").unwrap());
    }

    #[test]
    fn test_template_without_placeholders_passes_through() {
        let template = "<p>nothing to substitute</p>";
        assert_eq!(render(&Document::default(), template), template);
    }

    #[test]
    fn test_empty_template_renders_empty() {
        assert_eq!(render(&acme_doc(), ""), "");
    }

    #[test]
    fn test_indexed_field_tokens_address_specific_entries() {
        let mut doc = acme_doc();
        doc.work_experience.push(ExperienceEntry {
            company: "Globex".to_string(),
            position: "Lead".to_string(),
            ..Default::default()
        });
        let out = render(&doc, "{JOB_TITLE_1} at {COMPANY_1}; {JOB_TITLE_2} at {COMPANY_2}");
        assert_eq!(out, "Engineer at Acme; Lead at Globex");
    }

    #[test]
    fn test_rendering_does_not_mutate_document() {
        let doc = acme_doc();
        let snapshot = doc.clone();
        let _ = render(&doc, "{WORK_EXPERIENCE}{SKILLS}{REFERENCES}");
        assert_eq!(doc, snapshot);
    }
}
