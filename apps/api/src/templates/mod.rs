//! Built-in template catalog.
//!
//! Templates are externally supplied, immutable strings as far as the
//! renderer is concerned; this catalog is simply where the service keeps
//! its own set. The stateless render endpoint still accepts arbitrary
//! template strings from the client.

pub mod builtin;
pub mod handlers;

use crate::models::template::TemplateMeta;

const CATALOG: &[(TemplateMeta, &str)] = &[
    (
        TemplateMeta {
            id: "classic",
            name: "Classic",
            description: "Single-column serif layout with full sections",
        },
        builtin::CLASSIC,
    ),
    (
        TemplateMeta {
            id: "modern",
            name: "Modern",
            description: "Banner header with a two-tone sans-serif layout",
        },
        builtin::MODERN,
    ),
    (
        TemplateMeta {
            id: "compact",
            name: "Compact",
            description: "One page, pinned to the two most recent positions",
        },
        builtin::COMPACT,
    ),
];

/// Lookup facade over the built-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn list(&self) -> Vec<TemplateMeta> {
        CATALOG.iter().map(|(meta, _)| meta.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&'static str> {
        CATALOG
            .iter()
            .find(|(meta, _)| meta.id == id)
            .map(|&(_, body)| body)
    }

    /// Template used when a preview request names none.
    pub fn default_id(&self) -> &'static str {
        "classic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Document;
    use crate::render::render;
    use crate::render::scanner::{scan, Segment};

    #[test]
    fn test_catalog_lists_all_templates() {
        let catalog = TemplateCatalog;
        let ids: Vec<_> = catalog.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["classic", "modern", "compact"]);
    }

    #[test]
    fn test_default_template_exists() {
        let catalog = TemplateCatalog;
        assert!(catalog.get(catalog.default_id()).is_some());
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(TemplateCatalog.get("brutalist").is_none());
    }

    #[test]
    fn test_every_builtin_uses_only_known_placeholders() {
        // Rendering any builtin against an empty Document must leave no
        // token-shaped text: all placeholders resolve or clean up, and an
        // empty Document exercises every fallback.
        let doc = Document::default();
        for (meta, body) in CATALOG {
            let out = render(&doc, body);
            assert!(
                scan(&out).iter().all(|s| matches!(s, Segment::Literal(_))),
                "template {} leaked a token",
                meta.id
            );
            assert!(out.contains("Your Name"), "template {} lost the name", meta.id);
        }
    }
}
