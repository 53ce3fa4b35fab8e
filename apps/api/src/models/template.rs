use serde::Serialize;

/// Catalog listing entry for a built-in template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
