use crate::config::Config;
use crate::document::store::DocumentStore;
use crate::templates::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Live session Documents, one per browser session.
    pub store: DocumentStore,
    /// Built-in template catalog.
    pub templates: TemplateCatalog,
    pub config: Config,
}
