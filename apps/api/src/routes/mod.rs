pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::document::handlers as documents;
use crate::render::handlers as renders;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        // Stateless render — the preview/print/export call surface
        .route("/api/v1/render", post(renders::handle_render))
        // Session documents
        .route("/api/v1/documents", post(documents::handle_create_document))
        .route("/api/v1/documents/:id", get(documents::handle_get_document))
        .route(
            "/api/v1/documents/:id/personal",
            put(documents::handle_put_personal),
        )
        .route(
            "/api/v1/documents/:id/preview",
            get(documents::handle_preview),
        )
        .route(
            "/api/v1/documents/:id/experience",
            post(documents::handle_append_experience),
        )
        .route(
            "/api/v1/documents/:id/experience/:index",
            delete(documents::handle_remove_experience),
        )
        .route(
            "/api/v1/documents/:id/education",
            post(documents::handle_append_education),
        )
        .route(
            "/api/v1/documents/:id/education/:index",
            delete(documents::handle_remove_education),
        )
        .route(
            "/api/v1/documents/:id/skills",
            post(documents::handle_append_skill),
        )
        .route(
            "/api/v1/documents/:id/skills/:index",
            delete(documents::handle_remove_skill),
        )
        .route(
            "/api/v1/documents/:id/achievements",
            post(documents::handle_append_achievement),
        )
        .route(
            "/api/v1/documents/:id/achievements/:index",
            delete(documents::handle_remove_achievement),
        )
        .route(
            "/api/v1/documents/:id/references",
            post(documents::handle_append_reference),
        )
        .route(
            "/api/v1/documents/:id/references/:index",
            delete(documents::handle_remove_reference),
        )
        .with_state(state)
}
