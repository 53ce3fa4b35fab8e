use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::document::Document;
use crate::render::render;

/// Request body for a stateless render: the preview/print/export surfaces
/// send the Document they hold plus an externally supplied template string.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub document: Document,
    pub template: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

/// POST /api/v1/render
///
/// Pure transform, no state touched. Cannot fail: malformed placeholders
/// are cleaned up, empty fields fall back, so the handler is infallible.
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    let html = render(&req.document, &req.template);
    debug!(
        "Rendered template ({} chars in, {} chars out)",
        req.template.len(),
        html.len()
    );
    Json(RenderResponse { html })
}
