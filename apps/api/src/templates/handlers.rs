use axum::{extract::State, Json};

use crate::models::template::TemplateMeta;
use crate::state::AppState;

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateMeta>> {
    Json(state.templates.list())
}
