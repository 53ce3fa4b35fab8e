//! Document API handlers — create a session Document, mutate it
//! field-by-field as the user fills in forms, and preview it through a
//! catalog template.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{
    Document, EducationEntry, ExperienceEntry, PersonalInfo, ReferenceEntry,
};
use crate::render::render;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub document: Document,
}

/// Body for appending to the plain-string sections (skills, achievements).
#[derive(Debug, Deserialize)]
pub struct ItemBody {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub template_id: Option<String>,
}

/// POST /api/v1/documents
pub async fn handle_create_document(
    State(state): State<AppState>,
) -> Json<DocumentResponse> {
    let (id, document) = state.store.create().await;
    info!("Created document {id}");
    Json(DocumentResponse { id, document })
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = fetch(&state, id).await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// PUT /api/v1/documents/:id/personal
pub async fn handle_put_personal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.personal_info = info;
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// GET /api/v1/documents/:id/preview?template_id=...
///
/// Renders the session Document through a catalog template. The render
/// itself cannot fail; only the id lookups can.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let document = fetch(&state, id).await?;
    let template_id = params
        .template_id
        .unwrap_or_else(|| state.templates.default_id().to_string());
    let template = state
        .templates
        .get(&template_id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))?;
    Ok(Html(render(&document, template)))
}

// ────────────────────────────────────────────────────────────────────────────
// Section mutations — append / remove-by-index pairs
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/:id/experience
pub async fn handle_append_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<ExperienceEntry>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.work_experience.push(entry);
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        remove_at(&mut doc.work_experience, index, "work experience")
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// POST /api/v1/documents/:id/education
pub async fn handle_append_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<EducationEntry>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.education.push(entry);
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        remove_at(&mut doc.education, index, "education")
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// POST /api/v1/documents/:id/skills
pub async fn handle_append_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ItemBody>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.skills.push(body.value);
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        remove_at(&mut doc.skills, index, "skills")
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// POST /api/v1/documents/:id/achievements
pub async fn handle_append_achievement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ItemBody>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.achievements.push(body.value);
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id/achievements/:index
pub async fn handle_remove_achievement(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        remove_at(&mut doc.achievements, index, "achievements")
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// POST /api/v1/documents/:id/references
pub async fn handle_append_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<ReferenceEntry>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        doc.references.push(entry);
        Ok(())
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id/references/:index
pub async fn handle_remove_reference(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = apply(&state, id, move |doc| {
        remove_at(&mut doc.references, index, "references")
    })
    .await?;
    Ok(Json(DocumentResponse { id, document }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn fetch(state: &AppState, id: Uuid) -> Result<Document, AppError> {
    state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))
}

/// Runs a mutation against the stored Document and returns the updated
/// snapshot. Unknown id → 404; the mutation itself may reject (bad index).
async fn apply(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Document) -> Result<(), AppError>,
) -> Result<Document, AppError> {
    state
        .store
        .update(id, |doc| {
            f(doc)?;
            Ok(doc.clone())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))?
}

fn remove_at<T>(entries: &mut Vec<T>, index: usize, section: &str) -> Result<(), AppError> {
    if index >= entries.len() {
        return Err(AppError::UnprocessableEntity(format!(
            "Index {index} out of range for {section} ({} entries)",
            entries.len()
        )));
    }
    entries.remove(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_at_in_range() {
        let mut v = vec!["a", "b", "c"];
        assert!(remove_at(&mut v, 1, "skills").is_ok());
        assert_eq!(v, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range_rejects() {
        let mut v = vec!["a"];
        let err = remove_at(&mut v, 1, "skills").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert_eq!(v.len(), 1, "rejected removal must not touch the vec");
    }
}
