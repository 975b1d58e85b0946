//! Part CRUD handlers.
//!
//! These handlers use the repository trait object from [`AppState`] and
//! translate change counts into 404s. Axum's own extractor rejections are
//! caught and reported as 400 with a JSON error body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use partstore_core::part::{Part, PartInput};
use partstore_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, ValidationError},
    models::{ChangesResponse, CreatedResponse, DeletedResponse},
    state::AppState,
};

fn part_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    let Path(id) = path.map_err(|e| ValidationError(format!("Invalid part id: {}", e.body_text())))?;
    Ok(id)
}

fn part_input(body: Result<Json<PartInput>, JsonRejection>) -> Result<PartInput, AppError> {
    let Json(input) = body.map_err(|e| ValidationError(e.body_text()))?;
    Ok(input)
}

/// List all parts (GET /api/parts).
pub async fn list_parts(State(state): State<AppState>) -> Result<Json<Vec<Part>>, AppError> {
    let parts = state.part_repo.list_parts().await?;
    Ok(Json(parts))
}

/// Get a single part by ID (GET /api/parts/{id}).
pub async fn get_part(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Part>, AppError> {
    let id = part_id(path)?;

    state
        .part_repo
        .get_part(id)
        .await?
        .map(Json)
        .ok_or_else(|| RepositoryError::part_not_found(id).into())
}

/// Create a new part (POST /api/parts).
pub async fn create_part(
    State(state): State<AppState>,
    body: Result<Json<PartInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let input = part_input(body)?;
    tracing::debug!(payload = ?input, "Received create part request");

    let id = state.part_repo.create_part(&input).await?;

    tracing::info!(part_id = id, part_number = %input.part_number, "Created new part");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a part by ID (PUT /api/parts/{id}).
///
/// A zero change count means the id does not exist and is reported as 404.
pub async fn update_part(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PartInput>, JsonRejection>,
) -> Result<Json<ChangesResponse>, AppError> {
    let id = part_id(path)?;
    let input = part_input(body)?;

    let changes = state.part_repo.update_part(id, &input).await?;
    if changes == 0 {
        return Err(RepositoryError::part_not_found(id).into());
    }

    tracing::info!(part_id = id, changes, "Updated part");

    Ok(Json(ChangesResponse { changes }))
}

/// Delete a part by ID (DELETE /api/parts/{id}).
///
/// A zero change count means the id does not exist and is reported as 404.
pub async fn delete_part(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = part_id(path)?;

    let deleted = state.part_repo.delete_part(id).await?;
    if deleted == 0 {
        return Err(RepositoryError::part_not_found(id).into());
    }

    tracing::info!(part_id = id, "Deleted part");

    Ok(Json(DeletedResponse { deleted }))
}
