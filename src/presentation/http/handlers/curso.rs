//! Curso Handlers
//!
//! HTTP handlers for the course CRUD endpoints under `/api/cursos`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateCursoRequest, UpdateCursoRequest};
use crate::application::dto::response::CursoResponse;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all courses
pub async fn get_all_cursos(
    State(state): State<AppState>,
) -> Result<Json<Vec<CursoResponse>>, AppError> {
    let cursos = state.curso_service.find_all().await?;

    let responses: Vec<CursoResponse> = cursos.into_iter().map(CursoResponse::from).collect();

    Ok(Json(responses))
}

/// Get a course by ID
pub async fn get_curso_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CursoResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))?;

    let curso = state
        .curso_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Curso with id {} not found", id)))?;

    Ok(Json(CursoResponse::from(curso)))
}

/// Create a new course
pub async fn create_curso(
    State(state): State<AppState>,
    Json(body): Json<CreateCursoRequest>,
) -> Result<Json<CursoResponse>, AppError> {
    let curso = state.curso_service.save(None, &body.into()).await?;

    Ok(Json(CursoResponse::from(curso)))
}

/// Update a course
///
/// Read-modify-write: looks up the stored record, copies exactly `nome` and
/// `descricao` from the request body, and saves under the path identifier.
pub async fn update_curso(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCursoRequest>,
) -> Result<Json<CursoResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))?;

    let existing = state
        .curso_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Curso with id {} not found", id)))?;

    let updated = state
        .curso_service
        .save(Some(existing.id), &body.into())
        .await?;

    Ok(Json(CursoResponse::from(updated)))
}

/// Delete a course
pub async fn delete_curso(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))?;

    if state.curso_service.get_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Curso with id {} not found", id)));
    }

    state.curso_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
