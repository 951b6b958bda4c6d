//! Curso Service
//!
//! Orchestration layer between the HTTP handlers and the curso repository.
//! Pure delegation: every operation forwards to the repository unchanged,
//! and repository errors pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Curso, CursoData, CursoRepository};
use crate::shared::error::AppError;

/// Curso service trait
#[async_trait]
pub trait CursoService: Send + Sync {
    /// List every course
    async fn find_all(&self) -> Result<Vec<Curso>, AppError>;

    /// Get a course by ID; absence is a value, not an error
    async fn get_by_id(&self, id: i64) -> Result<Option<Curso>, AppError>;

    /// Persist a course, upserting by identifier presence
    async fn save(&self, id: Option<i64>, data: &CursoData) -> Result<Curso, AppError>;

    /// Delete a course by ID, returning nothing
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// CursoService implementation
pub struct CursoServiceImpl<R>
where
    R: CursoRepository + ?Sized,
{
    curso_repo: Arc<R>,
}

impl<R> CursoServiceImpl<R>
where
    R: CursoRepository + ?Sized,
{
    pub fn new(curso_repo: Arc<R>) -> Self {
        Self { curso_repo }
    }
}

#[async_trait]
impl<R> CursoService for CursoServiceImpl<R>
where
    R: CursoRepository + ?Sized + 'static,
{
    async fn find_all(&self) -> Result<Vec<Curso>, AppError> {
        self.curso_repo.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Curso>, AppError> {
        self.curso_repo.find_by_id(id).await
    }

    async fn save(&self, id: Option<i64>, data: &CursoData) -> Result<Curso, AppError> {
        self.curso_repo.save(id, data).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.curso_repo.delete_by_id(id).await
    }
}
