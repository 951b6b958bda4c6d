//! Curso (course) entity and repository trait.
//!
//! Maps to the `cursos` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a course in the catalog.
///
/// Maps to the `cursos` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - nome: TEXT NOT NULL
/// - descricao: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curso {
    /// Surrogate key assigned by the database
    pub id: i64,

    /// Course name
    pub nome: String,

    /// Course description
    pub descricao: String,
}

/// The mutable payload of a course: every field except the identifier.
///
/// This is the input to the upsert operation; the identifier travels
/// separately so that insert-vs-update is keyed by its presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursoData {
    pub nome: String,
    pub descricao: String,
}

impl Curso {
    /// The payload view of this course.
    pub fn data(&self) -> CursoData {
        CursoData {
            nome: self.nome.clone(),
            descricao: self.descricao.clone(),
        }
    }
}

/// Repository trait for Curso data access operations.
#[async_trait]
pub trait CursoRepository: Send + Sync {
    /// List every stored course.
    async fn find_all(&self) -> Result<Vec<Curso>, AppError>;

    /// Find a course by its identifier. Absence is not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, AppError>;

    /// Upsert keyed by identifier presence: insert and let the store assign
    /// an identifier when `id` is `None`, write the payload at that
    /// identifier otherwise. Returns the persisted record.
    async fn save(&self, id: Option<i64>, data: &CursoData) -> Result<Curso, AppError>;

    /// Delete a course by its identifier.
    ///
    /// Returns `AppError::NotFound` when no row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
