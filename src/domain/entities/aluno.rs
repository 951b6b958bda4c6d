//! Aluno (student) entity and repository trait.
//!
//! Maps to the `alunos` table. The entity is persisted and queryable at the
//! repository level only; no service or HTTP surface exists for it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a student.
///
/// Maps to the `alunos` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - nome: TEXT NOT NULL
/// - email: TEXT NOT NULL
/// - curso: TEXT NOT NULL
///
/// `curso` stores a course name as plain text, not a foreign key into
/// `cursos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aluno {
    /// Surrogate key assigned by the database
    pub id: i64,

    /// Student name
    pub nome: String,

    /// Contact email
    pub email: String,

    /// Name of the course the student is enrolled in
    pub curso: String,
}

/// The mutable payload of a student: every field except the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlunoData {
    pub nome: String,
    pub email: String,
    pub curso: String,
}

/// Repository trait for Aluno data access operations.
#[async_trait]
pub trait AlunoRepository: Send + Sync {
    /// List every stored student.
    async fn find_all(&self) -> Result<Vec<Aluno>, AppError>;

    /// Find a student by its identifier. Absence is not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError>;

    /// Find every student enrolled in the course with the given name.
    async fn find_by_curso(&self, curso: &str) -> Result<Vec<Aluno>, AppError>;

    /// Upsert keyed by identifier presence, as for courses.
    async fn save(&self, id: Option<i64>, data: &AlunoData) -> Result<Aluno, AppError>;

    /// Delete a student by its identifier.
    ///
    /// Returns `AppError::NotFound` when no row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
