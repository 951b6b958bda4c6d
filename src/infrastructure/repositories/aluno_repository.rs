//! Aluno Repository Implementation
//!
//! PostgreSQL implementation of the AlunoRepository trait. Nothing above
//! the repository layer consumes students yet; the implementation mirrors
//! the curso repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Aluno, AlunoData, AlunoRepository};
use crate::shared::error::AppError;

/// Database row representation matching the alunos table schema.
#[derive(Debug, sqlx::FromRow)]
struct AlunoRow {
    id: i64,
    nome: String,
    email: String,
    curso: String,
}

impl AlunoRow {
    /// Convert database row to domain Aluno entity.
    fn into_aluno(self) -> Aluno {
        Aluno {
            id: self.id,
            nome: self.nome,
            email: self.email,
            curso: self.curso,
        }
    }
}

/// PostgreSQL aluno repository implementation.
#[derive(Clone)]
pub struct PgAlunoRepository {
    pool: PgPool,
}

impl PgAlunoRepository {
    /// Create a new PgAlunoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlunoRepository for PgAlunoRepository {
    /// List every stored student.
    async fn find_all(&self) -> Result<Vec<Aluno>, AppError> {
        let rows = sqlx::query_as::<_, AlunoRow>(
            r#"
            SELECT id, nome, email, curso
            FROM alunos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_aluno()).collect())
    }

    /// Find a student by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError> {
        let row = sqlx::query_as::<_, AlunoRow>(
            r#"
            SELECT id, nome, email, curso
            FROM alunos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_aluno()))
    }

    /// Find every student enrolled in the named course.
    ///
    /// `curso` matches the stored course name verbatim; there is no
    /// foreign key into the cursos table.
    async fn find_by_curso(&self, curso: &str) -> Result<Vec<Aluno>, AppError> {
        let rows = sqlx::query_as::<_, AlunoRow>(
            r#"
            SELECT id, nome, email, curso
            FROM alunos
            WHERE curso = $1
            ORDER BY id
            "#,
        )
        .bind(curso)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_aluno()).collect())
    }

    /// Persist a student, upserting by identifier presence.
    async fn save(&self, id: Option<i64>, data: &AlunoData) -> Result<Aluno, AppError> {
        let row = match id {
            Some(id) => {
                sqlx::query_as::<_, AlunoRow>(
                    r#"
                    INSERT INTO alunos (id, nome, email, curso)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET nome = EXCLUDED.nome,
                        email = EXCLUDED.email,
                        curso = EXCLUDED.curso
                    RETURNING id, nome, email, curso
                    "#,
                )
                .bind(id)
                .bind(&data.nome)
                .bind(&data.email)
                .bind(&data.curso)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AlunoRow>(
                    r#"
                    INSERT INTO alunos (nome, email, curso)
                    VALUES ($1, $2, $3)
                    RETURNING id, nome, email, curso
                    "#,
                )
                .bind(&data.nome)
                .bind(&data.email)
                .bind(&data.curso)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into_aluno())
    }

    /// Delete a student.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM alunos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Aluno with id {} not found", id)));
        }

        Ok(())
    }
}
