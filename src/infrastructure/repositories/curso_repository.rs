//! Curso Repository Implementation
//!
//! PostgreSQL implementation of the CursoRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Curso, CursoData, CursoRepository};
use crate::shared::error::AppError;

/// Database row representation matching the cursos table schema.
#[derive(Debug, sqlx::FromRow)]
struct CursoRow {
    id: i64,
    nome: String,
    descricao: String,
}

impl CursoRow {
    /// Convert database row to domain Curso entity.
    fn into_curso(self) -> Curso {
        Curso {
            id: self.id,
            nome: self.nome,
            descricao: self.descricao,
        }
    }
}

/// PostgreSQL curso repository implementation.
///
/// Provides CRUD operations for courses against the `cursos` table.
#[derive(Clone)]
pub struct PgCursoRepository {
    pool: PgPool,
}

impl PgCursoRepository {
    /// Create a new PgCursoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursoRepository for PgCursoRepository {
    /// List every stored course.
    async fn find_all(&self) -> Result<Vec<Curso>, AppError> {
        let rows = sqlx::query_as::<_, CursoRow>(
            r#"
            SELECT id, nome, descricao
            FROM cursos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_curso()).collect())
    }

    /// Find a course by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, AppError> {
        let row = sqlx::query_as::<_, CursoRow>(
            r#"
            SELECT id, nome, descricao
            FROM cursos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_curso()))
    }

    /// Persist a course: insert with a store-assigned identifier when none
    /// is supplied, write at the supplied identifier otherwise.
    async fn save(&self, id: Option<i64>, data: &CursoData) -> Result<Curso, AppError> {
        let row = match id {
            Some(id) => {
                sqlx::query_as::<_, CursoRow>(
                    r#"
                    INSERT INTO cursos (id, nome, descricao)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO UPDATE
                    SET nome = EXCLUDED.nome,
                        descricao = EXCLUDED.descricao
                    RETURNING id, nome, descricao
                    "#,
                )
                .bind(id)
                .bind(&data.nome)
                .bind(&data.descricao)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CursoRow>(
                    r#"
                    INSERT INTO cursos (nome, descricao)
                    VALUES ($1, $2)
                    RETURNING id, nome, descricao
                    "#,
                )
                .bind(&data.nome)
                .bind(&data.descricao)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into_curso())
    }

    /// Delete a course.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cursos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Curso with id {} not found", id)));
        }

        Ok(())
    }
}
