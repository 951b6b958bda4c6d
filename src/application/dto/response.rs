//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::Curso;

/// Course response
#[derive(Debug, Serialize)]
pub struct CursoResponse {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
}

impl From<Curso> for CursoResponse {
    fn from(curso: Curso) -> Self {
        Self {
            id: curso.id,
            nome: curso.nome,
            descricao: curso.descricao,
        }
    }
}
