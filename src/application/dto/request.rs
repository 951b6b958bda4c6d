//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

use crate::domain::CursoData;

/// Create course request. Any `id` sent by the client is ignored; the
/// store assigns identifiers.
#[derive(Debug, Deserialize)]
pub struct CreateCursoRequest {
    pub nome: String,
    pub descricao: String,
}

/// Update course request. Only `nome` and `descricao` are copied onto the
/// stored record; any other field in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateCursoRequest {
    pub nome: String,
    pub descricao: String,
}

impl From<CreateCursoRequest> for CursoData {
    fn from(body: CreateCursoRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
        }
    }
}

impl From<UpdateCursoRequest> for CursoData {
    fn from(body: UpdateCursoRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
        }
    }
}
