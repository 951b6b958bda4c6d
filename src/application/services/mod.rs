//! Application Services
//!
//! Services that sit between the HTTP handlers and the repositories.
//!
//! ## Available Services
//!
//! - **CursoService**: Course CRUD delegation

pub mod curso_service;

pub use curso_service::{CursoService, CursoServiceImpl};
