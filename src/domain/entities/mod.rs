//! # Domain Entities
//!
//! Core domain entities for the course catalog. All entities map directly
//! to their corresponding database tables.
//!
//! ## Entities
//!
//! - **Curso**: A course, the only fully CRUD-exposed resource
//! - **Aluno**: A student; defined and persisted but exposed only at the
//!   repository level
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining its data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod aluno;
mod curso;

pub use aluno::{Aluno, AlunoData, AlunoRepository};
pub use curso::{Curso, CursoData, CursoRepository};
