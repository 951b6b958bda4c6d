//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCursoRepository** - Course CRUD against the `cursos` table
//! - **PgAlunoRepository** - Student persistence and the find-by-curso
//!   query against the `alunos` table

pub mod aluno_repository;
pub mod curso_repository;

pub use aluno_repository::PgAlunoRepository;
pub use curso_repository::PgCursoRepository;
