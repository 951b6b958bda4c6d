//! # Curso API Library
//!
//! This crate provides a CRUD REST backend for course and student records:
//! - RESTful HTTP API endpoints under `/api/cursos`
//! - PostgreSQL for persistent storage via sqlx
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Delegation services and DTOs
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP handlers, routes, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! curso_api/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and traits
//! +-- application/   Delegation services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Entities and data access contracts
pub mod domain;

// Application layer - Delegation services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and routes
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
