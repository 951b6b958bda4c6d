//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod curso;
pub mod health;
