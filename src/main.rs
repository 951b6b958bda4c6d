//! # Curso API
//!
//! A CRUD REST API for managing course and student records.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use curso_api::config::Settings;
use curso_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    curso_api::telemetry::init_tracing();

    info!("Starting Curso API...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
