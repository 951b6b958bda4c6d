//! Application Startup
//!
//! Application building and server initialization. All collaborators are
//! wired here at process start: pool, repositories, and services are
//! constructed once and handed to the router through `AppState`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{CursoService, CursoServiceImpl};
use crate::config::Settings;
use crate::domain::AlunoRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgAlunoRepository, PgCursoRepository};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub curso_service: Arc<dyn CursoService>,
    pub aluno_repo: Arc<dyn AlunoRepository>,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool and bring the schema up to date
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        // Wire repositories and services
        let curso_repo = Arc::new(PgCursoRepository::new(db.clone()));
        let curso_service: Arc<dyn CursoService> = Arc::new(CursoServiceImpl::new(curso_repo));
        let aluno_repo: Arc<dyn AlunoRepository> = Arc::new(PgAlunoRepository::new(db.clone()));

        health::init_server_start();

        // Create app state
        let state = AppState {
            db,
            curso_service,
            aluno_repo,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
