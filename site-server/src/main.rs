//! SafeScan Site Backend Server
//!
//! API backend for the SafeScan marketing site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SAFESCAN SITE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────┐  ┌────────────────────────┐ │
//! │  │  API      │  │  Scan      │  │  Outbound Clients      │ │
//! │  │  Gateway  │  │  Engine    │  │  (breach DB, content   │ │
//! │  │  (Axum)   │  │  (pure)    │  │   generator)           │ │
//! │  └─────┬─────┘  └─────┬──────┘  └────────────┬───────────┘ │
//! │        └──────────────┼──────────────────────┘             │
//! │                       ▼                                    │
//! │                ┌─────────────┐                             │
//! │                │ PostgreSQL  │                             │
//! │                └─────────────┘                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod breach;
mod config;
mod db;
mod error;
mod handlers;
mod i18n;
mod models;
mod scheduler;

use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "safescan_site=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("SafeScan site server starting...");
    tracing::info!("Database: {}", config.database_url.split('@').last().unwrap_or("***"));

    // Translation catalogs are validated here; a broken catalog fails boot
    let translations = i18n::Translations::load(&config.default_locale)
        .expect("Translation catalogs failed validation");

    // Initialize database pool
    let pool = db::create_pool(&config.database_url).await
        .expect("Failed to create database pool");

    // Run migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await
        .expect("Failed to run migrations");

    // Build application state
    let state = AppState {
        pool,
        breach: breach::BreachClient::new(&config.breach_api_base, config.breach_api_key.clone()),
        http: reqwest::Client::new(),
        translations: Arc::new(translations),
        content_executing: Arc::new(AtomicBool::new(false)),
        config: config.clone(),
    };

    if !state.breach.is_configured() {
        tracing::warn!("BREACH_API_KEY not set; breach checks will fail");
    }

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: config::Config,
    pub translations: Arc<i18n::Translations>,
    pub breach: breach::BreachClient,
    pub http: reqwest::Client,
    /// The content pipeline's is_executing flag
    pub content_executing: Arc<AtomicBool>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Everything is public; the content trigger optionally checks a bearer
    // token inside its handler
    Router::new()
        .route("/health", get(handlers::health::check))

        // Scan
        .route("/api/v1/scan", post(handlers::scan::run))
        .route("/api/v1/scan/:fingerprint", get(handlers::scan::get))

        // Breach checks
        .route("/api/v1/breach/check", post(handlers::breach::check))

        // Contact form
        .route("/api/v1/contact", post(handlers::contact::submit))

        // Marketing content
        .route("/api/v1/plans", get(handlers::marketing::plans))
        .route("/api/v1/testimonials", get(handlers::marketing::testimonials))

        // Content pipeline
        .route("/api/v1/content/run", post(handlers::content::run))
        .route("/api/v1/content/status", get(handlers::content::status))

        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
