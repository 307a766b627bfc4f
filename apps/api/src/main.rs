mod analysis;
mod config;
mod document;
mod errors;
mod models;
mod render;
mod routes;
mod schema;
mod state;
mod storage;
mod templates;
mod workflow;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::HttpTextAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::HttpResumeTextSource;

/// Default log directive when RUST_LOG is unset. Tracing targets use the
/// module path, so the package name's hyphen must be an underscore here.
fn default_filter_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // A malformed template catalog is a configuration error, fatal here
    // rather than surfacing per render.
    templates::verify_registry()?;
    info!("Template registry verified ({} templates)", templates::all().len());

    // External-service clients: one attempt per call, no retries owned here.
    let analyzer = Arc::new(HttpTextAnalyzer::new(
        config.analysis_service_url.clone(),
        config.analysis_api_key.clone(),
    ));
    info!("Text analysis client initialized");

    let resumes = Arc::new(HttpResumeTextSource::new(
        config.resume_store_url.clone(),
        config.resume_store_api_key.clone(),
    ));
    info!("Resume store client initialized");

    // Build app state
    let state = AppState {
        config: config.clone(),
        analyzer,
        resumes,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_directive_matches_crate_target() {
        let directive = default_filter_directive("info");
        assert_eq!(directive, "vitae_api=info");
        // A hyphenated target would match nothing and silence all logs.
        assert!(!directive.contains('-'));
    }
}
