mod config;
mod errors;
mod ingestion;
mod models;
mod outreach;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingestion::fallback::ReferenceDataset;
use crate::ingestion::pipeline::JobService;
use crate::ingestion::source::{sheet_export_urls, HttpTransport};
use crate::outreach::company::CompanyDirectory;
use crate::outreach::email::OutreachService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Job feed: sheet export chain with the reference dataset behind it
    let attempt_timeout = Duration::from_secs(config.source_timeout_secs);
    let transport = HttpTransport::new(attempt_timeout).context("Failed to build HTTP client")?;
    let fallback = ReferenceDataset::load(config.fallback_jobs_path.as_deref())
        .context("Failed to load reference job dataset")?;
    info!("Reference dataset holds {} jobs", fallback.len());

    let jobs = JobService::new(
        Arc::new(transport),
        sheet_export_urls(&config.spreadsheet_id),
        fallback,
        attempt_timeout,
        Duration::from_secs(config.jobs_cache_ttl_secs),
    );

    // Outreach: company phrases + accomplishment picker
    let companies = CompanyDirectory::load(config.company_profiles_path.as_deref())?;
    let outreach = OutreachService::new(Arc::new(companies), config.email_rng_seed);

    let state = AppState {
        config: config.clone(),
        jobs: Arc::new(jobs),
        outreach: Arc::new(outreach),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
