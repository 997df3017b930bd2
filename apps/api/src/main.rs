mod analysis;
mod companies;
mod config;
mod contacts;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod rate_limit;
mod routes;
mod state;
mod templates;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{HeuristicAnalyzer, LlmAnalyzer, ResumeAnalyzer};
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerCraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    if config.seed_companies {
        companies::seed::seed_companies(&db)
            .await
            .context("Failed to seed companies")?;
    }

    // Initialize Redis (connections are opened per rate-limit check)
    let redis = redis::Client::open(config.redis_url.clone()).context("Invalid REDIS_URL")?;
    let rate_limiter = RateLimiter::new(
        redis,
        "analyze",
        config.analysis_rate_limit,
        config.analysis_rate_window_secs,
    );
    let contact_limiter = rate_limiter.scoped(
        "contact",
        config.contact_rate_limit,
        config.contact_rate_window_secs,
    );
    info!(
        "Analysis rate limit: {} per {}s, contact: {} per {}s",
        config.analysis_rate_limit,
        config.analysis_rate_window_secs,
        config.contact_rate_limit,
        config.contact_rate_window_secs
    );
    if config.trust_proxy {
        info!("TRUST_PROXY is on: rate limits key on X-Forwarded-For");
    }

    let analyzer = build_analyzer(&config)?;

    let state = AppState {
        db,
        config: config.clone(),
        rate_limiter,
        contact_limiter,
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// HeuristicAnalyzer unless ENABLE_LLM_ANALYSIS is on and a key is configured.
fn build_analyzer(config: &Config) -> Result<Arc<dyn ResumeAnalyzer>> {
    match (&config.anthropic_api_key, config.llm_analysis_enabled()) {
        (Some(key), true) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("Resume analyzer: LLM (model: {}) with heuristic fallback", llm_client::MODEL);
            Ok(Arc::new(LlmAnalyzer(llm)))
        }
        _ => {
            if config.enable_llm_analysis {
                warn!("ENABLE_LLM_ANALYSIS is set but ANTHROPIC_API_KEY is missing; using heuristic analyzer");
            }
            info!("Resume analyzer: heuristic");
            Ok(Arc::new(HeuristicAnalyzer))
        }
    }
}
