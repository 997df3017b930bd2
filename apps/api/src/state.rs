use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Per-client limiter for resume analysis, backed by Redis.
    pub rate_limiter: RateLimiter,
    /// Contact-form limiter sharing the analysis limiter's connection.
    pub contact_limiter: RateLimiter,
    /// Pluggable analyzer. Default: HeuristicAnalyzer. Swap via ENABLE_LLM_ANALYSIS.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
