//! Fixed-window rate limiters backed by Redis.
//!
//! One counter per scope, client and window. `INCR` and `EXPIRE` go out as a
//! single MULTI/EXEC pipeline so a counter never outlives its window. If Redis
//! is unreachable the request is let through.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::Client as RedisClient;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::errors::AppError;

const KEY_PREFIX: &str = "careercraft:ratelimit";

/// Connection attempts beyond the first before a check gives up.
const CONNECT_RETRIES: usize = 1;

#[derive(Clone)]
pub struct RateLimiter {
    client: RedisClient,
    /// Opened on first use and shared by every limiter derived via `scoped`.
    conn: Arc<OnceCell<ConnectionManager>>,
    scope: &'static str,
    /// Requests allowed per window. 0 disables limiting.
    limit: u64,
    window_secs: u64,
}

impl RateLimiter {
    pub fn new(client: RedisClient, scope: &'static str, limit: u64, window_secs: u64) -> Self {
        Self {
            client,
            conn: Arc::new(OnceCell::new()),
            scope,
            limit,
            window_secs: window_secs.max(1),
        }
    }

    /// A limiter with its own counters and limits on the same connection.
    pub fn scoped(&self, scope: &'static str, limit: u64, window_secs: u64) -> Self {
        Self {
            client: self.client.clone(),
            conn: Arc::clone(&self.conn),
            scope,
            limit,
            window_secs: window_secs.max(1),
        }
    }

    /// Counts one request for `client_key`. Returns `AppError::RateLimited`
    /// once the client exceeds the limit for the current window.
    pub async fn check(&self, client_key: &str) -> Result<(), AppError> {
        if self.limit == 0 {
            return Ok(());
        }

        let now = Utc::now().timestamp().max(0) as u64;
        let (window, retry_after_secs) = window_position(now, self.window_secs);
        let key = counter_key(self.scope, client_key, window);

        let count = match self.increment(&key).await {
            Ok(count) => count,
            Err(e) => {
                warn!(scope = self.scope, "Rate limiter unavailable, allowing request: {e}");
                return Ok(());
            }
        };

        if count > self.limit {
            warn!(scope = self.scope, client = client_key, count, "Rate limit exceeded");
            return Err(AppError::RateLimited { retry_after_secs });
        }
        Ok(())
    }

    async fn connection(&self) -> redis::RedisResult<ConnectionManager> {
        self.conn
            .get_or_try_init(|| {
                ConnectionManager::new_with_backoff(self.client.clone(), 2, 100, CONNECT_RETRIES)
            })
            .await
            .cloned()
    }

    async fn increment(&self, key: &str) -> redis::RedisResult<u64> {
        let mut conn = self.connection().await?;
        // Expire one second after the window closes.
        let ttl = (self.window_secs + 1) as i64;
        let (count,): (u64,) = redis::pipe()
            .atomic()
            .incr(key, 1)
            .expire(key, ttl)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(count)
    }
}

fn counter_key(scope: &str, client_key: &str, window: u64) -> String {
    format!("{KEY_PREFIX}:{scope}:{client_key}:{window}")
}

/// Window index for `now` and the seconds left until that window closes.
pub fn window_position(now_secs: u64, window_secs: u64) -> (u64, u64) {
    let window_secs = window_secs.max(1);
    let index = now_secs / window_secs;
    let retry_after = window_secs - now_secs % window_secs;
    (index, retry_after)
}

/// Identifies the caller by peer address. The first `X-Forwarded-For` hop is
/// used instead only when `trust_proxy` is set, since clients can send any
/// value in that header.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy: bool) -> String {
    let forwarded = if trust_proxy {
        headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    forwarded
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "anonymous".to_string())
}
