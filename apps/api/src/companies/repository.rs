use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::company::{CompanyRow, CompanySummary};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const MAX_SEARCH_LIMIT: u32 = 50;

const SUMMARY_COLUMNS: &str = "id, name, slug, industry, location, size, logo";

/// A validated page request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Missing or zero values fall back to page 1 / the default limit; the
    /// limit is capped at `MAX_PAGE_LIMIT`.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(1),
            limit: limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .min(MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let limit = request.limit.max(1) as i64;
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages: (total.max(0) + limit - 1) / limit,
        }
    }
}

pub fn search_limit(limit: Option<u32>) -> u32 {
    limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT)
}

/// Escapes LIKE wildcards so user input only ever matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// One page of companies, optionally filtered by an industry substring, plus
/// the total number of matches.
pub async fn list_companies(
    pool: &PgPool,
    request: PageRequest,
    industry: Option<&str>,
) -> Result<(Vec<CompanySummary>, i64), AppError> {
    let pattern = industry
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(|i| format!("%{}%", escape_like(i)));

    let companies = sqlx::query_as::<_, CompanySummary>(&format!(
        r#"
        SELECT {SUMMARY_COLUMNS}
        FROM companies
        WHERE ($1::text IS NULL OR industry ILIKE $1)
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(&pattern)
    .bind(request.limit as i64)
    .bind(request.offset())
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM companies WHERE ($1::text IS NULL OR industry ILIKE $1)",
    )
    .bind(&pattern)
    .fetch_one(pool)
    .await?;

    Ok((companies, total))
}

/// Case-insensitive name search. Prefix matches sort first.
pub async fn search_companies(
    pool: &PgPool,
    query: &str,
    limit: u32,
) -> Result<Vec<CompanySummary>, AppError> {
    let escaped = escape_like(query);
    Ok(sqlx::query_as::<_, CompanySummary>(&format!(
        r#"
        SELECT {SUMMARY_COLUMNS}
        FROM companies
        WHERE name ILIKE $1
        ORDER BY (name ILIKE $2) DESC, name ASC
        LIMIT $3
        "#
    ))
    .bind(format!("%{escaped}%"))
    .bind(format!("{escaped}%"))
    .bind(limit as i64)
    .fetch_all(pool)
    .await?)
}

pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CompanyRow>, AppError> {
    Ok(
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?,
    )
}

/// Like `get_by_slug`, but a missing company is a 404.
pub async fn require_by_slug(pool: &PgPool, slug: &str) -> Result<CompanyRow, AppError> {
    get_by_slug(pool, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company '{slug}' not found")))
}
