use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::companies::repository::{
    list_companies, require_by_slug, search_companies, search_limit, PageRequest, Pagination,
};
use crate::errors::AppError;
use crate::models::company::{CompanyRow, CompanySummary, JobPosting};
use crate::state::AppState;

/// Numeric params arrive as strings so that garbage (`?page=abc`) falls back
/// to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct CompanyListResponse {
    pub data: Vec<CompanySummary>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct CompanySearchResponse {
    pub data: Vec<CompanySummary>,
    pub query: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct CompanyJobsResponse {
    pub company: String,
    pub jobs: Vec<JobPosting>,
    pub count: usize,
}

fn parse_number(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse().ok())
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let request = PageRequest::new(
        parse_number(params.page.as_deref()),
        parse_number(params.limit.as_deref()),
    );
    let (data, total) = list_companies(&state.db, request, params.industry.as_deref()).await?;
    Ok(Json(CompanyListResponse {
        data,
        pagination: Pagination::new(request, total),
    }))
}

/// GET /api/v1/companies/search
pub async fn handle_search_companies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<CompanySearchResponse>, AppError> {
    let query = params.q.as_deref().unwrap_or("").trim().to_string();
    if query.is_empty() {
        return Ok(Json(CompanySearchResponse {
            data: vec![],
            query,
            count: 0,
        }));
    }

    let limit = search_limit(parse_number(params.limit.as_deref()));
    let data = search_companies(&state.db, &query, limit).await?;
    Ok(Json(CompanySearchResponse {
        count: data.len(),
        data,
        query,
    }))
}

/// GET /api/v1/companies/:slug
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CompanyRow>, AppError> {
    Ok(Json(require_by_slug(&state.db, &slug).await?))
}

/// GET /api/v1/companies/:slug/jobs
pub async fn handle_company_jobs(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CompanyJobsResponse>, AppError> {
    let company = require_by_slug(&state.db, &slug).await?;
    let jobs = company.jobs.0;
    Ok(Json(CompanyJobsResponse {
        company: company.name,
        count: jobs.len(),
        jobs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_is_lenient() {
        assert_eq!(parse_number(Some("3")), Some(3));
        assert_eq!(parse_number(Some(" 7 ")), Some(7));
        assert_eq!(parse_number(Some("abc")), None);
        assert_eq!(parse_number(Some("-1")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn test_jobs_response_shape() {
        let response = CompanyJobsResponse {
            company: "Amazon".to_string(),
            jobs: vec![JobPosting {
                title: "SDE I".to_string(),
                employment_type: Some("Full-time".to_string()),
                ..Default::default()
            }],
            count: 1,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["company"], "Amazon");
        assert_eq!(value["count"], 1);
        assert_eq!(value["jobs"][0]["type"], "Full-time");
    }
}
