use axum::{
    extract::{Path, Query},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::templates::catalog::{self, ResumeTemplate};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub role: Option<String>,
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub data: Vec<&'static ResumeTemplate>,
    pub count: usize,
}

fn require(id: &str) -> Result<&'static ResumeTemplate, AppError> {
    catalog::find(id).ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(Query(params): Query<TemplateQuery>) -> Json<TemplateListResponse> {
    let data = catalog::by_role(params.role.as_deref());
    Json(TemplateListResponse {
        count: data.len(),
        data,
    })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    Path(id): Path<String>,
) -> Result<Json<&'static ResumeTemplate>, AppError> {
    Ok(Json(require(&id)?))
}

/// GET /api/v1/templates/:id/download
pub async fn handle_download_template(
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let template = require(&id)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", template.file_name()),
            ),
        ],
        template.render(),
    ))
}
