use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Multipart, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::Backend;
use crate::analysis::models::AnalysisResult;
use crate::companies::repository::require_by_slug;
use crate::errors::AppError;
use crate::extraction::{extract_text, Upload};
use crate::models::company::CompanyProfile;
use crate::rate_limit::client_key;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CompanyRef {
    pub name: String,
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub company: CompanyRef,
    pub analysis: AnalysisResult,
    pub backend: Backend,
}

/// The parts we care about from the analysis form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<Upload>,
    company_slug: Option<String>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            match field.name().unwrap_or("") {
                "resume" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read resume file: {e}")))?;
                    form.resume = Some(Upload {
                        file_name,
                        content_type,
                        data,
                    });
                }
                "company_slug" | "companySlug" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read company_slug: {e}")))?;
                    form.company_slug = Some(value.trim().to_string());
                }
                // Unknown parts are drained by the next `next_field` call.
                _ => {}
            }
        }
        Ok(form)
    }

    fn validate(self) -> Result<(Upload, String), AppError> {
        let resume = self
            .resume
            .filter(|upload| !upload.data.is_empty())
            .ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;
        let slug = self
            .company_slug
            .filter(|slug| !slug.is_empty())
            .ok_or_else(|| AppError::Validation("company_slug is required".to_string()))?;
        Ok((resume, slug))
    }
}

/// POST /api/v1/resumes/analyze
///
/// Multipart form: `resume` (PDF or plain-text file) and `company_slug`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (upload, slug) = AnalyzeForm::read(multipart).await?.validate()?;

    let client = client_key(
        &headers,
        connect_info.map(|ConnectInfo(addr)| addr),
        state.config.trust_proxy,
    );
    state.rate_limiter.check(&client).await?;

    let company = CompanyProfile::from(require_by_slug(&state.db, &slug).await?);
    let resume_text = extract_text(&upload).await?;

    let outcome = state.analyzer.analyze(&resume_text, &company).await?;
    info!(
        company = %slug,
        score = outcome.analysis.overall_score,
        backend = ?outcome.backend,
        "Resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        company: CompanyRef {
            name: company.name,
            industry: company.industry,
        },
        analysis: outcome.analysis,
        backend: outcome.backend,
    }))
}
