//! Pluggable resume analyzers.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` chosen at startup. The
//! heuristic backend is the default and the fallback: the LLM backend returns
//! the heuristic result whenever the model call fails, so an analysis request
//! never fails because of the LLM.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::catalog::{MAX_IMPROVEMENTS, MAX_KEYWORDS, SCORE_MAX, SCORE_MIN};
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::scorer;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::company::CompanyProfile;

/// Which backend produced an analysis. Reported to the client for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Heuristic,
    Llm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutcome {
    pub analysis: AnalysisResult,
    pub backend: Backend,
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        company: &CompanyProfile,
    ) -> Result<AnalysisOutcome, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Offline, deterministic analyzer backed by `scorer::score`.
pub struct HeuristicAnalyzer;

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        company: &CompanyProfile,
    ) -> Result<AnalysisOutcome, AppError> {
        if resume_text.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "Resume text is empty".to_string(),
            ));
        }
        Ok(AnalysisOutcome {
            analysis: scorer::score(resume_text, company),
            backend: Backend::Heuristic,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Asks the LLM for an analysis and reconciles it with the heuristic baseline.
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        company: &CompanyProfile,
    ) -> Result<AnalysisOutcome, AppError> {
        let baseline = HeuristicAnalyzer.analyze(resume_text, company).await?;

        match self.request(resume_text, company).await {
            Ok(raw) => {
                info!(
                    llm_score = raw.overall_score,
                    heuristic_score = baseline.analysis.overall_score,
                    "LLM analysis received"
                );
                Ok(AnalysisOutcome {
                    analysis: reconcile(raw, baseline.analysis),
                    backend: Backend::Llm,
                })
            }
            Err(e) => {
                warn!("LLM analysis failed, falling back to heuristic scorer: {e}");
                Ok(baseline)
            }
        }
    }
}

impl LlmAnalyzer {
    async fn request(
        &self,
        resume_text: &str,
        company: &CompanyProfile,
    ) -> Result<AnalysisResult, AppError> {
        let prompt = build_analysis_prompt(resume_text, company);
        Ok(self
            .0
            .call_json::<AnalysisResult>(&prompt, ANALYSIS_SYSTEM)
            .await?)
    }
}

/// Forces an LLM result into the same invariants as the heuristic one.
///
/// The score is clamped, lists are capped, and empty sections are filled from
/// `baseline`. `resumeDetails` always comes from the baseline since it is read
/// straight from the text rather than judged.
pub fn reconcile(mut llm: AnalysisResult, baseline: AnalysisResult) -> AnalysisResult {
    llm.overall_score = llm
        .overall_score
        .clamp(SCORE_MIN as u32, SCORE_MAX as u32);

    llm.strengths.retain(|s| !s.trim().is_empty());
    if llm.strengths.is_empty() {
        llm.strengths = baseline.strengths;
    }

    if llm.improvements.is_empty() {
        llm.improvements = baseline.improvements;
    }
    llm.improvements.truncate(MAX_IMPROVEMENTS);

    if llm.company_specific.is_empty() {
        llm.company_specific = baseline.company_specific;
    }

    if llm.keyword_suggestions.is_empty() {
        llm.keyword_suggestions = baseline.keyword_suggestions;
    }
    llm.keyword_suggestions.truncate(MAX_KEYWORDS);

    if llm.formatting_tips.is_empty() {
        llm.formatting_tips = baseline.formatting_tips;
    }

    if llm.summary_recommendation.trim().is_empty() {
        llm.summary_recommendation = baseline.summary_recommendation;
    }

    llm.resume_details = baseline.resume_details;
    llm
}
