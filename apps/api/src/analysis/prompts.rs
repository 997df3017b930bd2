// LLM prompt constants for resume analysis.

use crate::models::company::CompanyProfile;

/// Resume text beyond this many characters is cut before prompting.
pub const MAX_PROMPT_RESUME_CHARS: usize = 12_000;

/// System prompt for resume analysis. Enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert technical recruiter and career coach. \
    You evaluate resumes against a specific target company. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Never invent facts that are not in the resume.";

/// Analysis prompt template. Replace `{company_name}`, `{industry}`,
/// `{company_features}`, `{open_roles}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for a candidate applying to {company_name} ({industry}).

What {company_name} highlights about itself:
{company_features}

Open roles at {company_name}:
{open_roles}

Return a JSON object with this EXACT schema (camelCase keys, no extra fields):
{
  "overallScore": 72,
  "strengths": ["Specific strength grounded in the resume"],
  "improvements": [
    {"category": "Impact & Results", "issue": "What is missing", "suggestion": "Concrete fix", "priority": "high"}
  ],
  "companySpecific": [
    {"point": "What to emphasize for this company", "reason": "Why this company cares"}
  ],
  "keywordSuggestions": ["AWS", "Java"],
  "formattingTips": ["One concrete layout tip"],
  "summaryRecommendation": "Two or three sentences of overall advice."
}

Rules:
- overallScore is an integer between 35 and 88. Reserve 80+ for resumes that are ready to submit.
- priority is one of "high", "medium", "low".
- At most 4 improvements and at most 6 keywordSuggestions.
- Every strength must cite something that is actually in the resume.

RESUME:
{resume_text}"#;

/// Fills `ANALYSIS_PROMPT_TEMPLATE` for one resume and company.
pub fn build_analysis_prompt(resume_text: &str, company: &CompanyProfile) -> String {
    let industry = if company.industry.trim().is_empty() {
        "industry not specified"
    } else {
        company.industry.trim()
    };

    let features = if company.features.is_empty() {
        "- (none listed)".to_string()
    } else {
        company
            .features
            .iter()
            .map(|f| format!("- {f}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let roles = if company.jobs.is_empty() {
        "- (none listed)".to_string()
    } else {
        company
            .jobs
            .iter()
            .map(|job| {
                let requirements = if job.requirements.is_empty() {
                    String::new()
                } else {
                    format!(" (requires: {})", job.requirements.join(", "))
                };
                format!("- {}{requirements}", job.title)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{company_name}", company.name.trim())
        .replace("{industry}", industry)
        .replace("{company_features}", &features)
        .replace("{open_roles}", &roles)
        .replace("{resume_text}", &truncate_chars(resume_text, MAX_PROMPT_RESUME_CHARS))
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
