//! Wire types for resume analysis. Field names are the JSON contract the
//! browser client reads, hence camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub issue: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPoint {
    pub point: String,
    pub reason: String,
}

/// Facts pulled straight from the resume text, independent of scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDetails {
    /// Two decimals on a 0-10 scale, or null.
    pub cgpa: Option<String>,
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub skill_count: usize,
    pub has_linked_in: bool,
    pub has_github: bool,
    pub has_metrics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
    #[serde(default)]
    pub company_specific: Vec<CompanyPoint>,
    #[serde(default)]
    pub keyword_suggestions: Vec<String>,
    #[serde(default)]
    pub formatting_tips: Vec<String>,
    #[serde(default)]
    pub summary_recommendation: String,
    #[serde(default)]
    pub resume_details: ResumeDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_result_wire_names() {
        let result = AnalysisResult {
            overall_score: 70,
            strengths: vec!["Clear layout".to_string()],
            improvements: vec![Improvement {
                category: "Impact & Results".to_string(),
                issue: "Missing quantifiable achievements".to_string(),
                suggestion: "Add numbers".to_string(),
                priority: Priority::High,
            }],
            company_specific: vec![CompanyPoint {
                point: "p".to_string(),
                reason: "r".to_string(),
            }],
            keyword_suggestions: vec!["AWS".to_string()],
            formatting_tips: vec![],
            summary_recommendation: "Solid".to_string(),
            resume_details: ResumeDetails {
                cgpa: Some("8.70".to_string()),
                degree: None,
                institution: None,
                skill_count: 6,
                has_linked_in: true,
                has_github: false,
                has_metrics: true,
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["overallScore"], 70);
        assert_eq!(value["improvements"][0]["priority"], "high");
        assert_eq!(value["companySpecific"][0]["point"], "p");
        assert_eq!(value["keywordSuggestions"][0], "AWS");
        assert_eq!(value["summaryRecommendation"], "Solid");
        assert_eq!(value["resumeDetails"]["cgpa"], "8.70");
        assert_eq!(value["resumeDetails"]["skillCount"], 6);
        assert_eq!(value["resumeDetails"]["hasLinkedIn"], true);
        assert_eq!(value["resumeDetails"]["hasGithub"], false);
        assert_eq!(value["resumeDetails"]["hasMetrics"], true);
        assert_eq!(value["resumeDetails"]["degree"], serde_json::Value::Null);
    }

    #[test]
    fn test_partial_llm_payload_deserializes_with_defaults() {
        let value = json!({
            "overallScore": 77,
            "strengths": ["Strong cloud background"],
            "summaryRecommendation": "Apply."
        });
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.overall_score, 77);
        assert!(result.improvements.is_empty());
        assert_eq!(result.resume_details, ResumeDetails::default());
    }
}
