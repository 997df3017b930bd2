use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A single open position, stored inline on the company row as JSONB.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Full-time, Part-time, Contract, Internship
    #[serde(rename = "type", default)]
    pub employment_type: Option<String>,
    /// Entry, Mid, Senior
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub domain: Option<String>,
    pub logo: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub founded: Option<String>,
    pub features: Vec<String>,
    pub jobs: Json<Vec<JobPosting>>,
    pub created_at: DateTime<Utc>,
}

/// List-view projection of a company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub logo: Option<String>,
}

/// The read-only company view handed to the resume analyzers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub features: Vec<String>,
    pub jobs: Vec<JobPosting>,
}

impl CompanyProfile {
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            features: Vec::new(),
            jobs: Vec::new(),
        }
    }
}

impl From<CompanyRow> for CompanyProfile {
    fn from(row: CompanyRow) -> Self {
        Self {
            name: row.name,
            industry: row.industry.unwrap_or_default(),
            features: row.features,
            jobs: row.jobs.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_row_defaults_missing_industry() {
        let row = CompanyRow {
            id: Uuid::new_v4(),
            name: "Initech".to_string(),
            slug: "initech".to_string(),
            domain: None,
            logo: None,
            industry: None,
            description: None,
            size: None,
            location: None,
            founded: None,
            features: vec!["Flexible hours".to_string()],
            jobs: Json(vec![JobPosting {
                title: "TPS Report Analyst".to_string(),
                ..Default::default()
            }]),
            created_at: Utc::now(),
        };

        let profile = CompanyProfile::from(row);
        assert_eq!(profile.name, "Initech");
        assert_eq!(profile.industry, "");
        assert_eq!(profile.features.len(), 1);
        assert_eq!(profile.jobs[0].title, "TPS Report Analyst");
    }

    #[test]
    fn test_job_posting_reads_type_field() {
        let json = r#"{"title": "SDE II", "type": "Full-time", "requirements": ["Java"]}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.employment_type.as_deref(), Some("Full-time"));
        assert_eq!(job.requirements, vec!["Java".to_string()]);
        assert!(job.posted_date.is_none());
    }
}
