use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const DEFAULT_SALARY: &str = "Competitive salary";

/// A single job posting, as produced by the ingestion pipeline or the fallback dataset.
///
/// Every field has a default so partially-specified records (e.g. from a client
/// request body) still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_link: Option<String>,
}

impl Default for JobRecord {
    fn default() -> Self {
        JobRecord {
            id: String::new(),
            title: String::new(),
            company: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            job_type: DEFAULT_JOB_TYPE.to_string(),
            salary: DEFAULT_SALARY.to_string(),
            description: String::new(),
            skills: Vec::new(),
            posted_date: String::new(),
            linkedin_url: None,
            job_link: None,
        }
    }
}

/// Lightweight three-field view of a job, served by `/api/job-summaries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub company_name: String,
    pub location: String,
    pub job_description: String,
}

impl From<&JobRecord> for JobSummary {
    fn from(job: &JobRecord) -> Self {
        JobSummary {
            company_name: job.company.clone(),
            location: job.location.clone(),
            job_description: job.description.clone(),
        }
    }
}
