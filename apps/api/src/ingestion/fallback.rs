//! Reference dataset served whenever live ingestion fails.
//!
//! The default set ships inside the binary (`data/fallback_jobs.json`) and can
//! be replaced with a JSON file at startup. It is stored newest-first.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::ingestion::source::IngestError;
use crate::models::job::JobRecord;

const EMBEDDED_FALLBACK_JOBS: &str = include_str!("../../data/fallback_jobs.json");

/// A non-empty, immutable list of jobs.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    jobs: Arc<Vec<JobRecord>>,
}

impl ReferenceDataset {
    pub fn from_jobs(jobs: Vec<JobRecord>) -> Result<Self, IngestError> {
        if jobs.is_empty() {
            return Err(IngestError::EmptyDataset);
        }
        Ok(Self {
            jobs: Arc::new(jobs),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, IngestError> {
        Self::from_jobs(serde_json::from_str(json)?)
    }

    pub fn embedded() -> Result<Self, IngestError> {
        Self::from_json(EMBEDDED_FALLBACK_JOBS)
    }

    /// Loads the dataset from `path` when given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self, IngestError> {
        match path {
            Some(path) => {
                let dataset = Self::from_json(&std::fs::read_to_string(path)?)?;
                info!(
                    "Loaded {} fallback jobs from {}",
                    dataset.len(),
                    path.display()
                );
                Ok(dataset)
            }
            None => Self::embedded(),
        }
    }

    pub fn jobs(&self) -> Arc<Vec<JobRecord>> {
        Arc::clone(&self.jobs)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_embedded_dataset_is_valid() {
        let dataset = ReferenceDataset::embedded().unwrap();
        assert_eq!(dataset.len(), 10);

        let jobs = dataset.jobs();
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len(), "ids must be unique");
        assert_eq!(jobs[0].company, "OpenAI");
        assert!(jobs.iter().all(|j| !j.skills.is_empty()));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            ReferenceDataset::from_json("[]"),
            Err(IngestError::EmptyDataset)
        ));
    }

    #[test]
    fn test_malformed_dataset_rejected() {
        assert!(matches!(
            ReferenceDataset::from_json("{not json"),
            Err(IngestError::Decode(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "f1", "title": "SRE", "company": "Fixture Co", "skills": ["Go"]}}]"#
        )
        .unwrap();

        let dataset = ReferenceDataset::load(Some(file.path())).unwrap();
        assert_eq!(dataset.len(), 1);
        let jobs = dataset.jobs();
        assert_eq!(jobs[0].company, "Fixture Co");
        assert_eq!(jobs[0].location, "Remote");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = ReferenceDataset::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }
}
