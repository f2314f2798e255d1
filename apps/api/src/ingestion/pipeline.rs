//! Job ingestion pipeline: fetch, parse and order, memoized and never failing.
//!
//! Flow: first_accepted (URL chain) → parse_jobs_csv → reverse (newest first).
//! Every failure path ends in the reference dataset, so callers always get a
//! non-empty list.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::ingestion::fallback::ReferenceDataset;
use crate::ingestion::parser::parse_jobs_csv;
use crate::ingestion::source::{first_accepted, IngestError, SourceTransport};
use crate::models::job::{JobRecord, JobSummary};

struct CachedJobs {
    jobs: Arc<Vec<JobRecord>>,
    fetched_at: Instant,
}

/// Shared job feed. Holds the memoized result for `cache_ttl` and hands it out
/// read-only to concurrent requests.
pub struct JobService {
    transport: Arc<dyn SourceTransport>,
    source_urls: Vec<String>,
    attempt_timeout: Duration,
    fallback: ReferenceDataset,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedJobs>>,
}

impl JobService {
    pub fn new(
        transport: Arc<dyn SourceTransport>,
        source_urls: Vec<String>,
        fallback: ReferenceDataset,
        attempt_timeout: Duration,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            transport,
            source_urls,
            attempt_timeout,
            fallback,
            cache_ttl,
            cache: RwLock::new(None),
        }
    }

    /// Returns the job feed, newest first. Never empty, never an error.
    pub async fn fetch_jobs(&self) -> Arc<Vec<JobRecord>> {
        if let Some(jobs) = self.fresh_cached(&*self.cache.read().await) {
            return jobs;
        }

        let mut cache = self.cache.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(jobs) = self.fresh_cached(&cache) {
            return jobs;
        }

        let jobs = match self.ingest().await {
            Ok(jobs) => jobs,
            Err(e) => {
                error!("Error fetching jobs from sheet: {e}; serving fallback jobs");
                self.fallback.jobs()
            }
        };

        *cache = Some(CachedJobs {
            jobs: Arc::clone(&jobs),
            fetched_at: Instant::now(),
        });
        jobs
    }

    /// Three-field projection of the current feed.
    pub async fn job_summaries(&self) -> Vec<JobSummary> {
        project_summaries(&self.fetch_jobs().await)
    }

    pub async fn find_job(&self, id: &str) -> Option<JobRecord> {
        self.fetch_jobs().await.iter().find(|j| j.id == id).cloned()
    }

    fn fresh_cached(&self, cache: &Option<CachedJobs>) -> Option<Arc<Vec<JobRecord>>> {
        cache
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.cache_ttl)
            .map(|c| Arc::clone(&c.jobs))
    }

    async fn ingest(&self) -> Result<Arc<Vec<JobRecord>>, IngestError> {
        let source = match first_accepted(
            self.transport.as_ref(),
            &self.source_urls,
            self.attempt_timeout,
        )
        .await
        {
            Ok(source) => source,
            Err(e) => {
                // Reference data is already newest-first; no reversal.
                warn!("{e}; using reference dataset");
                return Ok(self.fallback.jobs());
            }
        };

        let mut jobs = parse_jobs_csv(&source.body, Utc::now());
        if jobs.is_empty() {
            return Err(IngestError::NoRowsParsed);
        }

        // The sheet appends new rows at the bottom.
        jobs.reverse();
        info!("Parsed {} jobs from: {}", jobs.len(), source.url);
        Ok(Arc::new(jobs))
    }
}

/// One summary per job, in feed order. Descriptions are already clean.
pub fn project_summaries(jobs: &[JobRecord]) -> Vec<JobSummary> {
    jobs.iter().map(JobSummary::from).collect()
}
