//! Turns the sheet's CSV export into `JobRecord`s.
//!
//! Expected columns: `CompanyAndTitle, SourceURL, PostedDateRaw, DescriptionRaw`.
//! The first non-blank line is the header. Rows without a headline or URL are skipped.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ingestion::csv_line::tokenize_line;
use crate::ingestion::extract::{parse_headline, tag_job};
use crate::ingestion::normalize::{clean_description, extract_salary, format_posted_date};
use crate::models::job::JobRecord;

/// Parses the export in sheet order (oldest first). Row ids are 1-based line
/// indices after the header, so skipped rows leave gaps.
pub fn parse_jobs_csv(csv_text: &str, now: DateTime<Utc>) -> Vec<JobRecord> {
    let lines: Vec<&str> = csv_text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    lines
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, line)| parse_row(index, line.trim(), now))
        .collect()
}

fn parse_row(index: usize, line: &str, now: DateTime<Utc>) -> Option<JobRecord> {
    let values = tokenize_line(line);
    let column = |i: usize| values.get(i).map(|v| v.trim()).unwrap_or_default();

    let headline_text = column(0);
    let url = column(1);
    let posted_raw = column(2);
    let description_raw = column(3);

    if headline_text.is_empty() || url.is_empty() {
        debug!("Skipping row {index}: missing headline or URL");
        return None;
    }

    let headline = parse_headline(headline_text);
    let tags = tag_job(headline_text);

    let mut description = clean_description(description_raw);
    if description.is_empty() {
        description = format!(
            "Join {} as a {} in {}. Work on exciting projects and contribute to innovative solutions.",
            headline.company, headline.title, headline.location
        );
    }

    Some(JobRecord {
        id: index.to_string(),
        title: headline.title,
        company: headline.company,
        location: headline.location,
        job_type: tags.job_type,
        salary: extract_salary(description_raw),
        description,
        skills: tags.skills,
        posted_date: format_posted_date(posted_raw, now),
        linkedin_url: Some(url.to_string()),
        job_link: Some(url.to_string()),
    })
}
