//! Source fetching: ordered URL fallback chain over a pluggable transport.
//!
//! Default: `HttpTransport` (reqwest, follows redirects, per-attempt timeout).
//! Tests inject their own `SourceTransport` to exercise the chain offline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; JobMatcher/1.0)";
const ACCEPT: &str = "text/csv,text/plain,*/*";
/// Bodies this short are treated as empty exports.
const MIN_BODY_CHARS: usize = 50;
const HTML_ERROR_MARKER: &str = "<!DOCTYPE html";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source returned status {0}")]
    Status(u16),

    #[error("Source body too short ({0} chars)")]
    BodyTooShort(usize),

    #[error("Source returned an HTML page instead of CSV")]
    HtmlErrorPage,

    #[error("Source attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("No source URL returned usable CSV")]
    NoUsableSource,

    #[error("No valid jobs parsed from CSV")]
    NoRowsParsed,

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Dataset is empty")]
    EmptyDataset,
}

/// Raw response of a single source attempt.
#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

/// The source transport trait. Implement this to fetch the sheet export from
/// somewhere other than the network.
#[async_trait]
pub trait SourceTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<SourceResponse, IngestError>;
}

/// reqwest-backed transport with the identifying headers the sheet export expects.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, IngestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SourceTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<SourceResponse, IngestError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SourceResponse { status, body })
    }
}

/// The three export URLs of a published spreadsheet, in priority order.
pub fn sheet_export_urls(spreadsheet_id: &str) -> Vec<String> {
    let base = format!("https://docs.google.com/spreadsheets/d/{spreadsheet_id}");
    vec![
        format!("{base}/gviz/tq?tqx=out:csv"),
        format!("{base}/export?format=csv"),
        format!("{base}/export?format=csv&id={spreadsheet_id}&gid=0"),
    ]
}

/// Accepts a response only if it looks like a real CSV export.
pub fn accept_response(response: SourceResponse) -> Result<String, IngestError> {
    if !(200..300).contains(&response.status) {
        return Err(IngestError::Status(response.status));
    }
    let chars = response.body.chars().count();
    if chars <= MIN_BODY_CHARS {
        return Err(IngestError::BodyTooShort(chars));
    }
    if response.body.contains(HTML_ERROR_MARKER) {
        return Err(IngestError::HtmlErrorPage);
    }
    Ok(response.body)
}

/// A source body together with the URL that produced it.
#[derive(Debug, Clone)]
pub struct AcceptedSource {
    pub url: String,
    pub body: String,
}

/// Tries each URL in order (fetch → validate) and stops at the first accepted body.
/// Every rejected attempt is logged; `NoUsableSource` means all of them failed.
pub async fn first_accepted(
    transport: &dyn SourceTransport,
    urls: &[String],
    attempt_timeout: Duration,
) -> Result<AcceptedSource, IngestError> {
    for url in urls {
        info!("Attempting to fetch jobs from: {url}");

        let attempt = match tokio::time::timeout(attempt_timeout, transport.get(url)).await {
            Ok(result) => result.and_then(accept_response),
            Err(_) => Err(IngestError::Timeout(attempt_timeout)),
        };

        match attempt {
            Ok(body) => {
                info!("Fetched {} bytes from: {url}", body.len());
                return Ok(AcceptedSource {
                    url: url.clone(),
                    body,
                });
            }
            Err(e) => warn!("Source {url} rejected: {e}"),
        }
    }

    Err(IngestError::NoUsableSource)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub(crate) const VALID_CSV: &str = "Title,Link,Date,Description\n\
        \"Acme hiring Rust Engineer in Berlin\",https://jobs.example/1,3 days ago,<p>Ship it</p>\n";

    /// Scripted transport: per-URL canned responses, records every call.
    pub(crate) struct ScriptedTransport {
        responses: HashMap<String, SourceResponse>,
        pub(crate) calls: Mutex<Vec<String>>,
        delay: Option<Duration>,
    }

    impl ScriptedTransport {
        pub(crate) fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        pub(crate) fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                SourceResponse {
                    status,
                    body: body.to_string(),
                },
            );
            self
        }

        pub(crate) fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SourceTransport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<SourceResponse, IngestError> {
            self.calls.lock().unwrap().push(url.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.responses
                .get(url)
                .cloned()
                .ok_or(IngestError::Status(404))
        }
    }

    fn urls() -> Vec<String> {
        vec!["u1".to_string(), "u2".to_string(), "u3".to_string()]
    }

    #[test]
    fn test_sheet_export_urls_order() {
        let urls = sheet_export_urls("abc");
        assert_eq!(urls.len(), 3);
        assert!(urls[0].ends_with("/d/abc/gviz/tq?tqx=out:csv"));
        assert!(urls[1].ends_with("/d/abc/export?format=csv"));
        assert!(urls[2].ends_with("/d/abc/export?format=csv&id=abc&gid=0"));
    }

    #[test]
    fn test_accept_rejects_non_success_status() {
        let r = SourceResponse {
            status: 500,
            body: VALID_CSV.to_string(),
        };
        assert!(matches!(accept_response(r), Err(IngestError::Status(500))));
    }

    #[test]
    fn test_accept_rejects_short_body() {
        let r = SourceResponse {
            status: 200,
            body: "a,b\n1,2".to_string(),
        };
        assert!(matches!(accept_response(r), Err(IngestError::BodyTooShort(7))));
    }

    #[test]
    fn test_accept_rejects_html_page() {
        let r = SourceResponse {
            status: 200,
            body: format!("<!DOCTYPE html><html><body>{}</body></html>", "x".repeat(80)),
        };
        assert!(matches!(accept_response(r), Err(IngestError::HtmlErrorPage)));
    }

    #[test]
    fn test_accept_passes_csv() {
        let r = SourceResponse {
            status: 200,
            body: VALID_CSV.to_string(),
        };
        assert_eq!(accept_response(r).unwrap(), VALID_CSV);
    }

    #[tokio::test]
    async fn test_first_accepted_short_circuits_on_first_success() {
        let transport = ScriptedTransport::new()
            .respond("u1", 200, VALID_CSV)
            .respond("u2", 200, VALID_CSV);

        let source = first_accepted(&transport, &urls(), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(source.url, "u1");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_first_accepted_falls_through_in_priority_order() {
        let transport = ScriptedTransport::new()
            .respond("u1", 200, "<!DOCTYPE html><html>sign in to continue ......................................</html>")
            .respond("u2", 503, VALID_CSV)
            .respond("u3", 200, VALID_CSV);

        let source = first_accepted(&transport, &urls(), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(source.url, "u3");
        assert_eq!(*transport.calls.lock().unwrap(), urls());
    }

    #[tokio::test]
    async fn test_first_accepted_reports_exhaustion() {
        let transport = ScriptedTransport::new();
        let result = first_accepted(&transport, &urls(), Duration::from_secs(5)).await;
        assert!(matches!(result, Err(IngestError::NoUsableSource)));
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_attempt_times_out_and_chain_continues() {
        let transport = ScriptedTransport::new()
            .respond("u1", 200, VALID_CSV)
            .delayed(Duration::from_secs(30));

        let result = first_accepted(&transport, &urls(), Duration::from_secs(1)).await;
        assert!(matches!(result, Err(IngestError::NoUsableSource)));
        assert_eq!(transport.call_count(), 3);
    }
}
