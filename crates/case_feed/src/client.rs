use crate::{
    error::{FeedError, FeedResult},
    record::TimeSeries,
};
use std::time::Duration;
use tracing::Instrument;

/// Daily new cases by publish date for England, newest first.
pub const DEFAULT_ENDPOINT: &str = concat!(
    "https://api.coronavirus.data.gov.uk/v1/data?",
    "filters=areaType=nation;areaName=england&",
    r#"structure={"date":"date","newCases":"newCasesByPublishDate"}"#,
);

/// Upper bound on the whole exchange: status line and body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A single-shot HTTP client for the case series.
///
/// Every call to [`CaseFeed::fetch`] makes exactly one request. Failures are
/// returned to the caller untouched; nothing is retried.
pub struct CaseFeed {
    http: reqwest::Client,
    config: FeedConfig,
}

impl CaseFeed {
    pub fn new(config: FeedConfig) -> FeedResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetches the configured endpoint.
    pub async fn fetch(&self) -> FeedResult<TimeSeries> {
        self.fetch_url(&self.config.endpoint).await
    }

    /// Fetches `url`, which must name the series endpoint in full.
    pub async fn fetch_url(&self, url: &str) -> FeedResult<TimeSeries> {
        let timeout = self.config.timeout;
        let span = tracing::info_span!("fetch", url, timeout = ?timeout);

        async move {
            let result = match tokio::time::timeout(timeout, self.get(url)).await {
                Ok(result) => result,
                Err(_) => Err(FeedError::Timeout(timeout)),
            };

            match &result {
                Ok(series) => tracing::debug!(records = series.len(), "Fetched case series"),
                Err(e) => tracing::warn!(kind = e.kind(), error = %e, "Case series fetch failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn get(&self, url: &str) -> FeedResult<TimeSeries> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(FeedError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_owned(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        TimeSeries::from_json(&body)
    }

    fn classify(&self, err: reqwest::Error) -> FeedError {
        if err.is_timeout() {
            FeedError::Timeout(self.config.timeout)
        } else if err.is_decode() {
            FeedError::UnexpectedShape(err.to_string())
        } else {
            FeedError::Transport(err)
        }
    }
}
