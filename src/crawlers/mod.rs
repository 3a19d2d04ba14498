use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Semaphore;

use crate::domain::job::RawJobRecord;

pub mod careerjet;
pub mod indeed;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:31.0) Gecko/20100101 Firefox/31.0";

#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("failed to build crawler: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("unknown site {0:?}, expected one of CANADA, USA, UK")]
    UnknownSite(String),
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Country edition of a job board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Site {
    #[default]
    Canada,
    Usa,
    Uk,
}

impl Site {
    /// Careerjet locale code.
    pub fn locale(self) -> &'static str {
        match self {
            Site::Canada => "en_CA",
            Site::Usa => "en_US",
            Site::Uk => "en_GB",
        }
    }

    pub fn indeed_host(self) -> &'static str {
        match self {
            Site::Canada => "ca.indeed.com",
            Site::Usa => "www.indeed.com",
            Site::Uk => "uk.indeed.com",
        }
    }
}

impl FromStr for Site {
    type Err = CrawlerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "CANADA" => Ok(Site::Canada),
            "USA" => Ok(Site::Usa),
            "UK" => Ok(Site::Uk),
            _ => Err(CrawlerError::UnknownSite(value.to_string())),
        }
    }
}

impl TryFrom<String> for Site {
    type Error = CrawlerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One job search: what, where and on which country edition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JobQuery {
    pub keywords: String,
    pub location: String,
    #[serde(default)]
    pub site: Site,
}

/// A source of raw job postings for a query.
#[async_trait]
pub trait JobBoardCrawler: Send + Sync {
    /// Fetches the first page of postings matching `query`.
    async fn get_jobs(&self, query: &JobQuery) -> CrawlerResult<Vec<RawJobRecord>>;
}

/// Semaphore for `concurrency` requests in flight; zero would block forever.
pub(crate) fn request_semaphore(concurrency: usize) -> CrawlerResult<Arc<Semaphore>> {
    if concurrency == 0 {
        return Err(CrawlerError::Build("concurrency must be at least 1".to_string()));
    }
    Ok(Arc::new(Semaphore::new(concurrency)))
}

/// Shared HTTP client with a browser user agent and a request timeout.
pub fn build_reqwest_client(user_agent: Option<&str>) -> CrawlerResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| CrawlerError::Build(e.to_string()))
}

/// Fetches `url` and returns the body of a successful response.
pub(crate) async fn fetch_text(client: &reqwest::Client, url: &str) -> CrawlerResult<String> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| CrawlerError::Request(e.to_string()))?;
    if !res.status().is_success() {
        log::error!("Failed to get URL {}: {}", url, res.status());
        return Err(CrawlerError::Status {
            status: res.status().as_u16(),
            url: url.to_string(),
        });
    }
    res.text()
        .await
        .map_err(|e| CrawlerError::Decode(e.to_string()))
}
