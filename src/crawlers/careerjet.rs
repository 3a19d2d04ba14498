use std::sync::Arc;

use async_trait::async_trait;
use html_escape::decode_html_entities;
use serde::Deserialize;
use tokio::sync::Semaphore;
use url::Url;

use crate::crawlers::{
    CrawlerError, CrawlerResult, JobBoardCrawler, JobQuery, build_reqwest_client, fetch_text,
    request_semaphore,
};
use crate::domain::job::RawJobRecord;
use crate::models::config::CareerjetConfig;

const API_URL: &str = "http://public.api.careerjet.net/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    jobs: Vec<RawJobRecord>,
}

/// Client for the Careerjet public search API which limits concurrent
/// HTTP requests using a [`Semaphore`].
pub struct CareerjetCrawler {
    endpoint: Url,
    client: reqwest::Client,
    semaphore: Arc<Semaphore>,
    user_agent: String,
    config: CareerjetConfig,
}

impl CareerjetCrawler {
    /// Creates a client allowing `concurrency` requests in flight.
    ///
    /// `user_agent` is both the HTTP user agent and the one reported to the API.
    pub fn new(
        concurrency: usize,
        user_agent: &str,
        config: CareerjetConfig,
    ) -> CrawlerResult<Self> {
        Ok(Self {
            endpoint: Url::parse(API_URL).map_err(|e| CrawlerError::Build(e.to_string()))?,
            client: build_reqwest_client(Some(user_agent))?,
            semaphore: request_semaphore(concurrency)?,
            user_agent: user_agent.to_string(),
            config,
        })
    }

    /// Search URL carrying the query and the affiliate identity.
    pub fn search_url(&self, query: &JobQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("locale_code", query.site.locale())
            .append_pair("keywords", &query.keywords)
            .append_pair("location", &query.location)
            .append_pair("affid", &self.config.affid)
            .append_pair("user_ip", &self.config.user_ip)
            .append_pair("url", &self.config.referer)
            .append_pair("user_agent", &self.user_agent);
        url
    }
}

/// Decodes a search response body into raw records.
///
/// Careerjet answers ambiguous locations with a non-`JOBS` response type,
/// which is reported as [`CrawlerError::Unexpected`].
pub fn parse_search_response(body: &str) -> CrawlerResult<Vec<RawJobRecord>> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| CrawlerError::Decode(e.to_string()))?;
    if response.kind != "JOBS" {
        return Err(CrawlerError::Unexpected(format!(
            "response type {}",
            response.kind
        )));
    }
    Ok(response.jobs.into_iter().map(decode_entities).collect())
}

fn decode_entities(mut record: RawJobRecord) -> RawJobRecord {
    record.title = record
        .title
        .map(|title| decode_html_entities(&title).into_owned());
    record.description = record
        .description
        .map(|description| decode_html_entities(&description).into_owned());
    record
}

#[async_trait]
impl JobBoardCrawler for CareerjetCrawler {
    async fn get_jobs(&self, query: &JobQuery) -> CrawlerResult<Vec<RawJobRecord>> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| CrawlerError::Request(e.to_string()))?;
        let url = self.search_url(query);
        let body = fetch_text(&self.client, url.as_str()).await?;
        let jobs = parse_search_response(&body)?;
        log::info!(
            "Careerjet returned {} jobs for {:?} in {:?}",
            jobs.len(),
            query.keywords,
            query.location
        );
        Ok(jobs)
    }
}
