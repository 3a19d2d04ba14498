use std::sync::Arc;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tokio::sync::Semaphore;
use url::Url;

use crate::crawlers::{
    CrawlerError, CrawlerResult, JobBoardCrawler, JobQuery, Site, build_reqwest_client, fetch_text,
    request_semaphore,
};
use crate::domain::job::{RawJobRecord, SalaryType};

/// Crawler for the first result page of an Indeed search, limiting
/// concurrent HTTP requests with a [`Semaphore`].
pub struct IndeedCrawler {
    client: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl IndeedCrawler {
    pub fn new(concurrency: usize, user_agent: Option<&str>) -> CrawlerResult<Self> {
        Ok(Self {
            client: build_reqwest_client(user_agent)?,
            semaphore: request_semaphore(concurrency)?,
        })
    }
}

/// Search page URL for a job title and location, spaces encoded as `+`.
pub fn indeed_url(site: Site, job_title: &str, location: &str) -> CrawlerResult<Url> {
    let mut url = Url::parse(&format!("https://{}/jobs", site.indeed_host()))
        .map_err(|e| CrawlerError::Build(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("q", job_title)
        .append_pair("l", location);
    Ok(url)
}

fn selector(css: &str) -> CrawlerResult<Selector> {
    Selector::parse(css).map_err(|e| CrawlerError::Build(e.to_string()))
}

/// Text content of an element with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Splits a salary snippet like `$45–$55 an hour` at its range dash.
/// A snippet without a range is both bounds.
fn split_range(text: &str) -> (String, String) {
    match text.split_once(['-', '–', '—']) {
        Some((low, high)) => (low.trim().to_string(), high.trim().to_string()),
        None => (text.to_string(), text.to_string()),
    }
}

/// Extracts the result cards of a search page.
///
/// Cards without a title link (ads, separators) are skipped; other missing
/// pieces are left empty for the aggregator to judge.
pub fn parse_listing(html: &str, page_url: &Url) -> CrawlerResult<Vec<RawJobRecord>> {
    let document = Html::parse_document(html);
    let card_selector = selector("ul.jobsearch-ResultsList > li")?;
    let link_selector = selector("h2.jobTitle a")?;
    let company_selector = selector("span.companyName")?;
    let location_selector = selector("div.companyLocation")?;
    let salary_selector = selector("div.salary-snippet-container")?;
    let snippet_selector = selector("div.job-snippet")?;

    let site = page_url.host_str().unwrap_or_default().to_string();

    let mut records = Vec::new();
    for card in document.select(&card_selector) {
        let Some(link) = card.select(&link_selector).next() else {
            continue;
        };

        let salary = first_text(card, &salary_selector);
        let salary_type = salary
            .as_deref()
            .filter(|text| text.to_lowercase().contains("hour"))
            .map(|_| SalaryType::HOURLY_MARKER.to_string());
        let (salary_min, salary_max) = match salary.as_deref().map(split_range) {
            Some((low, high)) => (Some(low), Some(high)),
            None => (None, None),
        };

        records.push(RawJobRecord {
            title: Some(element_text(link)).filter(|title| !title.is_empty()),
            company: first_text(card, &company_selector),
            locations: first_text(card, &location_selector),
            description: first_text(card, &snippet_selector),
            site: Some(site.clone()),
            url: link
                .value()
                .attr("href")
                .and_then(|href| page_url.join(href).ok())
                .map(|url| url.to_string()),
            salary,
            salary_min,
            salary_max,
            salary_type,
        });
    }

    Ok(records)
}

#[async_trait]
impl JobBoardCrawler for IndeedCrawler {
    async fn get_jobs(&self, query: &JobQuery) -> CrawlerResult<Vec<RawJobRecord>> {
        let url = indeed_url(query.site, &query.keywords, &query.location)?;
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| CrawlerError::Request(e.to_string()))?;
        let body = fetch_text(&self.client, url.as_str()).await?;
        let jobs = parse_listing(&body, &url)?;
        if jobs.is_empty() {
            log::warn!("No result cards found at {url}");
        }
        Ok(jobs)
    }
}
