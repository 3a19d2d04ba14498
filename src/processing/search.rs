use serde::Serialize;

use crate::crawlers::{JobBoardCrawler, JobQuery};
use crate::domain::job::{AggregatedResult, RankReport};
use crate::processing::aggregate::aggregate;
use crate::processing::ranking::rank;

/// Everything learned from one search.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub keywords: String,
    pub location: String,
    pub jobs: AggregatedResult,
    pub report: RankReport,
}

/// Runs one search end to end: fetch postings, aggregate them and rank by
/// salary. Failures are logged and yield `None`.
pub async fn process_search(
    crawler: &dyn JobBoardCrawler,
    query: &JobQuery,
) -> Option<SearchOutcome> {
    log::info!("Received search: {query:?}");

    let records = match crawler.get_jobs(query).await {
        Ok(records) => records,
        Err(e) => {
            log::error!("Error fetching jobs for {:?}: {e}", query.keywords);
            return None;
        }
    };

    let jobs = match aggregate(&records) {
        Ok(jobs) => jobs,
        Err(e) => {
            log::error!("Error aggregating jobs for {:?}: {e}", query.keywords);
            return None;
        }
    };

    let report = match rank(&jobs) {
        Ok(report) => report,
        Err(e) => {
            log::warn!("Nothing to rank for {:?}: {e}", query.keywords);
            return None;
        }
    };

    log::info!(
        "Finished search {:?}: jobs={}, highest_salary={}, lowest_salary={}",
        query.keywords,
        jobs.len(),
        report.salary,
        jobs.salaries()[report.lowest_salary_index]
    );

    Some(SearchOutcome {
        keywords: query.keywords.clone(),
        location: query.location.clone(),
        jobs,
        report,
    })
}
