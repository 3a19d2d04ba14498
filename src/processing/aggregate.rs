use crate::domain::job::{AggregatedResult, JobListing, RawJobRecord};
use crate::errors::{MatcherError, MatcherResult};
use crate::processing::salary::normalize_record_salary;

fn require(value: &Option<String>, index: usize, field: &'static str) -> MatcherResult<String> {
    value
        .clone()
        .ok_or(MatcherError::MissingField { index, field })
}

/// Validates the non-salary fields of the record at `index`.
pub fn validate_listing(record: &RawJobRecord, index: usize) -> MatcherResult<JobListing> {
    Ok(JobListing {
        title: require(&record.title, index, "title")?,
        company: require(&record.company, index, "company")?,
        location: require(&record.locations, index, "locations")?,
        description: require(&record.description, index, "description")?,
        site: require(&record.site, index, "site")?,
        url: require(&record.url, index, "url")?,
    })
}

/// Builds the index-aligned columns for a query's records, preserving order.
///
/// The first malformed record aborts the whole batch; whether to retry
/// without it is the caller's decision.
pub fn aggregate(records: &[RawJobRecord]) -> MatcherResult<AggregatedResult> {
    let mut result = AggregatedResult::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let salary = normalize_record_salary(record)?;
        let listing = validate_listing(record, index)?;
        result.push(salary, listing);
    }

    Ok(result)
}
