use crate::domain::job::{AggregatedResult, RankReport};
use crate::errors::{MatcherError, MatcherResult};

/// Position of the first maximum.
fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, top)) if v <= top => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Position of the first minimum.
fn argmin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, low)) if v >= low => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Finds the extremal salaries of a result set and reports the best-paid job.
///
/// Ties resolve to the earliest job.
pub fn rank(result: &AggregatedResult) -> MatcherResult<RankReport> {
    let best = argmax(result.salaries()).ok_or(MatcherError::EmptyInput)?;
    let lowest = argmin(result.salaries()).ok_or(MatcherError::EmptyInput)?;
    let highest_max = argmax(result.max_salaries()).ok_or(MatcherError::EmptyInput)?;
    let lowest_min = argmin(result.min_salaries()).ok_or(MatcherError::EmptyInput)?;

    Ok(RankReport {
        highest_salary_index: best,
        lowest_salary_index: lowest,
        highest_max_salary_index: highest_max,
        lowest_min_salary_index: lowest_min,
        title: result.titles()[best].clone(),
        location: result.locations()[best].clone(),
        employer: result.employers()[best].clone(),
        salary: result.salaries()[best],
        min_salary: result.min_salaries()[best],
        max_salary: result.max_salaries()[best],
        url: result.urls()[best].clone(),
        description: result.descriptions()[best].clone(),
    })
}
