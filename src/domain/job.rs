use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::HOURS_PER_YEAR;

/// A job posting exactly as a search API or listing page supplied it.
///
/// Every field may be absent. Required fields are validated when records are
/// aggregated, salary fields are parsed by the salary normalizer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RawJobRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub locations: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_min: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_max: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_type: Option<String>,
}

impl RawJobRecord {
    pub fn salary_type(&self) -> SalaryType {
        SalaryType::from_marker(self.salary_type.as_deref())
    }
}

/// Accepts strings, numbers and null for fields that APIs emit inconsistently.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Pay period of a posting's salary figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SalaryType {
    #[default]
    Yearly,
    Hourly,
}

impl SalaryType {
    pub const HOURLY_MARKER: &'static str = "H";

    /// Only the hourly marker is special; anything else is treated as yearly.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(Self::HOURLY_MARKER) => SalaryType::Hourly,
            _ => SalaryType::Yearly,
        }
    }

    /// Multiplier that turns a figure of this pay period into yearly pay.
    pub fn yearly_factor(self) -> f64 {
        match self {
            SalaryType::Yearly => 1.0,
            SalaryType::Hourly => HOURS_PER_YEAR,
        }
    }
}

/// Yearly salary figures derived from one record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NormalizedSalary {
    pub salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// The non-salary fields of a record after validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub site: String,
    pub url: String,
}

/// Index-aligned attribute columns for one query's jobs.
///
/// Position `i` of every column describes the same job. Columns only grow
/// together through [`AggregatedResult::push`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AggregatedResult {
    min_salaries: Vec<f64>,
    salaries: Vec<f64>,
    max_salaries: Vec<f64>,
    locations: Vec<String>,
    titles: Vec<String>,
    descriptions: Vec<String>,
    sites: Vec<String>,
    urls: Vec<String>,
    employers: Vec<String>,
}

impl AggregatedResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            min_salaries: Vec::with_capacity(capacity),
            salaries: Vec::with_capacity(capacity),
            max_salaries: Vec::with_capacity(capacity),
            locations: Vec::with_capacity(capacity),
            titles: Vec::with_capacity(capacity),
            descriptions: Vec::with_capacity(capacity),
            sites: Vec::with_capacity(capacity),
            urls: Vec::with_capacity(capacity),
            employers: Vec::with_capacity(capacity),
        }
    }

    /// Appends one job to every column.
    pub fn push(&mut self, salary: NormalizedSalary, listing: JobListing) {
        self.min_salaries.push(salary.min_salary);
        self.salaries.push(salary.salary);
        self.max_salaries.push(salary.max_salary);
        self.locations.push(listing.location);
        self.titles.push(listing.title);
        self.descriptions.push(listing.description);
        self.sites.push(listing.site);
        self.urls.push(listing.url);
        self.employers.push(listing.company);
    }

    pub fn len(&self) -> usize {
        self.salaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salaries.is_empty()
    }

    pub fn min_salaries(&self) -> &[f64] {
        &self.min_salaries
    }

    pub fn salaries(&self) -> &[f64] {
        &self.salaries
    }

    pub fn max_salaries(&self) -> &[f64] {
        &self.max_salaries
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn employers(&self) -> &[String] {
        &self.employers
    }
}

/// Extremal positions of a result set and the details of its best-paid job.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankReport {
    pub highest_salary_index: usize,
    pub lowest_salary_index: usize,
    pub highest_max_salary_index: usize,
    pub lowest_min_salary_index: usize,
    pub title: String,
    pub location: String,
    pub employer: String,
    pub salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub url: String,
    pub description: String,
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Highest salary job as {} found in {} at {}.",
            self.title, self.location, self.employer
        )?;
        writeln!(f, "- Salary: ${}/Yr", format_amount(self.salary))?;
        writeln!(f, "- Min salary: ${}", format_amount(self.min_salary))?;
        writeln!(f, "- Max salary: ${}", format_amount(self.max_salary))?;
        writeln!(f, "- Link: {}", self.url)?;
        write!(f, "Job description:\n{}", self.description)
    }
}

/// Formats a non-negative amount with thousands separators and cents when present.
fn format_amount(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match cents % 100 {
        0 => grouped,
        fraction => format!("{grouped}.{fraction:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_fields_accept_numbers_strings_and_null() {
        let record: RawJobRecord = serde_json::from_str(
            r#"{"title":"Welder","salary":"$20 - $25","salary_min":20,"salary_max":25.5,"salary_type":null}"#,
        )
        .expect("record should decode");

        assert_eq!(record.salary.as_deref(), Some("$20 - $25"));
        assert_eq!(record.salary_min.as_deref(), Some("20"));
        assert_eq!(record.salary_max.as_deref(), Some("25.5"));
        assert_eq!(record.salary_type, None);
        assert_eq!(record.company, None);
    }

    #[test]
    fn only_hourly_marker_scales() {
        assert_eq!(SalaryType::from_marker(Some("H")), SalaryType::Hourly);
        assert_eq!(SalaryType::from_marker(Some("Y")), SalaryType::Yearly);
        assert_eq!(SalaryType::from_marker(Some("h")), SalaryType::Yearly);
        assert_eq!(SalaryType::from_marker(None), SalaryType::Yearly);
        assert_eq!(SalaryType::Hourly.yearly_factor(), 2000.0);
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(27_500.5), "27,500.50");
    }

    #[test]
    fn report_display_leads_with_best_job() {
        let report = RankReport {
            highest_salary_index: 0,
            lowest_salary_index: 0,
            highest_max_salary_index: 0,
            lowest_min_salary_index: 0,
            title: "Data Engineer".to_string(),
            location: "Toronto, ON".to_string(),
            employer: "Acme".to_string(),
            salary: 95_000.0,
            min_salary: 90_000.0,
            max_salary: 100_000.0,
            url: "https://example.com/job/1".to_string(),
            description: "Build pipelines.".to_string(),
        };

        let text = report.to_string();

        assert!(text.starts_with("Highest salary job as Data Engineer found in Toronto, ON at Acme."));
        assert!(text.contains("- Salary: $95,000/Yr"));
        assert!(text.contains("- Max salary: $100,000"));
        assert!(text.ends_with("Job description:\nBuild pipelines."));
    }
}
