//! Salary text parsing into yearly figures.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::job::{NormalizedSalary, RawJobRecord, SalaryType};
use crate::errors::{MatcherError, MatcherResult};

/// Integers (optionally with `,` thousands groups) or decimals like `12.5` and `.5`.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:,\d{3})*(?:\.\d+)?|\.\d+").expect("number pattern is valid")
});

/// Which salary field a text came from; decides how several numbers collapse into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalaryField {
    /// Mean of all numbers found.
    Salary,
    /// Last number found.
    Min,
    /// Last number found.
    Max,
}

/// Extracts every numeric token of `text` in order of appearance.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .collect()
}

/// Parses one salary field into a yearly value.
///
/// Absent or empty text is 0. Non-empty text without any number is a
/// [`MatcherError::Parse`].
pub fn normalize_salary(
    text: Option<&str>,
    field: SalaryField,
    salary_type: SalaryType,
) -> MatcherResult<f64> {
    let text = match text {
        None | Some("") => return Ok(0.0),
        Some(text) => text,
    };

    let numbers = extract_numbers(text);
    let value = match field {
        SalaryField::Salary => match numbers.len() {
            0 => None,
            1 => Some(numbers[0]),
            n => Some(numbers.iter().sum::<f64>() / n as f64),
        },
        SalaryField::Min | SalaryField::Max => numbers.last().copied(),
    }
    .ok_or_else(|| MatcherError::Parse {
        text: text.to_string(),
    })?;

    Ok(value * salary_type.yearly_factor())
}

/// Normalizes the three salary fields of a record using its salary type.
pub fn normalize_record_salary(record: &RawJobRecord) -> MatcherResult<NormalizedSalary> {
    let salary_type = record.salary_type();
    Ok(NormalizedSalary {
        salary: normalize_salary(record.salary.as_deref(), SalaryField::Salary, salary_type)?,
        min_salary: normalize_salary(record.salary_min.as_deref(), SalaryField::Min, salary_type)?,
        max_salary: normalize_salary(record.salary_max.as_deref(), SalaryField::Max, salary_type)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_absent_text_is_zero() {
        for field in [SalaryField::Salary, SalaryField::Min, SalaryField::Max] {
            assert_eq!(normalize_salary(Some(""), field, SalaryType::Yearly).unwrap(), 0.0);
            assert_eq!(normalize_salary(None, field, SalaryType::Hourly).unwrap(), 0.0);
        }
    }

    #[test]
    fn text_without_numbers_is_a_parse_error() {
        for text in ["Competitive", "  ", "$", "DOE"] {
            let result = normalize_salary(Some(text), SalaryField::Salary, SalaryType::Yearly);
            assert!(matches!(result, Err(MatcherError::Parse { .. })), "{text:?}");

            let result = normalize_salary(Some(text), SalaryField::Min, SalaryType::Yearly);
            assert!(matches!(result, Err(MatcherError::Parse { .. })), "{text:?}");
        }
    }

    #[test]
    fn bound_fields_take_the_last_number() {
        let min = normalize_salary(
            Some("$50,000 - $70,000"),
            SalaryField::Min,
            SalaryType::Yearly,
        )
        .unwrap();
        assert_eq!(min, 70_000.0);

        let max = normalize_salary(Some("up to 85000.50"), SalaryField::Max, SalaryType::Yearly)
            .unwrap();
        assert_eq!(max, 85_000.5);
    }

    #[test]
    fn salary_field_averages_all_numbers() {
        let salary = normalize_salary(
            Some("$50,000 - $70,000"),
            SalaryField::Salary,
            SalaryType::Yearly,
        )
        .unwrap();
        assert_eq!(salary, 60_000.0);

        let single = normalize_salary(Some("42000"), SalaryField::Salary, SalaryType::Yearly)
            .unwrap();
        assert_eq!(single, 42_000.0);
    }

    #[test]
    fn hourly_figures_are_scaled_to_a_year() {
        let salary = normalize_salary(Some("25"), SalaryField::Salary, SalaryType::Hourly).unwrap();
        assert_eq!(salary, 50_000.0);
    }

    #[test]
    fn extract_numbers_handles_decimals_and_groups() {
        assert_eq!(extract_numbers("$17.50 - $1,200 or .5"), vec![17.5, 1200.0, 0.5]);
        assert!(extract_numbers("negotiable").is_empty());
    }

    #[test]
    fn record_salary_scales_every_field_for_hourly_type() {
        let record = RawJobRecord {
            salary: Some("$20 - $30".to_string()),
            salary_min: Some("20".to_string()),
            salary_max: None,
            salary_type: Some("H".to_string()),
            ..Default::default()
        };

        let normalized = normalize_record_salary(&record).unwrap();

        assert_eq!(
            normalized,
            NormalizedSalary {
                salary: 50_000.0,
                min_salary: 40_000.0,
                max_salary: 0.0,
            }
        );
    }
}
