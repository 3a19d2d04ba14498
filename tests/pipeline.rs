mod common;

use job_matcher::crawlers::Site;
use job_matcher::crawlers::careerjet::parse_search_response;
use job_matcher::errors::MatcherError;
use job_matcher::models::config::{AppConfig, SourceKind};
use job_matcher::processing::{aggregate, rank};

use common::{TestDir, job_record};

#[test]
fn careerjet_response_flows_into_a_report() {
    let body = r#"{
        "type": "JOBS",
        "hits": 3,
        "pages": 1,
        "jobs": [
            {"title": "Cook", "company": "Diner", "locations": "Halifax, NS",
             "description": "Cook breakfast", "site": "a.ca", "url": "https://a.ca/1",
             "salary": "$30,000", "salary_min": "", "salary_max": ""},
            {"title": "Engineer", "company": "Bridges", "locations": "Halifax, NS",
             "description": "Design bridges", "site": "b.ca", "url": "https://b.ca/2",
             "salary": "$80,000 - $100,000", "salary_min": "$80,000", "salary_max": "$100,000"},
            {"title": "Tutor", "company": "Learn", "locations": "Halifax, NS",
             "description": "Teach maths", "site": "c.ca", "url": "https://c.ca/3",
             "salary": "25", "salary_min": 20, "salary_max": 30, "salary_type": "H"}
        ]
    }"#;

    let records = parse_search_response(body).unwrap();
    let jobs = aggregate(&records).unwrap();
    let report = rank(&jobs).unwrap();

    assert_eq!(jobs.salaries(), [30_000.0, 90_000.0, 50_000.0]);
    assert_eq!(jobs.max_salaries(), [0.0, 100_000.0, 60_000.0]);
    assert_eq!(jobs.min_salaries(), [0.0, 80_000.0, 40_000.0]);
    assert_eq!(report.highest_salary_index, 1);
    assert_eq!(report.lowest_salary_index, 0);
    assert_eq!(report.highest_max_salary_index, 1);
    assert_eq!(report.lowest_min_salary_index, 0);
    assert_eq!(report.employer, "Bridges");
    assert!(report.to_string().contains("- Link: https://b.ca/2"));
}

#[test]
fn malformed_record_aborts_the_batch() {
    let mut records = vec![job_record("baker", "40000"), job_record("clerk", "35000")];
    records[1].title = None;

    assert!(matches!(
        aggregate(&records),
        Err(MatcherError::MissingField {
            index: 1,
            field: "title"
        })
    ));
}

#[test]
fn ranking_needs_at_least_one_job() {
    let jobs = aggregate(&[]).unwrap();

    assert!(matches!(rank(&jobs), Err(MatcherError::EmptyInput)));
}

#[test]
fn config_file_describes_searches() {
    let dir = TestDir::new();
    let path = dir.write(
        "jobmatcher.yaml",
        r#"
source: indeed
concurrency: 2
searches:
  - keywords: rust developer
    location: Toronto
  - keywords: nurse
    location: Leeds
    site: uk
lexicon:
  vocabulary_path: /usr/share/dict/words
"#,
    );

    let config = AppConfig::load(path.to_str().unwrap()).unwrap();

    assert_eq!(config.source, SourceKind::Indeed);
    assert_eq!(config.concurrency, 2);
    assert_eq!(config.searches.len(), 2);
    assert_eq!(config.searches[0].site, Site::Canada);
    assert_eq!(config.searches[1].site, Site::Uk);
    assert_eq!(config.careerjet.affid, "213e213hd12344552");
    assert!(config.user_agent.starts_with("Mozilla/5.0"));
    let lexicon = config.lexicon.unwrap();
    assert_eq!(lexicon.stop_words_path, None);
    assert_eq!(config.resume_path, None);
}

#[test]
fn config_with_zero_concurrency_is_rejected() {
    let dir = TestDir::new();
    let path = dir.write(
        "jobmatcher.yaml",
        r#"
concurrency: 0
user_agent: job-matcher-test
searches:
  - keywords: welder
    location: Calgary
"#,
    );

    let result = AppConfig::load(path.to_str().unwrap());

    assert!(matches!(result, Err(config::ConfigError::Message(_))));
}
