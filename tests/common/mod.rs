//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use job_matcher::domain::job::RawJobRecord;
use tempfile::TempDir;

/// Temporary directory for word lists and config files, removed on drop.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        TestDir {
            dir: TempDir::new().expect("Failed to create temporary directory."),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file.");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// A complete record with a yearly salary text.
pub fn job_record(title: &str, salary: &str) -> RawJobRecord {
    RawJobRecord {
        title: Some(title.to_string()),
        company: Some(format!("{title} Co")),
        locations: Some("Montreal, QC".to_string()),
        description: Some(format!("We are hiring a {title}")),
        site: Some("jobs.example.ca".to_string()),
        url: Some(format!("https://jobs.example.ca/{title}")),
        salary: Some(salary.to_string()),
        ..Default::default()
    }
}
