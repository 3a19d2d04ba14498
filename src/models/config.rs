//! Configuration model loaded from external sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::crawlers::{DEFAULT_USER_AGENT, JobQuery};

/// Which job board the searches run against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Careerjet,
    Indeed,
}

/// Identity sent with every Careerjet API call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CareerjetConfig {
    pub affid: String,
    pub user_ip: String,
    pub referer: String,
}

impl Default for CareerjetConfig {
    fn default() -> Self {
        Self {
            affid: "213e213hd12344552".to_string(),
            user_ip: "11.22.33.44".to_string(),
            referer: "http://www.example.com".to_string(),
        }
    }
}

/// Word lists for resume matching.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LexiconConfig {
    pub vocabulary_path: PathBuf,
    #[serde(default)]
    pub stop_words_path: Option<PathBuf>,
}

fn default_concurrency() -> usize {
    5
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Browser user agent for every job board request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub careerjet: CareerjetConfig,
    #[serde(default)]
    pub searches: Vec<JobQuery>,
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,
    #[serde(default)]
    pub resume_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `path` (YAML) and overlays `JOBMATCHER__*` environment variables.
    ///
    /// A `concurrency` of 0 is rejected since no request could ever start.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let app: Self = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("JOBMATCHER").separator("__"))
            .build()?
            .try_deserialize()?;

        if app.concurrency == 0 {
            return Err(config::ConfigError::Message(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(app)
    }
}
