use std::env;

use futures::future;

use job_matcher::crawlers::JobBoardCrawler;
use job_matcher::crawlers::careerjet::CareerjetCrawler;
use job_matcher::crawlers::indeed::IndeedCrawler;
use job_matcher::models::config::{AppConfig, SourceKind};
use job_matcher::processing::search::process_search;
use job_matcher::processing::{Lexicon, TextVector, similarity};

fn load_resume(config: &AppConfig) -> Option<(Lexicon, TextVector)> {
    let lexicon_config = config.lexicon.as_ref()?;
    let resume_path = config.resume_path.as_ref()?;

    let lexicon = match Lexicon::from_files(
        &lexicon_config.vocabulary_path,
        lexicon_config.stop_words_path.as_deref(),
    ) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            log::error!("Failed to load lexicon: {e}");
            return None;
        }
    };

    let resume = match std::fs::read_to_string(resume_path) {
        Ok(resume) => resume,
        Err(e) => {
            log::error!("Failed to read resume {}: {e}", resume_path.display());
            return None;
        }
    };

    let vector = lexicon.vectorize(&resume);
    log::info!(
        "Loaded lexicon of {} words; resume matches {}",
        lexicon.len(),
        vector.count_present()
    );
    Some((lexicon, vector))
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = env::var("JOBMATCHER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration {config_path}: {e}");
            std::process::exit(1);
        }
    };

    let crawler: Box<dyn JobBoardCrawler> = match config.source {
        SourceKind::Careerjet => {
            match CareerjetCrawler::new(
                config.concurrency,
                &config.user_agent,
                config.careerjet.clone(),
            ) {
                Ok(crawler) => Box::new(crawler),
                Err(e) => {
                    log::error!("Failed to build Careerjet client: {e}");
                    std::process::exit(1);
                }
            }
        }
        SourceKind::Indeed => {
            match IndeedCrawler::new(config.concurrency, Some(config.user_agent.as_str())) {
                Ok(crawler) => Box::new(crawler),
                Err(e) => {
                    log::error!("Failed to build Indeed crawler: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    if config.searches.is_empty() {
        log::warn!("No searches configured in {config_path}");
        return;
    }

    let resume = load_resume(&config);

    let tasks = config
        .searches
        .iter()
        .map(|query| process_search(crawler.as_ref(), query));
    let outcomes = future::join_all(tasks).await;

    for outcome in outcomes.into_iter().flatten() {
        println!(
            "== {} in {} ({} jobs)",
            outcome.keywords,
            outcome.location,
            outcome.jobs.len()
        );
        println!("{}", outcome.report);

        if let Some((lexicon, resume_vector)) = &resume {
            let job_vector = lexicon.vectorize(&outcome.report.description);
            match similarity(resume_vector, &job_vector) {
                Ok(score) => println!("Resume similarity: {score:.3}"),
                Err(e) => log::warn!("Resume similarity unavailable: {e}"),
            }
        }
        println!();
    }
}
