//! Error taxonomy of the salary and similarity core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatcherError {
    /// Non-empty salary text without any numeric token.
    #[error("no numeric value found in salary text {text:?}")]
    Parse { text: String },

    /// A job record lacks one of the fields every listing must carry.
    #[error("job record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("cannot rank an empty result set")]
    EmptyInput,

    /// Cosine similarity is undefined when either vector has zero norm.
    #[error("cosine similarity is undefined for an all-zero vector")]
    DegenerateVector,

    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type MatcherResult<T> = Result<T, MatcherError>;
