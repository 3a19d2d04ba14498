//! Presence vectors over a fixed vocabulary.
//!
//! A [`Lexicon`] is loaded once by the caller and reused for every document:
//! it holds the ordered vocabulary, a word to index map built at
//! construction, and the stop words dropped before lookup.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::{MatcherError, MatcherResult};

static NON_LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z]+").expect("letter pattern is valid"));

/// English stop words, matching the NLTK `stopwords` corpus.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Binary presence vector: position `k` is 1 iff vocabulary word `k` occurs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextVector(Vec<u8>);

impl TextVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of vocabulary words present.
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&bit| bit != 0).count()
    }

    fn set(&mut self, index: usize) {
        self.0[index] = 1;
    }
}

/// Any non-zero byte counts as present.
impl From<Vec<u8>> for TextVector {
    fn from(bits: Vec<u8>) -> Self {
        Self(bits.into_iter().map(|bit| u8::from(bit != 0)).collect())
    }
}

/// Lower-cases `text`, collapses every run of non `a`-`z` characters into a
/// single space and trims the ends.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_LETTERS_RE.replace_all(&lowered, " ").trim().to_string()
}

/// Ordered vocabulary with constant-time word lookup, plus stop words.
#[derive(Clone, Debug)]
pub struct Lexicon {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon; a repeated vocabulary word keeps its first position.
    pub fn new<V, S>(vocabulary: V, stop_words: S) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let vocabulary: Vec<String> = vocabulary.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(vocabulary.len());
        for (position, word) in vocabulary.iter().enumerate() {
            index.entry(word.clone()).or_insert(position);
        }

        Self {
            vocabulary,
            index,
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a lexicon with [`ENGLISH_STOP_WORDS`].
    pub fn english<V>(vocabulary: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self::new(vocabulary, ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Loads newline-separated word lists. Without a stop-word file the
    /// built-in English list is used.
    pub fn from_files(
        vocabulary_path: &Path,
        stop_words_path: Option<&Path>,
    ) -> MatcherResult<Self> {
        let vocabulary = read_word_list(vocabulary_path)?;
        match stop_words_path {
            Some(path) => Ok(Self::new(vocabulary, read_word_list(path)?)),
            None => Ok(Self::english(vocabulary)),
        }
    }

    /// Vocabulary size, which is also the length of every produced vector.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Turns `text` into a presence vector of length [`Lexicon::len`].
    ///
    /// Words outside the vocabulary are ignored.
    pub fn vectorize(&self, text: &str) -> TextVector {
        let mut vector = TextVector::zeros(self.vocabulary.len());
        for token in normalize_text(text).split_whitespace() {
            if self.is_stop_word(token) {
                continue;
            }
            if let Some(position) = self.index_of(token) {
                vector.set(position);
            }
        }
        vector
    }
}

/// One-off vectorization against a caller supplied vocabulary and stop words.
///
/// Builds the lookup map on every call; reuse a [`Lexicon`] for batches.
pub fn vectorize(text: &str, stop_words: &HashSet<String>, vocabulary: &[String]) -> TextVector {
    Lexicon::new(vocabulary.iter().cloned(), stop_words.iter().cloned()).vectorize(text)
}

fn read_word_list(path: &Path) -> MatcherResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| MatcherError::WordList {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
