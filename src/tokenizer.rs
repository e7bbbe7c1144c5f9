use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[a-z0-9]+").expect("valid regex");
}

/// Minimal built-in stop-word list. Always available with zero external data;
/// callers wanting a richer locale-specific set pass their own to
/// [`Analyzer::with_stopwords`].
pub const FALLBACK_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with", "is", "are", "was",
    "were", "be", "as", "by", "at", "from", "that", "this", "it", "its", "into", "over", "under",
    "we", "you", "they",
];

/// Shared normalization resources: the stop-word set and the stemmer.
///
/// Build one per process and pass it by reference wherever tokenization
/// happens; tests can inject an alternate stop-word set the same way.
pub struct Analyzer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl Analyzer {
    /// Analyzer backed by the built-in fallback stop-word list.
    pub fn new() -> Self {
        Self::with_stopwords(FALLBACK_STOPWORDS.iter().map(|s| s.to_string()))
    }

    /// Analyzer with a caller-supplied stop-word set.
    pub fn with_stopwords<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Analyzer {
            stopwords: words.into_iter().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Turn raw text into the ordered sequence of index terms.
    ///
    /// The pipeline is fixed for index compatibility: lowercase, segment into
    /// maximal `[a-z0-9]+` runs (every other character is a separator), drop
    /// stop-words and tokens of length <= 1, then stem. Duplicates are kept in
    /// occurrence order; frequency counting happens in the indexer.
    ///
    /// Never fails: binary or malformed input simply yields fewer tokens, and
    /// empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase();
        let mut terms = Vec::new();
        for mat in TOKEN_RE.find_iter(&lowered) {
            let token = mat.as_str();
            if token.len() <= 1 || self.stopwords.contains(token) {
                continue;
            }
            terms.push(self.stemmer.stem(token).into_owned());
        }
        terms
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
