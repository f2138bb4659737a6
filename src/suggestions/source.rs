//! Candidate sources
//!
//! A candidate source turns a query into an ordered list of candidates.
//! Sources run on the loader worker thread, so they must be `Send`.

/// Supplies candidates for a query, already ranked
pub trait CandidateSource: Send + 'static {
    fn candidates(&self, query: &str) -> Vec<String>;
}

impl<F> CandidateSource for F
where
    F: Fn(&str) -> Vec<String> + Send + 'static,
{
    fn candidates(&self, query: &str) -> Vec<String> {
        self(query)
    }
}

/// Prefix filter over a fixed word list
///
/// Keeps the word list's order; an empty query matches every word.
#[derive(Debug, Clone)]
pub struct WordListSource {
    words: Vec<String>,
    limit: usize,
    case_sensitive: bool,
}

impl WordListSource {
    pub fn new(words: Vec<String>, limit: usize, case_sensitive: bool) -> Self {
        Self {
            words,
            limit,
            case_sensitive,
        }
    }

    /// Parse newline-separated words, skipping blanks and duplicates
    pub fn parse_words(contents: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| seen.insert(*line))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn matches(&self, word: &str, query: &str) -> bool {
        if self.case_sensitive {
            word.starts_with(query)
        } else {
            word.to_lowercase().starts_with(&query.to_lowercase())
        }
    }
}

impl CandidateSource for WordListSource {
    fn candidates(&self, query: &str) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| self.matches(word, query))
            .take(self.limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
