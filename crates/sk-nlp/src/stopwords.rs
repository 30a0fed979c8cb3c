//! Stopword lists.

use crate::traits::StopwordSet;
use sk_core::{Result, SkError};
use std::collections::HashSet;
use std::path::Path;

/// English function words, matching the widely used NLTK list.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
    "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
    "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// Built-in list for a language code. Only English ships with the crate.
    pub fn for_language(language: &str) -> Option<Self> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Some(Self::english()),
            _ => None,
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self { words: words.iter().map(|w| w.to_lowercase()).collect() }
    }

    /// Load one word per line. Blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkError::ResourceUnavailable(format!("stopword file {}: {e}", path.display()))
        })?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Ok(Self { words })
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordSet for StopwordList {
    fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}
