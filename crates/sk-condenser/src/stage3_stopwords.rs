//! Stage 3 (stopwords): drop filler tokens from a phrase.

use sk_nlp::{tokenize, StopwordSet};

/// Tokens whose lowercase form is a stopword are dropped; survivors keep their
/// casing and order and are joined by single spaces. A phrase made only of
/// stopwords becomes empty.
pub fn remove_stopwords<S: StopwordSet + ?Sized>(phrase: &str, stopwords: &S) -> String {
    tokenize(phrase)
        .into_iter()
        .filter(|token| !stopwords.is_stopword(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
