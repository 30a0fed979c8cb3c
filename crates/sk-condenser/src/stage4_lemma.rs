//! Stage 4 (lemma): reduce each token to its dictionary form.

use sk_nlp::{Lemmatizer, Tagger};

/// Lowercase, split on whitespace, tag each token on its own and lemmatize it.
/// Tokens are tagged without context, so ambiguous words can get the wrong
/// category.
pub fn normalize<T, L>(phrase: &str, tagger: &T, lemmatizer: &L) -> String
where
    T: Tagger + ?Sized,
    L: Lemmatizer + ?Sized,
{
    phrase
        .to_lowercase()
        .split_whitespace()
        .map(|token| lemmatizer.lemmatize(token, tagger.tag_or_noun(token)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_all<T, L>(phrases: &[String], tagger: &T, lemmatizer: &L) -> Vec<String>
where
    T: Tagger + ?Sized,
    L: Lemmatizer + ?Sized,
{
    phrases.iter().map(|p| normalize(p, tagger, lemmatizer)).collect()
}
