use std::collections::HashSet;

/// Coarse part-of-speech categories understood by the lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Assigns a part of speech to a token seen in isolation.
pub trait Tagger: Send + Sync {
    /// `None` when the token cannot be classified.
    fn tag(&self, token: &str) -> Option<PartOfSpeech>;

    /// Tag, falling back to noun for unrecognized tokens.
    fn tag_or_noun(&self, token: &str) -> PartOfSpeech {
        self.tag(token).unwrap_or(PartOfSpeech::Noun)
    }
}

/// Reduces a token to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str, pos: PartOfSpeech) -> String;
}

/// Stopword membership. Callers pass lowercase tokens.
pub trait StopwordSet: Send + Sync {
    fn is_stopword(&self, token: &str) -> bool;
}

impl StopwordSet for HashSet<String> {
    fn is_stopword(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl StopwordSet for HashSet<&'static str> {
    fn is_stopword(&self, token: &str) -> bool {
        self.contains(token)
    }
}

/// String similarity on a 0-100 scale, 100 meaning identical.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;

    /// Best-scoring choice as `(index, score)`. The earliest choice wins ties;
    /// `None` when `choices` is empty.
    fn best_match(&self, query: &str, choices: &[String]) -> Option<(usize, u8)> {
        let mut best: Option<(usize, u8)> = None;
        for (idx, choice) in choices.iter().enumerate() {
            let score = self.score(query, choice);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((idx, score)),
            }
        }
        best
    }

    fn name(&self) -> &'static str;
}
