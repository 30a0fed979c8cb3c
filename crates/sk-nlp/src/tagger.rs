//! Rule-based part-of-speech tagger for isolated tokens.
//!
//! Tokens are classified by a small closed lexicon first, then by suffix.
//! Without sentence context ambiguous words ("test", "lead") get their most
//! common reading or none at all.

use crate::traits::{PartOfSpeech, Tagger};
use std::collections::HashMap;
use std::sync::LazyLock;

use PartOfSpeech::{Adjective, Adverb, Noun, Verb};

static LEXICON: LazyLock<HashMap<&'static str, PartOfSpeech>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for w in [
        "well", "fast", "often", "always", "never", "soon", "almost", "already", "also",
        "together", "abroad", "remotely",
    ] {
        m.insert(w, Adverb);
    }
    for w in [
        "good", "bad", "new", "old", "big", "small", "large", "high", "low", "senior",
        "junior", "strong", "basic", "agile", "lean", "better", "best", "worse", "worst",
        "fluent", "native", "proficient", "expert", "excellent", "solid",
    ] {
        m.insert(w, Adjective);
    }
    for w in [
        "ran", "built", "wrote", "written", "taught", "thought", "made", "brought",
        "bought", "sold", "held", "kept", "met", "paid", "sent", "spent", "told", "won",
        "understood", "drove", "driven", "spoke", "spoken", "chose", "chosen", "began",
        "begun", "grew", "grown", "knew", "known", "gave", "given", "took", "taken",
        "saw", "seen", "went", "gone", "done", "apply", "supply", "reply",
    ] {
        m.insert(w, Verb);
    }
    for w in [
        "assembly", "family", "anomaly", "monopoly", "italy", "ally", "rally", "fly",
        "butterfly", "string", "thing", "spring", "ring", "king", "ceiling", "bed", "shed",
        "hundred", "speed", "seed", "feed",
    ] {
        m.insert(w, Noun);
    }
    m
});

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ive", "ful", "able", "ible", "less", "ish", "ic", "al",
];

/// Suffix-and-lexicon tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixTagger;

impl SuffixTagger {
    pub fn new() -> Self {
        Self
    }
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

impl Tagger for SuffixTagger {
    fn tag(&self, token: &str) -> Option<PartOfSpeech> {
        let word = token.to_lowercase();
        if let Some(pos) = LEXICON.get(word.as_str()) {
            return Some(*pos);
        }
        if word.chars().count() <= 3 || !word.chars().all(char::is_alphabetic) {
            return None;
        }
        if word.ends_with("ly") {
            return Some(Adverb);
        }
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 2 && has_vowel(stem) {
                return Some(Verb);
            }
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if !word.ends_with("eed") && stem.len() >= 2 && has_vowel(stem) {
                return Some(Verb);
            }
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Some(Adjective);
        }
        None
    }
}
