//! String similarity scorers on a 0-100 scale.
//!
//! All scorers run both inputs through [`default_process`] first, so case and
//! punctuation never affect the score. An input that processes to nothing
//! scores 0 against everything.

use crate::traits::SimilarityScorer;
use regex::Regex;
use sk_core::ScorerKind;
use std::sync::LazyLock;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());

/// Lowercase, replace each non-word character with a space, trim.
pub fn default_process(text: &str) -> String {
    RE_NON_WORD.replace_all(text, " ").to_lowercase().trim().to_string()
}

/// Insert/delete-only edit distance, counted in chars.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.len() + b.len() - 2 * lcs_len(&a, &b)
}

/// Longest common subsequence length, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Halves round to even: 62.5 scores 62, 87.5 scores 88.
fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Apply the processor, then `f` on the processed pair unless either side is empty.
fn processed_score(a: &str, b: &str, f: impl Fn(&str, &str) -> f64) -> u8 {
    let a = default_process(a);
    let b = default_process(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_percent(f(&a, &b))
}

/// `(len_a + len_b - indel) / (len_a + len_b)`; rewards shared subsequences,
/// so a phrase and its suffixed form ("javascript", "javascripting") score high.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl SimilarityScorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        processed_score(a, b, |a, b| {
            let total = a.chars().count() + b.chars().count();
            (total - indel_distance(a, b)) as f64 / total as f64
        })
    }

    fn name(&self) -> &'static str {
        "ratio"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl SimilarityScorer for NormalizedLevenshtein {
    fn score(&self, a: &str, b: &str) -> u8 {
        processed_score(a, b, strsim::normalized_levenshtein)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl SimilarityScorer for JaroWinkler {
    fn score(&self, a: &str, b: &str) -> u8 {
        processed_score(a, b, strsim::jaro_winkler)
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

pub fn scorer_for(kind: ScorerKind) -> Box<dyn SimilarityScorer> {
    match kind {
        ScorerKind::Ratio => Box::new(IndelRatio),
        ScorerKind::Levenshtein => Box::new(NormalizedLevenshtein),
        ScorerKind::JaroWinkler => Box::new(JaroWinkler),
    }
}
