//! Stage 6 (condense): greedy similarity-threshold merge.
//!
//! Each phrase is scored only against survivors accepted before it. The
//! first phrase of a cluster becomes its representative, so the result
//! depends on input order and is reproducible for a given order.

use crate::stage5_dedup::deduplicate;
use sk_core::config::DEFAULT_THRESHOLD;
use sk_core::CondensationResult;
use sk_nlp::SimilarityScorer;
use tracing::{debug, info};

/// Empty, whitespace-only or punctuation-only phrases never reach either output.
pub fn is_droppable(phrase: &str) -> bool {
    phrase.chars().all(|c| c.is_whitespace() || c.is_ascii_punctuation())
}

pub fn condense<S: SimilarityScorer + ?Sized>(phrases: &[String], scorer: &S) -> CondensationResult {
    condense_with_threshold(phrases, scorer, DEFAULT_THRESHOLD)
}

pub fn condense_with_threshold<S: SimilarityScorer + ?Sized>(
    phrases: &[String],
    scorer: &S,
    threshold: u8,
) -> CondensationResult {
    let mut survivors: Vec<String> = Vec::new();
    let mut merged: Vec<String> = Vec::new();
    let mut dropped = 0usize;

    for phrase in phrases {
        if is_droppable(phrase) {
            dropped += 1;
            continue;
        }
        match scorer.best_match(phrase, &survivors) {
            Some((idx, score)) if score >= threshold => {
                debug!(phrase = %phrase, survivor = %survivors[idx], score, "merged");
                merged.push(phrase.clone());
            }
            _ => survivors.push(phrase.clone()),
        }
    }

    info!(
        survivors = survivors.len(),
        merged = merged.len(),
        dropped,
        threshold,
        "Condensed skills"
    );
    CondensationResult {
        survivors: deduplicate(&survivors),
        merged: deduplicate(&merged),
    }
}
