//! Immutable bundle of linguistic services for one run.

use crate::lemmatizer::RuleLemmatizer;
use crate::similarity::scorer_for;
use crate::stopwords::StopwordList;
use crate::tagger::SuffixTagger;
use crate::traits::{Lemmatizer, SimilarityScorer, StopwordSet, Tagger};
use sk_core::{CondenserConfig, Result, SkError};
use tracing::info;

/// Loaded once before processing and shared by reference afterwards.
pub struct Linguistics {
    pub stopwords: Box<dyn StopwordSet>,
    pub tagger: Box<dyn Tagger>,
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub scorer: Box<dyn SimilarityScorer>,
}

impl Linguistics {
    pub fn new(
        stopwords: Box<dyn StopwordSet>,
        tagger: Box<dyn Tagger>,
        lemmatizer: Box<dyn Lemmatizer>,
        scorer: Box<dyn SimilarityScorer>,
    ) -> Self {
        Self { stopwords, tagger, lemmatizer, scorer }
    }

    /// Built-in English services with the default scorer.
    pub fn english() -> Self {
        Self::new(
            Box::new(StopwordList::english()),
            Box::new(SuffixTagger::new()),
            Box::new(RuleLemmatizer::new()),
            scorer_for(Default::default()),
        )
    }

    /// Resolve every service named by `config`. Fails before any phrase is processed.
    pub fn load(config: &CondenserConfig) -> Result<Self> {
        let source = &config.stopwords;
        let mut stopwords = match &source.file {
            Some(path) => StopwordList::from_file(path)?,
            None => StopwordList::for_language(&source.language).ok_or_else(|| {
                SkError::ResourceUnavailable(format!(
                    "no stopword list for language '{}'",
                    source.language
                ))
            })?,
        };
        stopwords.extend(&source.extra);

        let scorer = scorer_for(config.scorer);
        info!(
            stopwords = stopwords.len(),
            scorer = scorer.name(),
            "Loaded linguistic resources"
        );
        Ok(Self::new(
            Box::new(stopwords),
            Box::new(SuffixTagger::new()),
            Box::new(RuleLemmatizer::new()),
            scorer,
        ))
    }
}

impl Default for Linguistics {
    fn default() -> Self {
        Self::english()
    }
}
