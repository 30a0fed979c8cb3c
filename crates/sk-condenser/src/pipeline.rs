//! Condensation pipeline: orchestrates all six stages.

use crate::stage2_brands::AliasTable;
use crate::{stage1_segment, stage3_stopwords, stage4_lemma, stage5_dedup, stage6_condense};
use sk_core::{CondensationResult, CondenserConfig, Result, RunReport, SkError};
use sk_nlp::Linguistics;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Phrases read from the source, stopword-filtered and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    /// Non-empty phrases before dedup.
    pub total: usize,
    pub phrases: Vec<String>,
}

/// Everything a run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub ingested: Ingested,
    /// One lemmatized phrase per ingested phrase, same order.
    pub normalized: Vec<String>,
    pub condensed: CondensationResult,
}

impl PipelineOutput {
    pub fn report(&self, threshold: u8, scorer: &str) -> RunReport {
        RunReport {
            threshold,
            scorer: scorer.to_string(),
            ingested: self.ingested.total,
            unique: self.ingested.phrases.len(),
            normalized: self.normalized.len(),
            survivors: self.condensed.survivors.len(),
            merged: self.condensed.merged.len(),
            ..Default::default()
        }
    }
}

/// The main skill pipeline.
pub struct SkillPipeline {
    pub threshold: u8,
    aliases: AliasTable,
    linguistics: Linguistics,
}

impl SkillPipeline {
    pub fn new(linguistics: Linguistics, aliases: AliasTable, threshold: u8) -> Self {
        Self { threshold, aliases, linguistics }
    }

    /// Load linguistic resources named by `config` and build the pipeline.
    pub fn from_config(config: &CondenserConfig) -> Result<Self> {
        config.validate()?;
        let linguistics = Linguistics::load(config)?;
        Ok(Self::new(
            linguistics,
            AliasTable::with_extra(&config.aliases),
            config.threshold,
        ))
    }

    pub fn scorer_name(&self) -> &'static str {
        self.linguistics.scorer.name()
    }

    /// Lowercase and coalesce each line, segment it, filter stopwords, drop
    /// empty phrases and deduplicate.
    pub fn ingest(&self, text: &str) -> Ingested {
        let mut phrases = Vec::new();
        for line in text.lines() {
            let coalesced = self.aliases.coalesce(&line.to_lowercase());
            for fragment in stage1_segment::segment(&coalesced) {
                let filtered =
                    stage3_stopwords::remove_stopwords(&fragment, self.linguistics.stopwords.as_ref());
                if !filtered.is_empty() {
                    phrases.push(filtered);
                }
            }
        }
        let total = phrases.len();
        let phrases = stage5_dedup::deduplicate(&phrases);
        info!(total, unique = phrases.len(), "Ingested skills");
        Ingested { total, phrases }
    }

    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<Ingested> {
        let path = path.as_ref();
        info!(path = %path.display(), "Ingesting skills");
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SkError::SourceNotFound { path: path.to_path_buf() },
            _ => SkError::SourceUnreadable { path: path.to_path_buf(), source: e },
        })?;
        Ok(self.ingest(&text))
    }

    pub fn normalize(&self, phrases: &[String]) -> Vec<String> {
        info!(count = phrases.len(), "Normalizing skills");
        stage4_lemma::normalize_all(
            phrases,
            self.linguistics.tagger.as_ref(),
            self.linguistics.lemmatizer.as_ref(),
        )
    }

    pub fn condense(&self, normalized: &[String]) -> CondensationResult {
        stage6_condense::condense_with_threshold(
            normalized,
            self.linguistics.scorer.as_ref(),
            self.threshold,
        )
    }

    /// Run every stage over already-ingested phrases.
    pub fn process(&self, ingested: Ingested) -> PipelineOutput {
        let normalized = self.normalize(&ingested.phrases);
        let condensed = self.condense(&normalized);
        PipelineOutput { ingested, normalized, condensed }
    }

    /// Run every stage over raw text.
    pub fn run(&self, text: &str) -> PipelineOutput {
        self.process(self.ingest(text))
    }

    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<PipelineOutput> {
        Ok(self.process(self.ingest_file(path)?))
    }
}

impl Default for SkillPipeline {
    fn default() -> Self {
        Self::new(Linguistics::english(), AliasTable::default(), sk_core::config::DEFAULT_THRESHOLD)
    }
}
