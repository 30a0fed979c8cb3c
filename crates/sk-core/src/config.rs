//! Run configuration, loadable from TOML.

use crate::error::{Result, SkError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CondenserConfig {
    /// Minimum similarity (0-100) for a phrase to be merged into a survivor.
    pub threshold: u8,
    pub scorer: ScorerKind,
    pub stopwords: StopwordSource,
    /// Extra alias rules, tested before the built-in brand table.
    pub aliases: Vec<AliasRule>,
    pub outputs: OutputNames,
}

/// Similarity scorer used by the condenser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    /// Insert/delete edit ratio.
    #[default]
    Ratio,
    Levenshtein,
    JaroWinkler,
}

impl ScorerKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ratio" => Some(Self::Ratio),
            "levenshtein" => Some(Self::Levenshtein),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Some(Self::JaroWinkler),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::Levenshtein => "levenshtein",
            Self::JaroWinkler => "jaro-winkler",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StopwordSource {
    pub language: String,
    /// Optional word list, one word per line.
    pub file: Option<PathBuf>,
    pub extra: Vec<String>,
}

impl Default for StopwordSource {
    fn default() -> Self {
        Self {
            language: "en".into(),
            file: None,
            extra: Vec::new(),
        }
    }
}

/// A brand alias: any phrase containing `pattern` gets it rewritten to `canonical`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasRule {
    pub pattern: String,
    pub canonical: String,
}

impl AliasRule {
    pub fn new(pattern: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), canonical: canonical.into() }
    }
}

/// File names of the secondary outputs, written next to the destination file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputNames {
    pub normalized: String,
    pub removed: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            normalized: "normalized_skills.txt".into(),
            removed: "removed_skills.txt".into(),
        }
    }
}

impl Default for CondenserConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scorer: ScorerKind::default(),
            stopwords: StopwordSource::default(),
            aliases: Vec::new(),
            outputs: OutputNames::default(),
        }
    }
}

impl CondenserConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SkError::InvalidConfig(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold > 100 {
            return Err(SkError::InvalidConfig(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        if let Some(rule) = self.aliases.iter().find(|r| r.pattern.trim().is_empty()) {
            return Err(SkError::InvalidConfig(format!(
                "alias for '{}' has an empty pattern",
                rule.canonical
            )));
        }
        if self.outputs.normalized == self.outputs.removed {
            return Err(SkError::InvalidConfig(
                "normalized and removed outputs must use different file names".into(),
            ));
        }
        Ok(())
    }

    /// Paths of the normalized and removed outputs derived from the destination path.
    pub fn derived_outputs(&self, dest: &Path) -> (PathBuf, PathBuf) {
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        (dir.join(&self.outputs.normalized), dir.join(&self.outputs.removed))
    }
}
