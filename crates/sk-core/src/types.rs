use serde::{Deserialize, Serialize};

/// Output of the fuzzy condenser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensationResult {
    /// Canonical phrases, in order of first acceptance.
    pub survivors: Vec<String>,
    /// Phrases judged near-duplicates of an earlier survivor, in input order.
    pub merged: Vec<String>,
}

impl CondensationResult {
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty() && self.merged.is_empty()
    }
}

/// Per-run counts, printed on request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub source: String,
    pub destination: String,
    pub threshold: u8,
    pub scorer: String,
    /// Phrases produced by segmentation, before dedup.
    pub ingested: usize,
    pub unique: usize,
    pub normalized: usize,
    pub survivors: usize,
    pub merged: usize,
}

impl RunReport {
    pub fn reduction_pct(&self) -> f64 {
        if self.unique == 0 {
            return 0.0;
        }
        (self.unique - self.survivors.min(self.unique)) as f64 / self.unique as f64 * 100.0
    }

    /// Pretty JSON with `reduction_pct` added alongside the counts.
    pub fn to_json(&self) -> crate::Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert("reduction_pct".to_string(), self.reduction_pct().into());
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
