//! Stage 2 (brands): coalesce vendor aliases to one canonical spelling.
//!
//! Matching is plain substring search on lowercased text. Only the first
//! matching rule is applied, so a phrase naming two different brands keeps
//! the second one verbatim.

use sk_core::AliasRule;
use std::sync::LazyLock;

pub const WINDOWS_SERVER: &str = "Windows Server";
pub const WINDOWS: &str = "Windows";

/// Server patterns contain the base patterns, so they come first.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("microsoft windows server", WINDOWS_SERVER),
    ("microsoft server", WINDOWS_SERVER),
    ("ms windows server", WINDOWS_SERVER),
    ("microsoft windows", WINDOWS),
    ("ms windows", WINDOWS),
];

static DEFAULT_TABLE: LazyLock<AliasTable> = LazyLock::new(AliasTable::default);

/// Ordered alias rules; earlier rules win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| AliasRule::new(r.pattern.to_lowercase(), r.canonical))
            .collect();
        Self { rules }
    }

    /// Built-in rules preceded by `extra`.
    pub fn with_extra(extra: &[AliasRule]) -> Self {
        let mut table = Self::new(extra.to_vec());
        table.rules.extend(Self::default().rules);
        table
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Rewrite every occurrence of the first matching pattern.
    pub fn coalesce(&self, phrase: &str) -> String {
        match self.rules.iter().find(|r| phrase.contains(r.pattern.as_str())) {
            Some(rule) => phrase.replace(rule.pattern.as_str(), &rule.canonical),
            None => phrase.to_string(),
        }
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.iter().map(|(p, c)| AliasRule::new(*p, *c)).collect())
    }
}

/// Coalesce with the built-in table.
pub fn coalesce(phrase: &str) -> String {
    DEFAULT_TABLE.coalesce(phrase)
}
