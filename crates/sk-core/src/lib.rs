pub mod config;
pub mod error;
pub mod types;

pub use config::{AliasRule, CondenserConfig, OutputNames, ScorerKind, StopwordSource};
pub use error::{Result, SkError};
pub use types::{CondensationResult, RunReport};

#[cfg(test)]
mod tests;
