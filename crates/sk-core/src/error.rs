use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkError {
    #[error("Skills file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("Skills file unreadable: {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {}: {source}", path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Linguistic resource unavailable: {0}")]
    ResourceUnavailable(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkError>;
