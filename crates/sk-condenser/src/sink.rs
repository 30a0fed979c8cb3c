//! Output sink: one phrase per line.

use crate::pipeline::PipelineOutput;
use sk_core::{CondenserConfig, Result, SkError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for a finished phrase list.
pub trait SkillSink {
    fn write(&self, phrases: &[String], dest: &Path) -> Result<()>;
}

/// Writes UTF-8 text files, each phrase newline-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl SkillSink for FileSink {
    fn write(&self, phrases: &[String], dest: &Path) -> Result<()> {
        info!(path = %dest.display(), count = phrases.len(), "Writing skills");
        let not_writable = |source: std::io::Error| SkError::OutputNotWritable { path: dest.to_path_buf(), source };
        let file = File::create(dest).map_err(not_writable)?;
        let mut out = BufWriter::new(file);
        for phrase in phrases {
            writeln!(out, "{phrase}").map_err(not_writable)?;
        }
        out.flush().map_err(not_writable)
    }
}

/// Where the three outputs of a run went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub condensed: PathBuf,
    pub normalized: PathBuf,
    pub removed: PathBuf,
}

impl OutputPaths {
    pub fn for_destination(dest: &Path, config: &CondenserConfig) -> Self {
        let (normalized, removed) = config.derived_outputs(dest);
        Self { condensed: dest.to_path_buf(), normalized, removed }
    }
}

/// Write condensed, normalized and removed lists in that order. Stops at the
/// first failure; files already written stay on disk.
pub fn write_outputs<S: SkillSink + ?Sized>(
    sink: &S,
    output: &PipelineOutput,
    paths: &OutputPaths,
) -> Result<()> {
    sink.write(&output.condensed.survivors, &paths.condensed)?;
    sink.write(&output.normalized, &paths.normalized)?;
    sink.write(&output.condensed.merged, &paths.removed)?;
    Ok(())
}
