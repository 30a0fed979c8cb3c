//! skill-condenser: condense a list of skills to root skills.
//!
//! Writes the condensed list to DEST, plus the normalized and removed lists
//! next to it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sk_condenser::sink::{write_outputs, FileSink, OutputPaths};
use sk_condenser::SkillPipeline;
use sk_core::{CondenserConfig, ScorerKind};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "skill-condenser")]
#[command(about = "Condenses a list of skills to root skills")]
#[command(version)]
struct Cli {
    /// Path to the source skills file
    src_skill_file: PathBuf,

    /// Path to the destination condensed skills file
    dest_skill_file: PathBuf,

    /// Similarity (0-100) at which a phrase is merged into an earlier one
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stopword list, one word per line (replaces the built-in list)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Similarity scorer: ratio, levenshtein or jaro-winkler
    #[arg(long, value_parser = parse_scorer)]
    scorer: Option<ScorerKind>,

    /// Print a JSON run report to stdout
    #[arg(long)]
    report: bool,
}

fn parse_scorer(name: &str) -> Result<ScorerKind, String> {
    ScorerKind::parse(name).ok_or_else(|| format!("unknown scorer '{name}'"))
}

impl Cli {
    /// File config first, then command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<CondenserConfig> {
        let mut config = match &self.config {
            Some(path) => CondenserConfig::from_toml_file(path)?,
            None => CondenserConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(path) = &self.stopwords {
            config.stopwords.file = Some(path.clone());
        }
        if let Some(scorer) = self.scorer {
            config.scorer = scorer;
        }
        config.validate()?;
        Ok(config)
    }
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("cannot resolve {}", path.display()))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let src = absolute(&cli.src_skill_file)?;
    let dest = absolute(&cli.dest_skill_file)?;
    info!(src = %src.display(), dest = %dest.display(), threshold = config.threshold, "Starting");

    let pipeline = SkillPipeline::from_config(&config)?;
    let output = pipeline.run_file(&src)?;
    if output.condensed.is_empty() {
        warn!(src = %src.display(), "No skills found");
    }

    let paths = OutputPaths::for_destination(&dest, &config);
    write_outputs(&FileSink, &output, &paths)?;

    if cli.report {
        let mut report = output.report(config.threshold, pipeline.scorer_name());
        report.source = src.display().to_string();
        report.destination = dest.display().to_string();
        println!("{}", report.to_json()?);
    }
    info!(
        survivors = output.condensed.survivors.len(),
        merged = output.condensed.merged.len(),
        "Done"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skill_condenser=info,sk_condenser=info,sk_nlp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("skill-condenser").chain(args.iter().copied()))
    }

    #[test]
    fn test_requires_both_paths() {
        assert!(parse(&["skills.txt"]).is_err());
        assert!(parse(&["skills.txt", "out.txt"]).is_ok());
    }

    #[test]
    fn test_threshold_range() {
        assert!(parse(&["a", "b", "--threshold", "101"]).is_err());
        let cli = parse(&["a", "b", "-t", "90"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().threshold, 90);
    }

    #[test]
    fn test_scorer_flag() {
        assert!(parse(&["a", "b", "--scorer", "cosine"]).is_err());
        let cli = parse(&["a", "b", "--scorer", "jaro-winkler"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().scorer, ScorerKind::JaroWinkler);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("condenser.toml");
        std::fs::write(&config, "threshold = 70\nscorer = \"levenshtein\"\n").unwrap();
        let config = config.to_str().unwrap();

        let cli = parse(&["a", "b", "--config", config]).unwrap();
        let resolved = cli.resolve_config().unwrap();
        assert_eq!(resolved.threshold, 70);
        assert_eq!(resolved.scorer, ScorerKind::Levenshtein);

        let cli = parse(&["a", "b", "--config", config, "--threshold", "85"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().threshold, 85);
    }

    #[test]
    fn test_run_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skills.txt");
        let dest = dir.path().join("condensed.txt");
        std::fs::write(&src, "Java, Javascript\nJavascripting\nMS Windows Server\n").unwrap();

        let cli = parse(&[src.to_str().unwrap(), dest.to_str().unwrap()]).unwrap();
        run(&cli).unwrap();

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("condensed.txt"), "java\njavascript\nwindow server\n");
        assert_eq!(read("normalized_skills.txt"), "java\njavascript\njavascript\nwindow server\n");
        assert_eq!(read("removed_skills.txt"), "javascript\n");
    }

    #[test]
    fn test_run_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skills.txt");
        let dest = dir.path().join("condensed.txt");
        std::fs::write(&src, "\n  ,  ;\nand\n").unwrap();

        let cli = parse(&[src.to_str().unwrap(), dest.to_str().unwrap()]).unwrap();
        run(&cli).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "");
        assert_eq!(std::fs::read_to_string(dir.path().join("removed_skills.txt")).unwrap(), "");
    }

    #[test]
    fn test_run_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.txt");
        let dest = dir.path().join("out.txt");
        let cli = parse(&[src.to_str().unwrap(), dest.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!dest.exists());
    }

    #[test]
    fn test_run_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skills.txt");
        std::fs::write(&src, "Python\n").unwrap();
        let dest = dir.path().join("no_such_dir").join("out.txt");
        let cli = parse(&[src.to_str().unwrap(), dest.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Cannot write"));
    }
}
