use crate::*;
use std::path::Path;

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = CondenserConfig::default();
    assert_eq!(config.threshold, 80);
    assert_eq!(config.scorer, ScorerKind::Ratio);
    assert_eq!(config.stopwords.language, "en");
    assert!(config.aliases.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let toml = r#"
threshold = 90
scorer = "jaro-winkler"

[stopwords]
extra = ["experience", "proficient"]

[[aliases]]
pattern = "ms sql server"
canonical = "SQL Server"
"#;
    let config = CondenserConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.threshold, 90);
    assert_eq!(config.scorer, ScorerKind::JaroWinkler);
    assert_eq!(config.stopwords.extra, vec!["experience", "proficient"]);
    assert_eq!(config.stopwords.language, "en");
    assert_eq!(config.aliases, vec![AliasRule::new("ms sql server", "SQL Server")]);
    assert_eq!(config.outputs, OutputNames::default());
}

#[test]
fn test_config_empty_toml_is_default() {
    let config = CondenserConfig::from_toml_str("").unwrap();
    assert_eq!(config, CondenserConfig::default());
}

#[test]
fn test_config_threshold_out_of_range() {
    let err = CondenserConfig::from_toml_str("threshold = 101").unwrap_err();
    assert!(matches!(err, SkError::InvalidConfig(_)));
}

#[test]
fn test_config_bad_scorer() {
    let err = CondenserConfig::from_toml_str(r#"scorer = "cosine""#).unwrap_err();
    assert!(matches!(err, SkError::InvalidConfig(_)));
}

#[test]
fn test_config_empty_alias_pattern() {
    let config = CondenserConfig {
        aliases: vec![AliasRule::new("  ", "Nothing")],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("condenser.toml");
    std::fs::write(&path, "threshold = 70\n").unwrap();
    let config = CondenserConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.threshold, 70);
}

#[test]
fn test_config_missing_file() {
    let err = CondenserConfig::from_toml_file("/nonexistent/condenser.toml").unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn test_derived_outputs() {
    let config = CondenserConfig::default();
    let (normalized, removed) = config.derived_outputs(Path::new("/tmp/out/skills.txt"));
    assert_eq!(normalized, Path::new("/tmp/out/normalized_skills.txt"));
    assert_eq!(removed, Path::new("/tmp/out/removed_skills.txt"));
}

#[test]
fn test_scorer_kind_parse() {
    assert_eq!(ScorerKind::parse("Ratio"), Some(ScorerKind::Ratio));
    assert_eq!(ScorerKind::parse("jaro_winkler"), Some(ScorerKind::JaroWinkler));
    assert_eq!(ScorerKind::parse("levenshtein").map(|k| k.as_str()), Some("levenshtein"));
    assert_eq!(ScorerKind::parse("soundex"), None);
}

// ========== Errors ==========

#[test]
fn test_error_messages() {
    let err = SkError::SourceNotFound { path: "skills.txt".into() };
    assert_eq!(err.to_string(), "Skills file not found: skills.txt");
    let err = SkError::SourceUnreadable {
        path: "skills.txt".into(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not UTF-8"),
    };
    assert_eq!(err.to_string(), "Skills file unreadable: skills.txt: not UTF-8");
    let err = SkError::ResourceUnavailable("stopwords".into());
    assert!(err.to_string().contains("stopwords"));
}

// ========== Report ==========

#[test]
fn test_report_reduction() {
    let report = RunReport { unique: 10, survivors: 4, ..Default::default() };
    assert!((report.reduction_pct() - 60.0).abs() < 1e-9);
    assert_eq!(RunReport::default().reduction_pct(), 0.0);
}

#[test]
fn test_report_json() {
    let report = RunReport { threshold: 80, unique: 4, survivors: 2, ..Default::default() };
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["threshold"], 80);
    assert_eq!(value["survivors"], 2);
    assert_eq!(value["reduction_pct"], 50.0);
}
