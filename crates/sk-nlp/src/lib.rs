//! Linguistic services consumed by the condensation pipeline.
//!
//! Each service sits behind a small trait so the pipeline can be driven by
//! stub implementations in tests:
//! - [`Tagger`]: coarse part of speech for a single token
//! - [`Lemmatizer`]: dictionary form for a token and part of speech
//! - [`StopwordSet`]: filler-word membership
//! - [`SimilarityScorer`]: 0-100 string similarity

pub mod lemmatizer;
pub mod linguistics;
pub mod similarity;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;
pub mod traits;

pub use lemmatizer::RuleLemmatizer;
pub use linguistics::Linguistics;
pub use similarity::{IndelRatio, JaroWinkler, NormalizedLevenshtein};
pub use stopwords::StopwordList;
pub use tagger::SuffixTagger;
pub use tokenize::tokenize;
pub use traits::{Lemmatizer, PartOfSpeech, SimilarityScorer, StopwordSet, Tagger};
