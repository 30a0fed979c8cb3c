//! Skill condenser: reduces free-form skill lists to canonical root skills.
//!
//! Stages:
//! 1. Segment: split lines on `,`/`;` outside parentheses
//! 2. Brands: coalesce vendor aliases ("ms windows" -> "Windows")
//! 3. Stopwords: drop filler tokens
//! 4. Lemma: part-of-speech aware lemmatization
//! 5. Dedup: exact repeats, first occurrence wins
//! 6. Condense: greedy similarity-threshold merge

pub mod pipeline;
pub mod sink;
pub mod stage1_segment;
pub mod stage2_brands;
pub mod stage3_stopwords;
pub mod stage4_lemma;
pub mod stage5_dedup;
pub mod stage6_condense;

pub use pipeline::{Ingested, PipelineOutput, SkillPipeline};
pub use sink::{FileSink, OutputPaths, SkillSink};
pub use stage2_brands::AliasTable;
