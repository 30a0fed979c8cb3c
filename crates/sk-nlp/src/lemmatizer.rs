//! Rule-based lemmatizer.
//!
//! Irregular forms come from exception tables; regular inflections are
//! detached by suffix rules and the stem is repaired with English spelling
//! rules (restore a silent `e`, undouble a final consonant). Tokens that are
//! not plain ASCII words (`node.js`, `c++`, `.net`) are returned unchanged.
//! There is no backing dictionary, so unknown proper nouns ending in `s` lose
//! it unless they are listed in [`INVARIANT_NOUNS`].

use crate::traits::{Lemmatizer, PartOfSpeech};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Nouns returned unchanged even though they look plural.
pub const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "kubernetes", "jenkins", "sales", "https",
    "postgres", "pandas", "atlas", "canvas", "alias", "saas", "paas", "iaas", "keras",
];

/// `-ops` names a practice (`devops`, `mlops`, `gitops`) and stays whole,
/// except for these ordinary plurals.
const OPS_PLURALS: &[&str] = &[
    "shops", "workshops", "loops", "stops", "drops", "laptops", "desktops", "crops", "props",
    "troops",
];

static NOUN_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("analyses", "analysis"),
        ("diagnoses", "diagnosis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("appendices", "appendix"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("halves", "half"),
    ])
});

static VERB_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (forms, base) in [
        (&["am", "is", "are", "was", "were", "been", "being"][..], "be"),
        (&["has", "had", "having"][..], "have"),
        (&["does", "did", "done", "doing"][..], "do"),
        (&["ran", "running"][..], "run"),
        (&["built"][..], "build"),
        (&["wrote", "written", "writing"][..], "write"),
        (&["taught"][..], "teach"),
        (&["thought"][..], "think"),
        (&["made", "making"][..], "make"),
        (&["brought"][..], "bring"),
        (&["bought"][..], "buy"),
        (&["sold"][..], "sell"),
        (&["held"][..], "hold"),
        (&["kept"][..], "keep"),
        (&["met"][..], "meet"),
        (&["paid"][..], "pay"),
        (&["sent"][..], "send"),
        (&["spent"][..], "spend"),
        (&["told"][..], "tell"),
        (&["won"][..], "win"),
        (&["understood"][..], "understand"),
        (&["drove", "driven"][..], "drive"),
        (&["spoke", "spoken"][..], "speak"),
        (&["chose", "chosen"][..], "choose"),
        (&["began", "begun"][..], "begin"),
        (&["grew", "grown"][..], "grow"),
        (&["knew", "known"][..], "know"),
        (&["gave", "given"][..], "give"),
        (&["took", "taken", "taking"][..], "take"),
        (&["saw", "seen"][..], "see"),
        (&["went", "gone"][..], "go"),
        (&["added", "adding"][..], "add"),
        (&["created", "creating"][..], "create"),
        (&["scaled", "scaling"][..], "scale"),
        (&["stored", "storing"][..], "store"),
        (&["explored", "exploring"][..], "explore"),
        (&["scored", "scoring"][..], "score"),
        (&["restored", "restoring"][..], "restore"),
        (&["ignored", "ignoring"][..], "ignore"),
        (&["controlled", "controlling"][..], "control"),
        (&["modelled", "modelling"][..], "model"),
        (&["labelled", "labelling"][..], "label"),
        (&["travelled", "travelling"][..], "travel"),
        (&["cancelled", "cancelling"][..], "cancel"),
        (&["excelled", "excelling"][..], "excel"),
        (&["synced", "syncing"][..], "sync"),
        (&["hanged", "hanging"][..], "hang"),
        (&["routed", "routing"][..], "route"),
    ] {
        for form in forms {
            m.insert(*form, base);
        }
    }
    m
});

static ADJECTIVE_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("more", "much"),
        ("most", "much"),
        ("less", "little"),
        ("least", "little"),
    ])
});

static ADVERB_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([("better", "well"), ("best", "well"), ("worse", "badly"), ("worst", "badly")])
});

/// Stem endings that take back a silent `e` once `-ed`/`-ing` is removed.
const SILENT_E_ENDINGS: &[&str] = &["v", "c", "iz", "yz", "bl", "dg", "ag", "ang", "erg", "uir"];

/// Endings that need a consonant before them to take back an `e`
/// (`integrat` → `integrate`, but `treat` stays).
const SILENT_E_AFTER_CONSONANT: &[&str] = &[
    "at", "ut", "ud", "od", "id", "ar", "ur", "ir", "os", "ul",
];

/// Suffix-stripping lemmatizer with exception tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self
    }
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(s: &str) -> bool {
    s.bytes().any(|c| is_vowel(c) || c == b'y')
}

fn is_consonant(c: u8) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Plural (noun) or third-person (verb) `-s` removal.
fn strip_plural(word: &str) -> Option<String> {
    if INVARIANT_NOUNS.contains(&word) {
        return None;
    }
    if word.len() <= 3 || !word.ends_with('s') {
        return None;
    }
    if word.ends_with("ops") && !OPS_PLURALS.contains(&word) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{stem}y"));
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if ["ss", "us", "is", "ics", "os"].iter().any(|s| word.ends_with(s)) {
        return None;
    }
    Some(word[..word.len() - 1].to_string())
}

/// Repair a stem left behind by `-ed`/`-ing` removal.
fn repair_stem(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    if n >= 3 && b[n - 1] == b[n - 2] && is_consonant(b[n - 1]) && !matches!(b[n - 1], b'l' | b's' | b'z') {
        return stem[..n - 1].to_string();
    }
    if SILENT_E_ENDINGS.iter().any(|e| stem.ends_with(e)) {
        return format!("{stem}e");
    }
    for ending in SILENT_E_AFTER_CONSONANT {
        if let Some(head) = stem.strip_suffix(ending) {
            if head.bytes().last().is_some_and(is_consonant) {
                return format!("{stem}e");
            }
        }
    }
    // Short consonant-vowel-consonant stems: cod -> code, tim -> time.
    if n <= 3
        && n >= 2
        && is_consonant(b[n - 1])
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
        && (is_vowel(b[n - 2]) || b[n - 2] == b'y')
        && (n == 2 || is_consonant(b[n - 3]))
    {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn lemmatize_verb(word: &str) -> String {
    if let Some(base) = VERB_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }
    if let Some(stem) = word.strip_suffix("ied") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return repair_stem(stem);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 && has_vowel(stem) && !word.ends_with("eed") {
            return repair_stem(stem);
        }
    }
    strip_plural(word).unwrap_or_else(|| word.to_string())
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(base) = NOUN_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }
    strip_plural(word).unwrap_or_else(|| word.to_string())
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str, pos: PartOfSpeech) -> String {
        if !token.bytes().all(|c| c.is_ascii_alphabetic()) {
            return token.to_string();
        }
        match pos {
            PartOfSpeech::Noun => lemmatize_noun(token),
            PartOfSpeech::Verb => lemmatize_verb(token),
            PartOfSpeech::Adjective => ADJECTIVE_EXCEPTIONS
                .get(token)
                .map_or_else(|| token.to_string(), |b| (*b).to_string()),
            PartOfSpeech::Adverb => ADVERB_EXCEPTIONS
                .get(token)
                .map_or_else(|| token.to_string(), |b| (*b).to_string()),
        }
    }
}
