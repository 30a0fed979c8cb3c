//! Stage 5 (dedup): exact repeats removed, first occurrence kept in place.

use std::collections::HashSet;

pub fn deduplicate<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    phrases
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect()
}
