//! Word tokenizer.

use regex::Regex;
use std::sync::LazyLock;

/// Word runs may carry a leading `.`, inner `.`, `'` or `-` joiners and
/// trailing `+`/`#` (`.net`, `node.js`, `c++`, `c#`); any other punctuation is
/// a token of its own.
static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?\w+(?:[.'\-]\w+)*[+#]*|[^\w\s]").unwrap());

pub fn tokenize(text: &str) -> Vec<&str> {
    RE_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}
