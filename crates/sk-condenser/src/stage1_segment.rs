//! Stage 1 (segment): split a raw line into candidate phrases.

/// Byte offsets of parentheses that have a partner. An `(` never closed and a
/// stray `)` are both ignored, so they neither open nor close a group.
fn matched_parens(line: &str) -> Vec<bool> {
    let mut matched = vec![false; line.len()];
    let mut open = Vec::new();
    for (i, c) in line.char_indices() {
        match c {
            '(' => open.push(i),
            ')' => {
                if let Some(start) = open.pop() {
                    matched[start] = true;
                    matched[i] = true;
                }
            }
            _ => {}
        }
    }
    matched
}

/// Split on `,` or `;` except inside a parenthesized group; fragments are trimmed.
/// Empty fragments are kept, callers drop them.
pub fn segment(line: &str) -> Vec<String> {
    let matched = matched_parens(line);
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in line.char_indices() {
        match c {
            '(' if matched[i] => depth += 1,
            ')' if matched[i] => depth -= 1,
            ',' | ';' if depth == 0 => {
                fragments.push(line[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(line[start..].trim().to_string());
    fragments
}
