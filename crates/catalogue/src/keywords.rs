//! Keyword extraction from product names.

/// Split `name` on runs of whitespace and lower-case each token.
///
/// Token order is preserved. Never fails; an empty or blank name yields no
/// keywords.
pub fn extract_keywords(name: &str) -> Vec<String> {
    name.split_whitespace().map(fold_case).collect()
}

/// Simple per-character lower-casing shared by keywords and queries.
///
/// Each character maps on its own: no final-sigma rule, and `'İ'` folds to a
/// plain `'i'` rather than `"i\u{307}"`.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{130}' => folded.push('i'),
            c => folded.extend(c.to_lowercase()),
        }
    }
    folded
}
