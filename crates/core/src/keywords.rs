//! Keyword extraction over a normalized token stream.
//!
//! Frequency state is built per call and dropped with it, so concurrent
//! analyses can never bleed counts into each other.

use std::collections::HashMap;

/// Default number of keywords reported per analysis.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Returns the most frequent distinct tokens, best first.
///
/// Ties are broken by the order in which distinct tokens first appeared in
/// the input, which keeps the selection stable and reproducible. The output
/// length is `min(limit, distinct tokens)` and never contains a repeat.
pub fn top_keywords(tokens: &[String], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked.into_iter().map(|(token, _, _)| token.to_string()).collect()
}
