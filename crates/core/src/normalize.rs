//! Text normalization for keyword analysis.
//!
//! Raw document text is reduced to a stream of lowercase, stemmed tokens:
//! punctuation is replaced with spaces, short tokens and English stop words
//! are dropped, and survivors are stemmed with the Snowball English
//! (Porter-family) algorithm. Token order is preserved and duplicates are
//! retained; frequency counting happens downstream in
//! [`keywords`](crate::keywords).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Curated English stop words, independent of any external corpus.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "is", "in", "to", "it", "that", "we", "for", "an", "are", "by", "be",
        "this", "with", "i", "you", "not", "or", "on", "your", "a", "of", "as", "at", "was",
        "were", "been", "has", "have", "had", "but", "from", "they", "them", "their", "there",
        "then", "than", "will", "would", "could", "should", "can", "may", "might", "all",
        "any", "each", "our", "ours", "out", "its", "his", "her", "him", "she", "who", "what",
        "which", "when", "where", "why", "how", "into", "over", "under", "about", "after",
        "before", "between", "through", "more", "most", "some", "such", "only", "also",
        "very", "just", "other", "these", "those", "does", "did", "doing", "no", "nor", "so",
        "too", "own", "same", "up", "down", "if", "because", "while", "during", "here",
    ]
    .into_iter()
    .collect()
});

/// Normalizes raw text into a sequence of stemmed tokens.
///
/// Every character that is not a word character or whitespace becomes a
/// space, the result is lowercased and split on whitespace, and tokens that
/// are empty, of length <= 2, or stop words are dropped. The remaining
/// tokens are stemmed to a fixed point (a single Snowball pass is not
/// always one, e.g. "parsing" stems to "pars" which stems again to "par"),
/// and the short-token and stop-word filters are applied once more to the
/// stems so that no output token ever falls back into the filtered set.
///
/// Empty input yields an empty sequence, not a failure. The function is
/// idempotent on its own output.
pub fn normalize_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let stemmer = Stemmer::create(Algorithm::English);
    let cleaned = NON_WORD_RE.replace_all(text, " ").to_lowercase();

    cleaned
        .split_whitespace()
        .filter(|word| keep_token(word))
        .map(|word| stem_fixed(&stemmer, word))
        .filter(|stem| keep_token(stem))
        .collect()
}

/// Re-stems a token until it is stable; convergence takes one or two
/// extra passes at most.
fn stem_fixed(stemmer: &Stemmer, word: &str) -> String {
    let mut stem = stemmer.stem(word).into_owned();
    loop {
        let next = stemmer.stem(&stem);
        if next == stem {
            return stem;
        }
        stem = next.into_owned();
    }
}

fn keep_token(token: &str) -> bool {
    token.chars().count() > 2 && !STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(normalize_text("").is_empty());
        assert!(normalize_text("   \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_stripped_and_lowercased() {
        let tokens = normalize_text("Rust-lang: fearless, CONCURRENT programming!");
        assert!(tokens.contains(&"rust".to_string()));
        assert!(tokens.contains(&"lang".to_string()));
        assert!(tokens.iter().all(|t| t.chars().all(|c| !c.is_uppercase())));
    }

    #[test]
    fn test_no_short_tokens_or_stop_words() {
        let tokens = normalize_text("the cat is on an old mat and it sat by me");
        for token in &tokens {
            assert!(token.chars().count() > 2, "short token {:?} survived", token);
            assert!(!STOP_WORDS.contains(token.as_str()), "stop word {:?} survived", token);
        }
    }

    #[test]
    fn test_required_stop_words_removed() {
        let required = [
            "the", "and", "is", "in", "to", "it", "that", "we", "for", "an", "are", "by",
            "be", "this", "with", "i", "you", "not", "or", "on", "your",
        ];
        let tokens = normalize_text(&required.join(" "));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_stemming() {
        assert_eq!(normalize_text("running"), vec!["run"]);
        assert_eq!(normalize_text("cats jumped"), vec!["cat", "jump"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokens = normalize_text("keyword density keyword");
        assert_eq!(tokens, vec!["keyword", "densiti", "keyword"]);
    }

    #[test]
    fn test_stems_to_fixed_point() {
        // "parsing" -> "pars" -> "par" under repeated Snowball passes; the
        // output must already be the stable form.
        let tokens = normalize_text("parsing documents requires careful handling");
        assert_eq!(tokens, vec!["par", "document", "requir", "care", "handl"]);
        let renormalized = normalize_text(&tokens.join(" "));
        assert_eq!(tokens, renormalized);
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        let tokens = normalize_text("rust crates parsing network sockets");
        let renormalized = normalize_text(&tokens.join(" "));
        assert_eq!(tokens, renormalized);
    }
}
