//! Flesch Reading Ease scoring and score interpretation.
//!
//! The analyzer reports the raw numeric score; interpretation is a pure
//! function of that number, applied at the presentation boundary. Two
//! scales coexist in the callers (a five-bucket reading-ease ladder in the
//! HTTP responses and a coarser three-bucket content rating in reports),
//! so both live here instead of being hard-wired into the analyzer.

use serde::Serialize;

/// Computes the Flesch Reading Ease score of a text.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
///
/// Sentences are `[.!?]`-delimited segments containing at least one
/// alphanumeric character; text with words but no terminator counts as a
/// single sentence. Returns `None` when the text has no words, which
/// callers surface as "Unable to calculate".
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
        .collect();

    if words.is_empty() {
        return None;
    }

    let sentences = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let word_count = words.len() as f64;
    let score = 206.835 - 1.015 * (word_count / sentences as f64) - 84.6 * (syllables as f64 / word_count);

    Some(score)
}

fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Estimates syllables by counting vowel groups, with a silent-e
/// adjustment. A word always counts for at least one syllable.
fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();

    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut previous_was_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            groups += 1;
        }
        previous_was_vowel = vowel;
    }

    if groups > 1 && chars.ends_with(&['e']) {
        groups -= 1;
    }

    groups.max(1)
}

/// Five-bucket reading-ease scale.
///
/// Boundaries are exclusive: a score of exactly 60 is `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingEase {
    VeryEasy,
    Easy,
    Moderate,
    Difficult,
    VeryDifficult,
}

impl ReadingEase {
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Self::VeryEasy
        } else if score > 60.0 {
            Self::Easy
        } else if score > 40.0 {
            Self::Moderate
        } else if score > 20.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

/// Three-bucket content rating used by report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentRating {
    Good,
    Fair,
    NeedsImprovement,
}

impl ContentRating {
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            Self::Good
        } else if score > 40.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Label for an optional score, covering the unscorable case.
pub fn interpret(score: Option<f64>) -> &'static str {
    match score {
        Some(s) => ReadingEase::from_score(s).label(),
        None => "Unable to calculate",
    }
}
