use once_cell::sync::Lazy;
use regex::Regex;

// Everything that is not a lowercase ASCII letter.
static NON_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z]").expect("Failed to compile non-letter regex")
});

// Whitespace that separates words: ASCII only, so U+00A0 and friends stay inside a word.
static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("Failed to compile separator regex")
});

/// Whether `character` separates words.
pub fn is_separator(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// A normalized word and its position within the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub position: usize,
}

/// Tokenizes one sentence.
///
/// # Arguments
///
/// * `sentence` - A single sentence as produced by the segmenter.
///
/// # Returns
///
/// Lowercase, letters-only tokens numbered from zero. Pieces left empty after
/// stripping do not take a position.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let sentence = sentence.to_lowercase();
    SEPARATOR_REGEX
        .split(&sentence)
        .map(|piece| NON_LETTER_REGEX.replace_all(piece, ""))
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(position, word)| Token {
            word: word.into_owned(),
            position,
        })
        .collect()
}
