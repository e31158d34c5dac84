use crate::tokenizer::is_separator;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits review text into sentences.
///
/// A sentence ends right after `.`, `!` or `?`; whitespace following the
/// terminator is consumed. Text without any terminator is one sentence.
/// Pieces are trimmed and empty pieces are dropped, so blank input yields
/// nothing.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (index, character) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&character) {
            let end = index + character.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim_matches(is_separator);
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_each_terminator() {
        let sentences = split_sentences("Great screen. Bad battery! Worth it? Yes");
        assert_eq!(sentences, vec!["Great screen.", "Bad battery!", "Worth it?", "Yes"]);
    }

    #[test]
    fn test_no_terminator_is_single_sentence() {
        assert_eq!(split_sentences("  camera is great  "), vec!["camera is great"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \t\n ").is_empty());
    }

    #[test]
    fn test_splits_without_following_whitespace() {
        assert_eq!(split_sentences("rated 3.5 stars"), vec!["rated 3.", "5 stars"]);
    }

    #[test]
    fn test_non_breaking_space_is_content() {
        assert_eq!(split_sentences("Great. \u{00A0}"), vec!["Great.", "\u{00A0}"]);
        assert_eq!(split_sentences(" \u{00A0}camera "), vec!["\u{00A0}camera"]);
    }

    #[test]
    fn test_repeated_terminators() {
        assert_eq!(split_sentences("Wow!! Nice."), vec!["Wow!", "!", "Nice."]);
    }
}
