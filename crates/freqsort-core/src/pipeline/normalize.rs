/// Stage 1: raw text -> tokens.
///
/// Strips ASCII punctuation, lowercases, splits on whitespace, and drops
/// stop words. No stemming and no Unicode normalization beyond
/// `str::to_lowercase`; counts downstream depend on this exact behaviour.
use crate::model::Token;

/// Characters removed before tokenizing: the 32 ASCII punctuation marks.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Words never counted.
pub const STOP_WORDS: [&str; 19] = [
    "the", "a", "an", "of", "to", "and", "in", "it", "that", "not", "as", "is", "at", "for",
    "but", "on", "or", "by", "from",
];

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Remove every ASCII punctuation character from `text`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Word separators: Unicode whitespace plus the ASCII file, group, record
/// and unit separators (`\x1c`..=`\x1f`).
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Turn raw text into the token sequence counted by the pipeline.
///
/// Token order follows the text, so the same input always yields the same
/// sequence.
pub fn normalize(text: &str) -> Vec<Token> {
    let cleaned = strip_punctuation(text).to_lowercase();
    cleaned
        .split(is_separator)
        .filter(|word| !word.is_empty() && !is_stop_word(word))
        .map(Token::new)
        .collect()
}
