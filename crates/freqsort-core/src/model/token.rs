/// A normalized word unit.
///
/// Tokens are produced by the normalizer and are lowercase, free of ASCII
/// punctuation, non-empty, and never one of the stop words. Most English
/// words fit in `CompactString`'s inline buffer, so building millions of
/// tokens does not cost one heap allocation each.
use compact_str::CompactString;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Token(CompactString);

impl Token {
    /// Wrap an already-normalized word.
    ///
    /// The caller is responsible for normalization; an empty word is a
    /// logic error and trips a debug assertion.
    #[inline]
    pub fn new(word: impl Into<CompactString>) -> Self {
        let word = word.into();
        debug_assert!(!word.is_empty(), "Token must not be empty");
        Self(word)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
