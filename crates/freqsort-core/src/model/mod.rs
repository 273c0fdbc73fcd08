/// Data model for the word-count pipeline.
///
/// Every value here lives for one pipeline run only and has no identity
/// beyond value equality.
pub mod frequency;
pub mod token;
pub mod word;

pub use frequency::FrequencyResult;
pub use token::Token;
pub use word::{GroupIndex, MappedPair, ShuffledGroup, WordCount};
