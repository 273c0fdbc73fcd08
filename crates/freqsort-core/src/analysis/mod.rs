/// Analysis over finished pipeline results.

pub mod top_words;

pub use top_words::top_words;
