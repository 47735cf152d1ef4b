//! Word extraction, counting and search over counted words

pub mod filter;
pub mod frequency;
pub mod search;
pub mod stop_words;
pub mod tokenizer;

pub use filter::{WordFilter, DEFAULT_MIN_WORD_LEN};
pub use frequency::{rank, WordCount, WordFrequencies};
pub use search::WordSearch;
pub use stop_words::StopWords;
pub use tokenizer::tokenize;
