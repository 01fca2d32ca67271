//! Wordcount core: pure text measurement, no IO.
mod count;

pub use count::count_words;
