// src/domain/content/services/read_time.rs
pub const WORDS_PER_MINUTE: usize = 200;

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whole minutes needed to read `words`, rounded up.
pub const fn read_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Human readable reading time for `text` at 200 words per minute.
pub fn calculate_read_time(text: &str) -> String {
    match read_time_minutes(count_words(text)) {
        0 => "Less than 1 min".to_string(),
        1 => "1 min read".to_string(),
        minutes => format!("{minutes} min read"),
    }
}
