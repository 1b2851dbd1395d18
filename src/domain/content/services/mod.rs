// src/domain/content/services/mod.rs
//! Pure text transforms run against content while it is edited and rendered.
pub mod excerpt;
pub mod read_time;
pub mod slug;
pub mod text;
pub mod toc;

pub use excerpt::{DEFAULT_EXCERPT_LENGTH, generate_excerpt, strip_html};
pub use read_time::{WORDS_PER_MINUTE, calculate_read_time, count_words, read_time_minutes};
pub use slug::{is_valid_slug, slugify};
pub use text::extract_plain_text;
pub use toc::{TocEntry, generate_table_of_contents};
