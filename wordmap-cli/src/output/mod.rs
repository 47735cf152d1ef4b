//! Output formatting module

use anyhow::Result;
use wordmap_core::WordCount;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Start a listing under `title`
    fn begin(&mut self, title: &str) -> Result<()>;

    /// Format and output a single ranked word
    fn format_word(&mut self, rank: usize, entry: &WordCount) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Write a ranked list through `formatter`
pub fn write_ranked<F>(formatter: &mut F, title: &str, entries: &[WordCount]) -> Result<()>
where
    F: OutputFormatter + ?Sized,
{
    formatter.begin(title)?;
    for (idx, entry) in entries.iter().enumerate() {
        formatter.format_word(idx + 1, entry)?;
    }
    formatter.finish()
}
