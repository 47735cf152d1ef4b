//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordmap_core::WordCount;

/// Plain text formatter - outputs `word: count` per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{title}")?;
        Ok(())
    }

    fn format_word(&mut self, _rank: usize, entry: &WordCount) -> Result<()> {
        writeln!(self.writer, "{}: {}", entry.word, entry.count)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
